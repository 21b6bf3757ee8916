use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::ProcessorConfig;

pub fn tally_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tally"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> Result<ProcessorConfig> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ProcessorConfig =
        toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the effective configuration.
///
/// Precedence: explicit `--config` file, then `--preset`, then
/// `~/.tally/config.toml` if it exists, then the canonical preset.
pub fn load_config(explicit: Option<&Path>, preset: Option<&str>) -> Result<ProcessorConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    if let Some(name) = preset {
        return match ProcessorConfig::preset(name) {
            Some(cfg) => Ok(cfg),
            None => bail!("unknown preset: {name} (expected canonical or detailed)"),
        };
    }

    let p = config_path()?;
    if p.exists() {
        tracing::debug!(path = %p.display(), "using config file");
        return read_config(&p);
    }

    Ok(ProcessorConfig::canonical())
}

pub fn save_config(path: &Path, cfg: &ProcessorConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if p.exists() && !force {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&p, &ProcessorConfig::canonical())?;
    println!("Wrote {}", p.display());
    Ok(())
}
