use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use tally_core::{ProcessResult, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full result envelope
    Json,
    /// Transactions only, one row each
    Csv,
}

pub fn write_json<W: Write>(out: W, result: &ProcessResult, pretty: bool) -> Result<()> {
    let mut out = out;
    if pretty {
        serde_json::to_writer_pretty(&mut out, result).context("serialize result")?;
    } else {
        serde_json::to_writer(&mut out, result).context("serialize result")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(out: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for t in txns {
        wtr.serialize(t).context("write csv row")?;
    }
    wtr.flush()?;
    Ok(())
}
