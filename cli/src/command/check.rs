use std::io::Write;

use anyhow::Context;
use clap::Args;

use fact_config::{Config, DriverConfig};

#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    /// Input to evaluate at. Read from FACT_DRIVER_INPUT if omitted.
    #[arg(long, allow_negative_numbers = true)]
    pub input: Option<i64>,

    /// Print the computed values as JSON before the verdict.
    #[arg(long)]
    pub json: bool,
}

pub fn handle_command(args: CheckArgs) -> anyhow::Result<()> {
    let CheckArgs { input, json } = args;

    let n = match input {
        Some(n) => n,
        None => {
            DriverConfig::from_env()
                .context("failed to load driver configuration")?
                .input
        }
    };

    let mut out = std::io::stdout().lock();
    if json {
        let report = fact_core::check(n)?;
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
        writeln!(out, "{}", report.message())?;
    } else {
        fact_core::run(n, &mut out)?;
    }
    Ok(())
}
