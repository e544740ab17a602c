use clap::Args;

use fact_config::Strategy;

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Control-flow style to compute with.
    #[arg(value_enum)]
    pub strategy: Strategy,

    #[arg(allow_negative_numbers = true)]
    pub n: i64,
}

pub fn handle_command(args: EvalArgs) -> anyhow::Result<()> {
    let EvalArgs { strategy, n } = args;

    let value = fact_core::evaluate(strategy, n)?;
    println!("{value}");
    Ok(())
}
