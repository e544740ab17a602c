use clap::Subcommand;

pub mod check;
pub mod eval;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the factorial three ways and report whether the results agree.
    Check(check::CheckArgs),
    /// Compute the factorial with a single strategy.
    Eval(eval::EvalArgs),
    /// Print "Nothing".
    Nothing,
}

pub fn handle_command(cmd: Option<Command>) -> anyhow::Result<()> {
    match cmd.unwrap_or_else(|| Command::Check(check::CheckArgs::default())) {
        Command::Check(args) => check::handle_command(args),
        Command::Eval(args) => eval::handle_command(args),
        Command::Nothing => {
            fact_core::nothing(&mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}
