use clap::Parser;
use fact_cli::{command, setup_logger, Cli};

fn main() -> anyhow::Result<()> {
    let Cli { verbose, command } = Cli::parse();
    let _guard = setup_logger(verbose)?;

    command::handle_command(command)
}
