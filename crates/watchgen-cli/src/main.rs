use clap::Parser;
use watchgen_cli::{init_tracing, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    cli.run()?;
    Ok(())
}
