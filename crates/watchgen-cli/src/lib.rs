mod config;
mod emit;
mod input;

pub use config::{Config, ContractSource, CONFIG_FILE};
pub use emit::JsonEmitter;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use watchgen_core::{Generator, Output};

#[derive(Parser, Debug)]
#[command(name = "watchgen")]
#[command(about = "Generates query and entity descriptors from contract interfaces")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory override
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level, used unless `RUST_LOG` is set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Build every descriptor but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Loads the configuration file and applies command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config)?;

        if let Some(output) = &self.output {
            config = config.output(output);
        }

        Ok(config)
    }

    pub fn run(&self) -> Result<Output> {
        let config = self.load_config()?;

        if self.dry_run {
            generate(&config)
        } else {
            run(&config)
        }
    }
}

pub fn init_tracing(log_level: &str) {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds every descriptor the configuration asks for, without writing
/// anything.
pub fn generate(config: &Config) -> Result<Output> {
    let mut generator = Generator::new();

    for source in &config.contracts {
        let contract = input::load_contract(source)?;
        generator.add_contract(&contract)?;
    }

    if let Some(path) = &config.schema {
        generator.import_schema(input::load_schema(path)?)?;
    }

    Ok(generator.finish()?)
}

/// Builds every descriptor, then writes them to the output directory.
pub fn run(config: &Config) -> Result<Output> {
    let output = generate(config)?;

    let mut emitter = JsonEmitter::new(&config.output);
    output.emit(&mut emitter)?;

    tracing::info!(
        files = emitter.written().len(),
        output = %config.output.display(),
        "descriptors written"
    );

    Ok(output)
}
