use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sprite_icons::{GenerateOptions, generate};

/// Generates the toolbar icon set from the 16px and 32px sprite sheets.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Directory containing sprites16.png and sprites32.png
    #[arg(long, value_name = "DIR")]
    sprites_dir: Option<PathBuf>,

    /// Existing directory to write the icons into
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl Cli {
    fn options(self) -> GenerateOptions {
        let defaults = GenerateOptions::default();
        GenerateOptions {
            sprites_dir: self.sprites_dir.unwrap_or(defaults.sprites_dir),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
        }
    }
}

fn setup_logger() {
    use tracing::Level;
    use tracing_subscriber::{
        Registry, filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt,
    };

    Registry::default()
        .with(LevelFilter::from(Level::INFO))
        .with(layer().with_ansi(true).with_target(false).without_time())
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger();

    match generate(&cli.options()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            tracing::error!("{message}");
            ExitCode::FAILURE
        }
    }
}
