use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tintband_types::ColorValue;
use tintband_util::PickerConfig;

/// Pick a color in a band input: type a value or choose a swatch.
#[derive(Debug, Parser)]
#[command(name = "tintband", version, about)]
struct Cli {
    /// Initially selected color (any value the terminal renderer accepts, e.g. `#ff0000` or `red`)
    #[arg(long, value_name = "VALUE", conflicts_with = "no_color")]
    color: Option<String>,

    /// Start with no color selected, ignoring config and environment
    #[arg(long)]
    no_color: bool,

    /// Show the color in the text area instead of the button; `--show-as-text=false` forces the button
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    show_as_text: Option<bool>,

    /// Path to the picker config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Layer command-line values over the loaded configuration.
    fn resolve_config(&self) -> Result<PickerConfig> {
        let mut config = PickerConfig::load(self.config.as_deref()).context("failed to load picker config")?;
        if let Some(color) = self.color.as_deref() {
            config.selected_color = Some(ColorValue::new(color));
        }
        if self.no_color {
            config.selected_color = None;
        }
        if let Some(flag) = self.show_as_text {
            config.show_as_text = flag;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    tintband_tui::run(&config).await
}

/// Log to stderr so the alternate screen stays clean; `RUST_LOG` tunes the filter.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
