//! Render the address-lookup interaction flow as a vector diagram.

use std::path::PathBuf;

use clap::Parser;
use swimlane_core::{build, export, BuildError, Config, ExportError, Theme};

mod flow;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown theme `{0}`; available: {themes}", themes = Theme::available_themes().join(", "))]
    UnknownTheme(String),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Parser, Debug)]
#[command(
    name = "postcode-flow",
    about = "Render the postcode address-lookup swimlane diagram as a vector PDF/SVG"
)]
struct Cli {
    /// Page width in inches
    #[arg(long, default_value_t = 20.0)]
    width: f64,

    /// Page height in inches
    #[arg(long, default_value_t = 14.0)]
    height: f64,

    /// Lane title font size in points
    #[arg(long = "title-font", default_value_t = 16.0)]
    title_font: f64,

    /// Caption font size in points
    #[arg(long = "caption-font", default_value_t = 12.0)]
    caption_font: f64,

    /// Caption wrap width in characters
    #[arg(long, default_value_t = 50)]
    wrap: usize,

    /// Color theme (default, gray, modern-blue)
    #[arg(long)]
    theme: Option<String>,

    /// Output file; the extension picks the format (.pdf or .svg)
    #[arg(long, default_value = "postcode-flow.pdf")]
    output: PathBuf,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let theme = match cli.theme.as_deref() {
        Some(name) => Theme::by_name(name).ok_or_else(|| CliError::UnknownTheme(name.to_string()))?,
        None => Theme::default(),
    };
    let config = Config {
        page_width: cli.width,
        page_height: cli.height,
        title_font: cli.title_font,
        caption_font: cli.caption_font,
        wrap_width: cli.wrap,
        theme,
        ..Config::default()
    };

    let lanes = flow::lanes();
    let steps = flow::steps();
    tracing::debug!(lanes = lanes.len(), steps = steps.len(), "rendering address-lookup flow");

    let canvas = build(config, &lanes, &steps)?;
    export(&canvas, &cli.output)?;
    println!("Saved: {}", cli.output.display());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
