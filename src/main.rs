//! GlyphBanner - render text as ASCII-art banners
//!
//! ```text
//!   ____ _             _     ____
//!  / ___| |_   _ _ __ | |__ | __ )  __ _ _ __  _ __   ___ _ __
//! | |  _| | | | | '_ \| '_ \|  _ \ / _` | '_ \| '_ \ / _ \ '__|
//! | |_| | | |_| | |_) | | | | |_) | (_| | | | | | | |  __/ |
//!  \____|_|\__, | .__/|_| |_|____/ \__,_|_| |_|_| |_|\___|_|
//!          |___/|_|
//! ```

use anyhow::Context;
use clap::Parser;
use glyphbanner_config::{Config, ConfigManager};
use glyphbanner_core::{BannerError, FontName, FontRegistry, RenderRequest};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render printable ASCII text as a multi-line banner
#[derive(Parser, Debug)]
#[command(name = "glyphbanner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render (reads stdin if omitted). `\n` starts a new line.
    text: Option<String>,

    /// Font to render with: standard, shadow, thinkertoy
    #[arg(short = 'f', long)]
    font: Option<FontName>,

    /// Directory holding the font resources
    #[arg(short = 'd', long)]
    fonts_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print the result (or error) as JSON
    #[arg(long)]
    json: bool,

    /// List available fonts and exit
    #[arg(long)]
    list_fonts: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Outcome of one render, as printed by `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Banner(String),
    Error(ErrorReport),
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    kind: &'static str,
    status: u16,
    message: String,
}

impl From<&BannerError> for ErrorReport {
    fn from(err: &BannerError) -> Self {
        Self {
            kind: err.kind().name(),
            status: err.kind().status_code(),
            message: err.to_string(),
        }
    }
}

/// Exit status for a failed render: 1 for operator problems, 2 for bad input
fn exit_status(err: &BannerError) -> u8 {
    if err.kind().is_operator_facing() {
        1
    } else {
        2
    }
}

/// Turn physical input lines into request-layer segments.
///
/// Every line break becomes a `\r\n` hard separator and the final line
/// ending is dropped.
fn text_from_stdin(raw: &str) -> String {
    raw.lines().collect::<Vec<_>>().join("\r\n")
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let manager = match &args.config {
        Some(path) => ConfigManager::from_path(path)?,
        None => ConfigManager::new()?,
    };

    manager.update(|config| {
        if let Some(dir) = &args.fonts_dir {
            config.fonts.directory = dir.clone();
        }
    });

    Ok(manager.config())
}

fn init_logging(debug: bool, config: &Config) {
    let log_level = if debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!("glyphbanner={log_level},glyphbanner_core={log_level}")
            }),
        ))
        .init();
}

fn list_fonts(registry: &FontRegistry, default: FontName) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    for &font in FontName::all() {
        let marker = if font == default { "*" } else { " " };
        writeln!(stdout, "{} {:<12} {}", marker, font, registry.locate(font))?;
    }
    Ok(())
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = load_config(&args)?;
    init_logging(args.debug, &config);

    tracing::debug!("Starting GlyphBanner v{}", glyphbanner_core::VERSION);

    let registry = config.fonts.registry();
    let font = args.font.unwrap_or(config.general.default_font);

    if args.list_fonts {
        list_fonts(&registry, font)?;
        return Ok(ExitCode::SUCCESS);
    }

    if config.fonts.preload {
        if let Err(e) = registry.preload() {
            tracing::warn!("Font preload failed: {}", e);
        }
    }

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("cannot read stdin")?;
            text_from_stdin(&raw)
        }
    };

    let request = RenderRequest::new(text, font);
    let result = registry.render_request(&request);

    let mut stdout = io::stdout().lock();
    let code = match &result {
        Ok(banner) => {
            if args.json {
                serde_json::to_writer(&mut stdout, &Outcome::Banner(banner.clone()))?;
                writeln!(stdout)?;
            } else {
                write!(stdout, "{}", banner)?;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if err.kind().is_operator_facing() {
                tracing::error!("Cannot render with font {}: {}", font, err);
            } else {
                tracing::debug!("Rejected input: {}", err);
            }

            if args.json {
                serde_json::to_writer(&mut stdout, &Outcome::Error(err.into()))?;
                writeln!(stdout)?;
            } else {
                eprintln!("error: {}", err);
            }
            ExitCode::from(exit_status(err))
        }
    };
    stdout.flush()?;

    Ok(code)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
