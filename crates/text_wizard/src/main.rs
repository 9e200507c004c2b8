#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

mod clipboard;
mod commands;
mod fonts;
mod options;

pub use options::*;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use wizard_engine::{effects::copy_result, effects::font_status, Layout, Separator};

use crate::{clipboard::FileClipboard, fonts::SystemFonts};

#[derive(Parser, Debug)]
#[command(version, about = "Repeat text, draw emoji pixel art and convert text to Unicode letter styles", long_about = None)]
pub struct Args {
    /// Also write the result into FILE
    #[arg(long, value_name = "FILE", global = true)]
    copy_to: Option<PathBuf>,

    /// Options file to use instead of the one in the config directory
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Repeat a text up to 100000 times
    Repeat {
        text: String,
        /// Number of copies, 1 - 100000
        #[arg(short, long, value_name = "N")]
        count: Option<String>,
        #[arg(short, long)]
        separator: Option<Separator>,
    },

    /// Draw a text as emoji pixel art
    Pixel {
        text: String,
        /// Glyph used for lit pixels
        #[arg(short, long, value_name = "GLYPH")]
        foreground: Option<String>,
        /// Glyph used for unlit pixels
        #[arg(short, long, value_name = "GLYPH")]
        background: Option<String>,
        #[arg(short, long)]
        layout: Option<Layout>,
    },

    /// Convert a text to Unicode letter styles
    Styles {
        text: String,
        /// Only convert with this style
        #[arg(short, long, value_name = "NAME")]
        style: Option<String>,
        /// Treat characters above this code point (hex 0x.. / U+.. or decimal) as unrenderable
        #[arg(long, value_name = "CODEPOINT", value_parser = commands::parse_codepoint)]
        max_codepoint: Option<u32>,
        /// Font file to probe rendering with, may be repeated
        #[arg(long = "font", value_name = "FILE")]
        fonts: Vec<PathBuf>,
        /// Print a compatibility report for every style
        #[arg(short, long)]
        report: bool,
    },

    /// Show the suggested paint glyphs
    Palette,

    /// Show which of the recommended math fonts are installed
    Fonts,

    /// Show the options file, --init writes it with the current values
    Config {
        #[arg(long)]
        init: bool,
    },
}

fn start_logger() -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str("warn") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Invalid log specification: {err}");
            return None;
        }
    };
    let handle = if let Some(log_dir) = Options::get_log_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("text_wizard").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .create_symlink(log_dir.join("text_wizard.log"))
            .duplicate_to_stderr(Duplicate::Warn)
            .start()
    } else {
        eprintln!("Failed to create log file");
        logger.log_to_stderr().start()
    };
    match handle {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _logger = start_logger();
    log::info!("Starting text_wizard {}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = match &args.config {
        Some(path) => Options::load_from(path),
        None => Options::load_options(),
    };

    let output = match args.command {
        Command::Repeat { text, count, separator } => commands::repeat(&options, &text, count.as_deref(), separator)?,
        Command::Pixel {
            text,
            foreground,
            background,
            layout,
        } => commands::pixel(&options, &text, foreground.as_deref(), background.as_deref(), layout)?,
        Command::Styles {
            text,
            style,
            max_codepoint,
            fonts,
            report,
        } => {
            let needs_fonts = max_codepoint.or(options.max_codepoint).is_none() && options.scan_system_fonts;
            let system = needs_fonts.then(SystemFonts::scan);
            if let Some(system) = &system {
                commands::log_font_status(system);
            }
            let probe = commands::build_probe(&options, max_codepoint, &fonts, system.as_ref());
            let results = commands::styles(&text, style.as_deref(), &*probe)?;
            print!("{}", commands::format_styles(&results, report));
            copy(args.copy_to, &commands::styled_copy_text(&results));
            return Ok(());
        }
        Command::Palette => commands::format_palette(),
        Command::Fonts => commands::format_font_status(&font_status(&SystemFonts::scan())),
        Command::Config { init } => {
            let file = args.config.or_else(Options::get_options_file);
            let Some(file) = file else {
                anyhow::bail!("No configuration directory available");
            };
            if init {
                options.store_options(&file)?;
            }
            println!("# {}", file.display());
            toml::to_string(&options)?
        }
    };

    println!("{output}");
    copy(args.copy_to, &output);
    Ok(())
}

fn copy(target: Option<PathBuf>, text: &str) {
    if let Some(path) = target {
        let mut clipboard = FileClipboard::new(path);
        if copy_result(&mut clipboard, text) {
            eprintln!("Copied to clipboard file");
        }
    }
}
