//! PostPeek - Terminal-based social post previewer
//!
//! This application renders a live, editable preview of a social-media text
//! post, approximating platform truncation across device widths, with
//! optional media attachments and profile identity fields.

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

use postpeek::constants::{APP_BINARY_NAME, APP_NAME, SAMPLE_POST};
use postpeek::export::{write_card, CardSnapshot, ExportOptions, TextCardRasterizer};
use postpeek::formatter::auto_space;
use postpeek::models::{resolve_identity, DeviceClass, MediaAttachment, PostDraft};
use postpeek::settings::Settings;
use postpeek::tui::{self, AppState, Theme, ThemeMode};

/// PostPeek - Terminal-based social post previewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a draft text file
    #[arg(value_name = "FILE")]
    draft_path: Option<PathBuf>,

    /// Load the bundled sample post into the draft
    #[arg(long)]
    sample: bool,

    /// Device class for the preview (compact, tablet, wide)
    #[arg(long, value_name = "CLASS", default_value = "compact")]
    device: String,

    /// Theme mode (auto, dark, light)
    #[arg(long, value_name = "MODE", default_value = "auto")]
    theme: String,

    /// Apply auto-spacing to the draft, print it to stdout, and exit
    #[arg(long)]
    auto_space: bool,

    /// Render the preview card to a file and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let device: DeviceClass = cli.device.parse().map_err(|e: String| anyhow!(e))?;
    let theme_mode: ThemeMode = cli.theme.parse().map_err(|e: String| anyhow!(e))?;

    // Resolve the initial draft text
    let text = if let Some(path) = &cli.draft_path {
        if !path.exists() {
            eprintln!("Error: Draft file not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a plain-text draft file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} my_post.txt", APP_BINARY_NAME);
            eprintln!("  {} --sample", APP_BINARY_NAME);
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {} --help", APP_BINARY_NAME);
            std::process::exit(1);
        }
        std::fs::read_to_string(path)?
    } else if cli.sample {
        SAMPLE_POST.to_string()
    } else {
        String::new()
    };

    // Headless mode: format and print
    if cli.auto_space {
        println!("{}", auto_space(&text));
        return Ok(());
    }

    // Load persisted identity settings once at startup
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load settings: {e:#}");
        Settings::new()
    });

    let draft = PostDraft::from_text(text);

    // Headless mode: render the card to a file
    if let Some(export_path) = cli.export {
        let theme = Theme::from_mode(theme_mode);
        let snapshot = CardSnapshot {
            identity: resolve_identity(&settings),
            text: draft.text().to_string(),
            media: MediaAttachment::None,
            view: device.view_config(),
            dark_mode: theme.is_dark(),
            age_label: draft.age_label(Utc::now()),
        };
        let options = ExportOptions::for_theme(theme.is_dark());
        write_card(&snapshot, &options, &TextCardRasterizer, &export_path)?;
        println!("Exported: {}", export_path.display());
        return Ok(());
    }

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal-based social post previewer");
    println!();

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut state = AppState::new(draft, cli.draft_path, settings, device, theme_mode);

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
