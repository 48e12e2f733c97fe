//! CLI entry point for homecard.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use homecard::card_styles::default_card_styles;
use homecard::cli::Cli;
use homecard::config::AppConfig;
use homecard::logging::init_logging;
use homecard::stores::{ConfigStore, JsonConfigStore};
use homecard::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    let styles_path = cli
        .styles
        .clone()
        .or_else(|| config.styles.path.clone())
        .unwrap_or_else(|| PathBuf::from("card-styles.json"));

    // --reset overwrites the styles file with the bundled defaults.
    if cli.reset {
        let mut store = JsonConfigStore::new(&styles_path);
        store.set_card_styles(default_card_styles().clone())?;
        eprintln!("Wrote default card styles to {}", store.path().display());
        return Ok(());
    }

    let store = JsonConfigStore::new(&styles_path);
    let styles = store.load()?;

    // --print dumps the effective collection without entering the TUI.
    if cli.print {
        let json =
            serde_json::to_string_pretty(&styles).wrap_err("Failed to serialize card styles")?;
        println!("{json}");
        return Ok(());
    }

    let log_file = cli.log_file.clone().or_else(|| config.log.file.clone());
    let log_level = cli.log_level.clone().or_else(|| config.log.level.clone());
    let _guard = init_logging(log_file.as_deref(), log_level.as_deref());

    tracing::info!(styles = %store.path().display(), cards = styles.len(), "starting editor");

    match tui::run(styles, store)? {
        tui::SessionOutcome::Quit => {}
        tui::SessionOutcome::ManualLayout => {
            eprintln!(
                "Manual layout mode active; card styles committed to {}",
                styles_path.display()
            );
        }
    }

    Ok(())
}
