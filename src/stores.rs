//! External state holders the editor writes through.
//!
//! The editor itself owns only a working copy of the collection. Committing
//! and the global layout-edit flag live behind these traits so the editor
//! can be driven against mocks in tests and against real stores in the
//! application shell.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::card_styles::{CardStyles, default_card_styles};

/// The shared configuration store: holds the authoritative card style
/// collection the homepage renders from.
pub trait ConfigStore {
    /// Replace the authoritative collection with `styles`.
    fn set_card_styles(&mut self, styles: CardStyles) -> Result<()>;
}

/// The global layout-edit mode flag.
///
/// While active, the homepage is in drag-based manual layout and a second
/// session must not be started.
pub trait LayoutEditStore {
    fn editing(&self) -> bool;
    fn start_editing(&mut self);
}

/// File-backed configuration store persisting the collection as JSON.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored collection; a missing file yields the bundled
    /// defaults.
    pub fn load(&self) -> Result<CardStyles> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no styles file, using bundled defaults");
            return Ok(default_card_styles().clone());
        }
        let content = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse {}", self.path.display()))
    }
}

impl ConfigStore for JsonConfigStore {
    fn set_card_styles(&mut self, styles: CardStyles) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&styles).wrap_err("Failed to serialize card styles")?;
        std::fs::write(&self.path, json)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), cards = styles.len(), "card styles committed");
        Ok(())
    }
}

/// In-process layout-edit flag.
#[derive(Debug, Default)]
pub struct LayoutEditState {
    editing: bool,
}

impl LayoutEditState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutEditStore for LayoutEditState {
    fn editing(&self) -> bool {
        self.editing
    }

    fn start_editing(&mut self) {
        self.editing = true;
    }
}
