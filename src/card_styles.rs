//! Card style records and the collection they live in.
//!
//! A "card" is one named visual block of the homepage (clock, calendar,
//! music, ...). Each card carries a handful of layout attributes; the
//! collection maps card keys to their records and preserves insertion
//! order, which is also the rendering order of the editor table.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bundled default collection, applied verbatim on reset.
static DEFAULT_CARD_STYLES: LazyLock<CardStyles> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../config/card-styles-default.json"))
        .expect("bundled card style defaults must parse")
});

/// Layout attributes for one card.
///
/// `width` and `height` are structural: their presence decides whether the
/// attribute is editable at all. The offsets are value-level nullable:
/// `None` means "no override from the centered position" and is a state the
/// user can enter and leave at will.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    /// Width in pixels; absent means the card does not expose a width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels; absent means the card does not expose a height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Display order consumed by the homepage renderer.
    pub order: i64,
    /// Horizontal offset from the centered position; `None` is "unset".
    #[serde(default)]
    pub offset_x: Option<i64>,
    /// Vertical offset from the centered position; `None` is "unset".
    #[serde(default)]
    pub offset_y: Option<i64>,
    /// Whether the card is shown; absent displays as enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl CardStyle {
    /// Effective enabled state (absent defaults to true).
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// A typed edit to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Width(u32),
    Height(u32),
    Order(i64),
    OffsetX(Option<i64>),
    OffsetY(Option<i64>),
    Enabled(bool),
}

/// One field edit addressed to one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEdit {
    pub key: String,
    pub edit: FieldEdit,
}

/// Insertion-ordered collection of card style records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardStyles(pub IndexMap<String, CardStyle>);

impl CardStyles {
    pub fn get(&self, key: &str) -> Option<&CardStyle> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Card keys in rendering order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CardStyle)> {
        self.0.iter()
    }

    /// Apply one field edit as a shallow merge into the addressed record.
    ///
    /// Every other record and every other field of the edited record is left
    /// untouched. Width/height edits are dropped when the record does not
    /// carry the field, so edits can never introduce an attribute a card was
    /// defined without. Edits addressed to unknown keys are ignored.
    pub fn apply(&mut self, edit: &StyleEdit) {
        let Some(record) = self.0.get_mut(&edit.key) else {
            tracing::debug!(key = %edit.key, "edit addressed to unknown card, ignoring");
            return;
        };

        match edit.edit {
            FieldEdit::Width(v) => {
                if record.width.is_some() {
                    record.width = Some(v);
                }
            }
            FieldEdit::Height(v) => {
                if record.height.is_some() {
                    record.height = Some(v);
                }
            }
            FieldEdit::Order(v) => record.order = v,
            FieldEdit::OffsetX(v) => record.offset_x = v,
            FieldEdit::OffsetY(v) => record.offset_y = v,
            FieldEdit::Enabled(v) => record.enabled = Some(v),
        }
    }
}

/// The bundled default collection.
pub fn default_card_styles() -> &'static CardStyles {
    &DEFAULT_CARD_STYLES
}
