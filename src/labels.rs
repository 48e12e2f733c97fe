//! Display labels for card keys.

/// Known card vocabulary and its human-readable labels.
const CARD_LABELS: &[(&str, &str)] = &[
    ("artCard", "Cover Image"),
    ("hiCard", "Center"),
    ("clockCard", "Clock"),
    ("calendarCard", "Calendar"),
    ("musicCard", "Music"),
    ("socialButtons", "Contact"),
    ("shareCard", "Share"),
    ("articleCard", "Article"),
    ("writeButtons", "Write"),
    ("navCard", "Navigation"),
    ("likePosition", "Like"),
    ("hatCard", "Hat"),
    ("beianCard", "Record"),
];

/// Resolve the display label for a card key.
///
/// Keys outside the known vocabulary get a derived label: a space inserted
/// before each uppercase letter, then trimmed. `"customInfoCard"` becomes
/// `"custom Info Card"`. Total: every key has a label.
pub fn card_label(key: &str) -> String {
    CARD_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| derive_label(key))
}

/// Fallback transform for unknown keys.
fn derive_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label.trim().to_string()
}
