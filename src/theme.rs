use crate::document::Document;
use crate::store::KeyValueStore;

pub const THEME_KEY: &str = "theme";
pub const DEFAULT_THEME: &str = "colorful";

pub fn load_theme<S: KeyValueStore>(store: &S) -> String {
    store
        .get(THEME_KEY)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_THEME.to_string())
}

pub fn save_theme<S: KeyValueStore>(store: &mut S, theme: &str) {
    store.set(THEME_KEY, theme);
}

/// Sets `data-theme` on the root element and marks the matching switcher button active.
pub fn apply_theme<D: Document>(document: &mut D, theme: &str) {
    document.set_root_attribute("data-theme", theme);
    document.toggle_class_by_attr(".theme-btn", "active", "data-theme", theme);
}
