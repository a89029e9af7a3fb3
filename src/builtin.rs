pub const BUILTIN_CSS: &str = include_str!("builtin.css");

/// Themes styled by `BUILTIN_CSS`, in switcher order.
pub const THEMES: [&str; 3] = ["colorful", "light", "dark"];
