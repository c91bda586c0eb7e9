//! Theme system: configurable color schemes for the TUI.

pub mod builtin;
pub mod config;

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Fields panel
    pub label: Color,
    pub value: Color,
    pub entry: Color,
    pub gauge: Color,

    // Envelope
    pub attack: Color,
    pub decay: Color,
    pub outside: Color,
    pub playhead: Color,

    // Status bar
    pub status_fg: Color,
    pub status_bg: Color,
    pub running: Color,
    pub stopped: Color,

    // Help & activity
    pub help_key: Color,
    pub help_desc: Color,
    pub log: Color,

    // Borders & chrome
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
}

/// Load a theme: a named builtin wins, then theme.yaml, then the default.
pub fn load_theme(name: Option<&str>) -> Theme {
    name.and_then(builtin::by_name)
        .or_else(config::load_theme_from_yaml)
        .unwrap_or_else(builtin::default)
}

/// Cycle to the next theme in the list, wrapping around.
pub fn cycle_theme(current: &Theme, themes: &[Theme]) -> Theme {
    if themes.is_empty() {
        return current.clone();
    }
    let idx = themes
        .iter()
        .position(|t| t.name == current.name)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    themes[idx].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_builtin_is_loaded() {
        let theme = load_theme(Some("Mono"));
        assert_eq!(theme.name, "Mono");
    }

    #[test]
    fn unknown_name_still_yields_a_theme() {
        let theme = load_theme(Some("does-not-exist"));
        assert!(!theme.name.is_empty());
    }

    #[test]
    fn cycle_single_theme_stays() {
        let theme = builtin::default();
        let themes = vec![theme.clone()];
        let next = cycle_theme(&theme, &themes);
        assert_eq!(next.name, theme.name);
    }

    #[test]
    fn cycle_wraps_around() {
        let themes = builtin::all_builtins();
        assert!(themes.len() >= 2);
        let last = &themes[themes.len() - 1];
        let next = cycle_theme(last, &themes);
        assert_eq!(next.name, themes[0].name);
    }

    #[test]
    fn cycle_advances_to_next() {
        let themes = builtin::all_builtins();
        let next = cycle_theme(&themes[0], &themes);
        assert_eq!(next.name, themes[1].name);
    }

    #[test]
    fn cycle_from_custom_theme_starts_at_first() {
        let mut custom = builtin::default();
        custom.name = "Custom".to_string();
        let themes = builtin::all_builtins();
        assert_eq!(cycle_theme(&custom, &themes).name, themes[0].name);
    }

    #[test]
    fn cycle_empty_themes_returns_current() {
        let theme = builtin::default();
        let next = cycle_theme(&theme, &[]);
        assert_eq!(next.name, theme.name);
    }
}
