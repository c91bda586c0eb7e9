//! Theme YAML config: load a custom theme from ~/.envnorm/theme.yaml.

use ratatui::style::Color;
use serde::Deserialize;

use super::Theme;

/// Intermediate YAML representation: all fields optional.
#[derive(Debug, Deserialize)]
struct ThemeConfig {
    name: Option<String>,

    label: Option<String>,
    value: Option<String>,
    entry: Option<String>,
    gauge: Option<String>,

    attack: Option<String>,
    decay: Option<String>,
    outside: Option<String>,
    playhead: Option<String>,

    status_fg: Option<String>,
    status_bg: Option<String>,
    running: Option<String>,
    stopped: Option<String>,

    help_key: Option<String>,
    help_desc: Option<String>,
    log: Option<String>,

    border: Option<String>,
    border_focused: Option<String>,
    title: Option<String>,
}

/// Parse a color string: "#RRGGBB" hex or named color.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

/// Load a custom theme from ~/.envnorm/theme.yaml.
/// Returns None if the file doesn't exist or can't be parsed.
pub fn load_theme_from_yaml() -> Option<Theme> {
    let path = crate::config::config_dir().join("theme.yaml");
    let content = std::fs::read_to_string(path).ok()?;
    parse_theme_yaml(&content)
}

/// Parse a YAML string into a Theme, filling missing fields from default.
pub fn parse_theme_yaml(yaml: &str) -> Option<Theme> {
    let config: ThemeConfig = serde_yaml::from_str(yaml).ok()?;
    let d = super::builtin::default();

    let color_or = |opt: Option<String>, fallback: Color| -> Color {
        opt.and_then(|s| parse_color(&s)).unwrap_or(fallback)
    };

    Some(Theme {
        name: config.name.unwrap_or_else(|| "Custom".to_string()),

        label: color_or(config.label, d.label),
        value: color_or(config.value, d.value),
        entry: color_or(config.entry, d.entry),
        gauge: color_or(config.gauge, d.gauge),

        attack: color_or(config.attack, d.attack),
        decay: color_or(config.decay, d.decay),
        outside: color_or(config.outside, d.outside),
        playhead: color_or(config.playhead, d.playhead),

        status_fg: color_or(config.status_fg, d.status_fg),
        status_bg: color_or(config.status_bg, d.status_bg),
        running: color_or(config.running, d.running),
        stopped: color_or(config.stopped, d.stopped),

        help_key: color_or(config.help_key, d.help_key),
        help_desc: color_or(config.help_desc, d.help_desc),
        log: color_or(config.log, d.log),

        border: color_or(config.border, d.border),
        border_focused: color_or(config.border_focused, d.border_focused),
        title: color_or(config.title, d.title),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#c0caf5"), Some(Color::Rgb(192, 202, 245)));
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("White"), Some(Color::White));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
    }

    #[test]
    fn parse_invalid_color_returns_none() {
        assert_eq!(parse_color("#xyz"), None);
        assert_eq!(parse_color("rainbow"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = r##"
name: "Partial"
attack: "#00ff00"
border_focused: "green"
"##;
        let theme = parse_theme_yaml(yaml).unwrap();
        assert_eq!(theme.name, "Partial");
        assert_eq!(theme.attack, Color::Rgb(0, 255, 0));
        assert_eq!(theme.border_focused, Color::Green);
        let d = super::super::builtin::default();
        assert_eq!(theme.decay, d.decay);
        assert_eq!(theme.status_bg, d.status_bg);
    }

    #[test]
    fn unnamed_theme_is_custom() {
        let theme = parse_theme_yaml("decay: red\n").unwrap();
        assert_eq!(theme.name, "Custom");
        assert_eq!(theme.decay, Color::Red);
    }

    #[test]
    fn invalid_yaml_returns_none() {
        assert!(parse_theme_yaml("{{invalid").is_none());
    }

    #[test]
    fn invalid_hex_in_yaml_uses_default() {
        let theme = parse_theme_yaml("playhead: \"#xyz123\"\n").unwrap();
        let d = super::super::builtin::default();
        assert_eq!(theme.playhead, d.playhead);
    }
}
