//! Built-in themes: three color schemes shipped with envnorm.

use ratatui::style::Color;

use super::Theme;

/// Default theme: plain terminal colors.
pub fn default() -> Theme {
    Theme {
        name: "Default".to_string(),

        label: Color::White,
        value: Color::Yellow,
        entry: Color::LightYellow,
        gauge: Color::Cyan,

        attack: Color::Green,
        decay: Color::Magenta,
        outside: Color::DarkGray,
        playhead: Color::White,

        status_fg: Color::White,
        status_bg: Color::DarkGray,
        running: Color::Green,
        stopped: Color::Red,

        help_key: Color::Yellow,
        help_desc: Color::White,
        log: Color::Gray,

        border: Color::White,
        border_focused: Color::Cyan,
        title: Color::Cyan,
    }
}

/// Mono: grayscale only, for terminals with poor color support.
pub fn mono() -> Theme {
    Theme {
        name: "Mono".to_string(),

        label: Color::Gray,
        value: Color::White,
        entry: Color::White,
        gauge: Color::Gray,

        attack: Color::White,
        decay: Color::Gray,
        outside: Color::DarkGray,
        playhead: Color::White,

        status_fg: Color::Black,
        status_bg: Color::Gray,
        running: Color::White,
        stopped: Color::DarkGray,

        help_key: Color::White,
        help_desc: Color::Gray,
        log: Color::DarkGray,

        border: Color::DarkGray,
        border_focused: Color::White,
        title: Color::White,
    }
}

/// Dusk: warm accents on a dark background.
pub fn dusk() -> Theme {
    Theme {
        name: "Dusk".to_string(),

        label: Color::Rgb(220, 215, 186),     // fuji white
        value: Color::Rgb(255, 160, 102),     // surimi orange
        entry: Color::Rgb(230, 195, 132),     // carp yellow
        gauge: Color::Rgb(126, 156, 216),     // crystal blue

        attack: Color::Rgb(152, 187, 108),    // spring green
        decay: Color::Rgb(210, 126, 153),     // sakura pink
        outside: Color::Rgb(84, 84, 109),     // sumi ink
        playhead: Color::Rgb(255, 160, 102),

        status_fg: Color::Rgb(220, 215, 186),
        status_bg: Color::Rgb(42, 42, 55),
        running: Color::Rgb(152, 187, 108),
        stopped: Color::Rgb(232, 36, 36),

        help_key: Color::Rgb(230, 195, 132),
        help_desc: Color::Rgb(220, 215, 186),
        log: Color::Rgb(114, 113, 105),

        border: Color::Rgb(84, 84, 109),
        border_focused: Color::Rgb(126, 156, 216),
        title: Color::Rgb(149, 127, 184),
    }
}

/// All builtin themes in cycle order.
pub fn all_builtins() -> Vec<Theme> {
    vec![default(), mono(), dusk()]
}

/// Find a builtin by name, ignoring case.
pub fn by_name(name: &str) -> Option<Theme> {
    all_builtins()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
