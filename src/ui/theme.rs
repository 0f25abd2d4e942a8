use ratatui::style::{Color, Modifier, Style};

// Centralized colors and styles for the panel chrome. Kept as small
// helpers so the engine can swap the accent from config without the
// panels knowing where it came from.

pub fn accent() -> Color {
    Color::Cyan
}

pub fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

// Cursor row: reverse video everywhere, accent foreground only on the
// focused panel so the eye lands on the pane that takes input.
pub fn cursor_style(focused: bool, accent: Color) -> Style {
    let style = Style::default().add_modifier(Modifier::REVERSED);
    if focused {
        style.fg(accent)
    } else {
        style
    }
}

/// Maps a configured color name onto a terminal color. Unknown names
/// return `None` so callers fall back to the default accent.
pub fn color_from_name(name: &str) -> Option<Color> {
    let color = match name.trim().to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}
