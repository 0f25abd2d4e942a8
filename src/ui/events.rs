use crossterm::event::{Event, KeyCode, KeyEventKind};

/// Events the navigation engine acts on. The key vocabulary is fixed;
/// anything else is dropped at translation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    MoveDown,
    MoveUp,
    Left,
    Right,
    Resize(u16, u16),
}

/// Maps a raw terminal event onto the key vocabulary. Only key presses
/// count, so terminals reporting repeat/release kinds don't double-fire.
pub fn translate(event: &Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('j') => Some(AppEvent::MoveDown),
            KeyCode::Char('k') => Some(AppEvent::MoveUp),
            KeyCode::Char('h') => Some(AppEvent::Left),
            KeyCode::Char('l') => Some(AppEvent::Right),
            _ => None,
        },
        Event::Resize(width, height) => Some(AppEvent::Resize(*width, *height)),
        _ => None,
    }
}
