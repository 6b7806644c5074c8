//! Key string parsing
//!
//! Keys are written as `ctrl-k`, `alt-enter`, `super-k`, `f1` and so on.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Parse a key string like "ctrl-t" into a `KeyEvent`
///
/// Returns `None` for unknown key names.
#[must_use]
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    // A lone "-" is the minus key, not a separator
    if s == "-" {
        return Some(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE));
    }

    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let key_part = parts.last()?;

    for part in &parts[..parts.len().saturating_sub(1)] {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "super" | "cmd" | "meta" => modifiers |= KeyModifiers::SUPER,
            _ => return None,
        }
    }

    let code = match key_part.to_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "btab" | "backtab" => KeyCode::BackTab,
        "bspace" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        s if s.starts_with('f') && s.len() > 1 => s[1..].parse().ok().map(KeyCode::F)?,
        s if s.chars().count() == 1 => KeyCode::Char(s.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Convert a key event back to its string form
#[must_use]
pub fn key_to_string(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut result = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if key.modifiers.contains(KeyModifiers::SUPER) {
        result.push_str("super-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        result.push_str("shift-");
    }
    result.push_str(&base);

    Some(result)
}

/// Human-readable form for help screens, e.g. `Ctrl+K`
#[must_use]
pub fn key_to_human(key: &str) -> String {
    key.split('-')
        .map(|part| match part {
            "ctrl" => "Ctrl".to_string(),
            "alt" => "Alt".to_string(),
            "shift" => "Shift".to_string(),
            "super" => "Super".to_string(),
            "esc" => "Esc".to_string(),
            "enter" => "Enter".to_string(),
            "up" => "↑".to_string(),
            "down" => "↓".to_string(),
            other => other.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_string() {
        assert_eq!(
            parse_key_string("ctrl-k"),
            Some(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            parse_key_string("super-k"),
            Some(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER))
        );
        assert_eq!(parse_key_string("esc"), Some(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert_eq!(parse_key_string("F1"), Some(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)));
        assert_eq!(parse_key_string("-"), Some(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(parse_key_string("hyper-k"), None);
        assert_eq!(parse_key_string("ctrl-banana"), None);
        assert_eq!(parse_key_string(""), None);
    }

    #[test]
    fn test_key_to_string() {
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some("enter".to_string())
        );
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some("ctrl-t".to_string())
        );
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)),
            Some("f1".to_string())
        );
    }

    #[test]
    fn test_string_forms_agree() {
        for key in ["ctrl-k", "super-k", "esc", "alt-enter", "f5", "home"] {
            let event = parse_key_string(key).unwrap();
            assert_eq!(key_to_string(&event).as_deref(), Some(key));
        }
    }

    #[test]
    fn test_key_to_human() {
        assert_eq!(key_to_human("ctrl-k"), "Ctrl+K");
        assert_eq!(key_to_human("esc"), "Esc");
    }
}
