//! Keyboard normalization.
//!
//! Maps raw key events onto [`Command`]s. Unrecognized keys produce nothing;
//! they are never an error.

use super::command::{Command, Digit};
use crate::core::Operator;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A raw key event as delivered by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum KeyInput {
    /// A printable character
    Char(char),
    Enter,
    Escape,
    Backspace,
    /// Any other key (arrows, function keys, modifiers, ...)
    Other,
}

impl KeyInput {
    /// Build a key from a DOM-style key name such as `"Enter"` or `"7"`.
    ///
    /// ```rust
    /// use reckon::input::KeyInput;
    ///
    /// assert_eq!(KeyInput::from_key_name("Escape"), KeyInput::Escape);
    /// assert_eq!(KeyInput::from_key_name("/"), KeyInput::Char('/'));
    /// assert_eq!(KeyInput::from_key_name("ArrowUp"), KeyInput::Other);
    /// ```
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Backspace" => Self::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// A command produced from a key, plus whether the host should swallow the
/// key's default platform action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub command: Command,
    pub suppress_default: bool,
}

impl NormalizedInput {
    fn new(command: Command) -> Self {
        Self {
            command,
            suppress_default: false,
        }
    }

    fn suppressing(command: Command) -> Self {
        Self {
            command,
            suppress_default: true,
        }
    }
}

/// Translate a key into a command.
///
/// Division keys ask the host to suppress their default action, since `/`
/// opens find-in-page in browsers.
///
/// # Example
///
/// ```rust
/// use reckon::core::Operator;
/// use reckon::input::{normalize, Command, KeyInput};
///
/// let input = normalize(KeyInput::Char('/')).unwrap();
/// assert_eq!(input.command, Command::Operate(Operator::Divide));
/// assert!(input.suppress_default);
///
/// assert_eq!(normalize(KeyInput::Enter).unwrap().command, Command::Equals);
/// assert!(normalize(KeyInput::Char('x')).is_none());
/// ```
pub fn normalize(key: KeyInput) -> Option<NormalizedInput> {
    let input = match key {
        KeyInput::Char(c) => normalize_char(c)?,
        KeyInput::Enter => NormalizedInput::new(Command::Equals),
        KeyInput::Escape => NormalizedInput::new(Command::Clear),
        KeyInput::Backspace => NormalizedInput::new(Command::Backspace),
        KeyInput::Other => {
            trace!(?key, "key ignored");
            return None;
        }
    };
    Some(input)
}

fn normalize_char(c: char) -> Option<NormalizedInput> {
    if let Some(digit) = Digit::from_char(c) {
        return Some(NormalizedInput::new(Command::Digit(digit)));
    }

    let input = match c {
        '.' => NormalizedInput::new(Command::Decimal),
        '+' => NormalizedInput::new(Command::Operate(Operator::Add)),
        '-' => NormalizedInput::new(Command::Operate(Operator::Subtract)),
        '*' | '×' => NormalizedInput::new(Command::Operate(Operator::Multiply)),
        '/' | '÷' => NormalizedInput::suppressing(Command::Operate(Operator::Divide)),
        '=' => NormalizedInput::new(Command::Equals),
        'c' | 'C' => NormalizedInput::new(Command::Clear),
        _ => {
            trace!(key = %c, "key ignored");
            return None;
        }
    };
    Some(input)
}

#[cfg(feature = "crossterm")]
impl From<crossterm::event::KeyEvent> for KeyInput {
    /// Only key presses carry meaning; releases and repeats map to `Other`.
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyEventKind};

        if event.kind != KeyEventKind::Press {
            return Self::Other;
        }
        match event.code {
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Escape,
            KeyCode::Backspace => Self::Backspace,
            _ => Self::Other,
        }
    }
}


#[cfg(all(test, feature = "crossterm"))]
mod crossterm_tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn press(code: KeyCode) -> KeyInput {
        KeyInput::from(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyInput {
        KeyInput::from(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn presses_map_to_key_inputs() {
        assert_eq!(press(KeyCode::Char('7')), KeyInput::Char('7'));
        assert_eq!(press(KeyCode::Char('/')), KeyInput::Char('/'));
        assert_eq!(press(KeyCode::Enter), KeyInput::Enter);
        assert_eq!(press(KeyCode::Esc), KeyInput::Escape);
        assert_eq!(press(KeyCode::Backspace), KeyInput::Backspace);
    }

    #[test]
    fn other_key_codes_map_to_other() {
        assert_eq!(press(KeyCode::Tab), KeyInput::Other);
        assert_eq!(press(KeyCode::F(5)), KeyInput::Other);
    }

    #[test]
    fn releases_and_repeats_map_to_other() {
        assert_eq!(with_kind(KeyCode::Char('7'), KeyEventKind::Release), KeyInput::Other);
        assert_eq!(with_kind(KeyCode::Enter, KeyEventKind::Repeat), KeyInput::Other);
        assert_eq!(with_kind(KeyCode::Backspace, KeyEventKind::Release), KeyInput::Other);
    }

    #[test]
    fn pressed_division_is_normalized_with_suppressed_default() {
        let input = normalize(press(KeyCode::Char('/'))).unwrap();
        assert!(input.suppress_default);
        assert!(normalize(with_kind(KeyCode::Char('/'), KeyEventKind::Release)).is_none());
    }
}
