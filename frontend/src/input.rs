use shared::shared_2048_game::Direction;

/// Maps a `KeyboardEvent.key` value to a move. Arrow keys, WASD, IJKL and the
/// digits 8/4/2/6 are understood; anything else is ignored.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" | "i" | "I" | "8" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" | "k" | "K" | "2" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" | "j" | "J" | "4" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" | "l" | "L" | "6" => Some(Direction::Right),
        _ => None,
    }
}

/// Physical numpad keys, matched on `KeyboardEvent.code` so they work
/// whatever `key` the layout reports for them.
pub fn direction_for_code(code: &str) -> Option<Direction> {
    match code {
        "Numpad8" => Some(Direction::Up),
        "Numpad2" => Some(Direction::Down),
        "Numpad4" => Some(Direction::Left),
        "Numpad6" => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn test_letter_layouts_ignore_case() {
        for (lower, upper, direction) in [
            ("w", "W", Direction::Up),
            ("a", "A", Direction::Left),
            ("s", "S", Direction::Down),
            ("d", "D", Direction::Right),
            ("i", "I", Direction::Up),
            ("j", "J", Direction::Left),
            ("k", "K", Direction::Down),
            ("l", "L", Direction::Right),
        ] {
            assert_eq!(direction_for_key(lower), Some(direction));
            assert_eq!(direction_for_key(upper), Some(direction));
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        for key in ["Enter", " ", "q", "5", "Escape", ""] {
            assert_eq!(direction_for_key(key), None);
        }
    }

    #[test]
    fn test_numpad_codes() {
        assert_eq!(direction_for_code("Numpad8"), Some(Direction::Up));
        assert_eq!(direction_for_code("Numpad2"), Some(Direction::Down));
        assert_eq!(direction_for_code("Numpad4"), Some(Direction::Left));
        assert_eq!(direction_for_code("Numpad6"), Some(Direction::Right));
        for code in ["Numpad5", "KeyW", "ArrowUp", "Digit8"] {
            assert_eq!(direction_for_code(code), None);
        }
    }

    #[test]
    fn test_codes_are_not_key_values() {
        for code in ["Numpad8", "Numpad2", "Numpad4", "Numpad6"] {
            assert_eq!(direction_for_key(code), None);
        }
    }
}
