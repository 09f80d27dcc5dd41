//! Peg colors.
//!
//! Six playable colors plus two structural markers: `Empty` for an unset slot
//! and `Border` for frame drawing. Only the playable colors ever appear in a
//! secret code.

use std::fmt;

pub const CODE_LENGTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Border,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Pink,
}

/// Playable colors in palette order.
pub const PLAYABLE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Orange,
    Color::Red,
    Color::Pink,
];

/// A full secret code. Every slot holds a playable color.
pub type Code = [Color; CODE_LENGTH];

impl Color {
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, Self::Empty | Self::Border)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Border => "border",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Pink => "pink",
        }
    }

    /// Single-letter tag used by the text shells. Unset slots show as `.`.
    #[must_use]
    pub fn initial(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Border => '#',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Red => 'R',
            Self::Pink => 'P',
        }
    }

    /// Parse a playable color from its name, its initial, or its 1-based
    /// palette position. Case-insensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        if let Ok(position) = token.parse::<usize>() {
            return position.checked_sub(1).and_then(|i| PLAYABLE.get(i).copied());
        }
        PLAYABLE.iter().copied().find(|c| {
            c.name() == token || (token.len() == 1 && token.starts_with(c.initial().to_ascii_lowercase()))
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_colors_not_playable() {
        assert!(!Color::Empty.is_playable());
        assert!(!Color::Border.is_playable());
        assert!(PLAYABLE.iter().all(|c| c.is_playable()));
    }

    #[test]
    fn test_from_token_by_name() {
        assert_eq!(Color::from_token("red"), Some(Color::Red));
        assert_eq!(Color::from_token("  PINK "), Some(Color::Pink));
        assert_eq!(Color::from_token("Orange"), Some(Color::Orange));
    }

    #[test]
    fn test_from_token_by_initial() {
        assert_eq!(Color::from_token("b"), Some(Color::Blue));
        assert_eq!(Color::from_token("Y"), Some(Color::Yellow));
    }

    #[test]
    fn test_from_token_by_position() {
        assert_eq!(Color::from_token("1"), Some(Color::Blue));
        assert_eq!(Color::from_token("6"), Some(Color::Pink));
        assert_eq!(Color::from_token("0"), None);
        assert_eq!(Color::from_token("7"), None);
    }

    #[test]
    fn test_from_token_rejects_structural() {
        assert_eq!(Color::from_token("empty"), None);
        assert_eq!(Color::from_token("border"), None);
        assert_eq!(Color::from_token("."), None);
        assert_eq!(Color::from_token("purple"), None);
    }

    #[test]
    fn test_initials_unique() {
        let mut initials: Vec<char> = PLAYABLE.iter().map(|c| c.initial()).collect();
        initials.sort_unstable();
        initials.dedup();
        assert_eq!(initials.len(), PLAYABLE.len());
    }
}
