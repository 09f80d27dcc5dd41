//! Dark/light tints for every color.
//!
//! Presentation only. Shells receive the theme through [`Controls`] and look
//! colors up here; nothing in the game core reads it.
//!
//! [`Controls`]: crate::controls::Controls

use crate::board::Hint;
use crate::color::{CODE_LENGTH, Color};
use rand::Rng;

pub type Rgb = (u8, u8, u8);

const NEAR_BLACK: Rgb = (24, 24, 27);
const NEAR_WHITE: Rgb = (234, 234, 236);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Background and unset slots.
    #[must_use]
    pub fn background(self) -> Rgb {
        self.rgb(Color::Empty)
    }

    /// Frames and text.
    #[must_use]
    pub fn foreground(self) -> Rgb {
        self.rgb(Color::Border)
    }

    /// Black and white trade places between themes; the play colors do not
    /// change.
    #[must_use]
    pub fn rgb(self, color: Color) -> Rgb {
        let (dark, light) = match color {
            Color::Empty => (NEAR_BLACK, NEAR_WHITE),
            Color::Border => (NEAR_WHITE, NEAR_BLACK),
            Color::Blue => ((88, 101, 242), (88, 101, 242)),
            Color::Green => ((87, 242, 135), (87, 242, 135)),
            Color::Yellow => ((254, 231, 92), (254, 231, 92)),
            Color::Orange => ((255, 150, 79), (255, 150, 79)),
            Color::Red => ((237, 66, 69), (237, 66, 69)),
            Color::Pink => ((235, 69, 158), (235, 69, 158)),
        };
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    /// Glyph for the toggle button: a sun while dark, a moon while light.
    #[must_use]
    pub fn icon(self) -> char {
        match self {
            Self::Dark => '☀',
            Self::Light => '☾',
        }
    }
}

/// Hint pegs in drawing order: one `Border` (white) peg per exact match, one
/// `Red` per color match, `Empty` for the rest.
#[must_use]
pub fn hint_pegs(hint: Hint) -> [Color; CODE_LENGTH] {
    let exact = usize::from(hint.exact_matches);
    let color = usize::from(hint.color_matches);
    std::array::from_fn(|i| {
        if i < exact {
            Color::Border
        } else if i < exact + color {
            Color::Red
        } else {
            Color::Empty
        }
    })
}

/// Random background for strobe mode, drawn fresh every frame.
pub fn strobe_background<R: Rng>(rng: &mut R) -> Rgb {
    (rng.random(), rng.random(), rng.random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PLAYABLE;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_background_and_foreground_swap() {
        assert_eq!(Theme::Dark.background(), Theme::Light.foreground());
        assert_eq!(Theme::Light.background(), Theme::Dark.foreground());
        assert_ne!(Theme::Dark.background(), Theme::Dark.foreground());
    }

    #[test]
    fn test_play_colors_theme_independent() {
        for color in PLAYABLE {
            assert_eq!(Theme::Dark.rgb(color), Theme::Light.rgb(color));
        }
    }

    #[test]
    fn test_hint_pegs_order() {
        assert_eq!(
            hint_pegs(Hint::new(1, 2)),
            [Color::Border, Color::Red, Color::Red, Color::Empty]
        );
        assert_eq!(hint_pegs(Hint::new(4, 0)), [Color::Border; CODE_LENGTH]);
        assert_eq!(hint_pegs(Hint::default()), [Color::Empty; CODE_LENGTH]);
    }
}
