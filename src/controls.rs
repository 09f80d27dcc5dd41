//! Shell-side state and the mapping from logical buttons to game mutations.
//!
//! `Controls` lives outside [`GameState`] so that a restart leaves the
//! selected color and the theme alone.

use crate::color::Color;
use crate::game_state::GameState;
use crate::theme::Theme;
use crate::{debug_log, info_log};
use rand::Rng;

/// Consecutive theme toggles that switch strobe mode on.
pub const STROBE_TOGGLE_STREAK: u32 = 10;

/// A clickable element, already resolved from screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonId {
    Palette(Color),
    /// Slot of the current row.
    Slot(usize),
    ThemeToggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Press(ButtonId),
    /// Clear a slot of the current row without touching the selected color.
    Clear(usize),
    Restart,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    selected_color: Color,
    theme: Theme,
    toggle_streak: u32,
    strobe: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Controls {
    /// Nothing is selected at start, so painting a slot clears it.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            selected_color: Color::Empty,
            theme,
            toggle_streak: 0,
            strobe: false,
        }
    }

    #[must_use]
    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// Only playable colors or `Empty` can be selected.
    pub fn select_active_color(&mut self, color: Color) {
        if color != Color::Border {
            self.selected_color = color;
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn strobe(&self) -> bool {
        self.strobe
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toggle_streak += 1;
        if self.toggle_streak >= STROBE_TOGGLE_STREAK && !self.strobe {
            self.strobe = true;
            info_log!("toggle_theme() - Strobe mode enabled");
        }
    }
}

/// Apply one shell action to the game.
///
/// Any press other than the theme toggle breaks the toggle streak. Palette and
/// slot presses are ignored once the game is over.
pub fn apply_action<R: Rng>(
    state: &mut GameState,
    controls: &mut Controls,
    rng: &mut R,
    action: UserAction,
) {
    debug_log!("apply_action() - {:?}", action);

    match action {
        UserAction::Press(ButtonId::ThemeToggle) => controls.toggle_theme(),
        UserAction::Press(button) => {
            controls.toggle_streak = 0;
            if state.is_over() {
                return;
            }
            match button {
                ButtonId::Palette(color) => controls.select_active_color(color),
                ButtonId::Slot(slot) => {
                    state.set_row_slot(state.current_turn(), slot, controls.selected_color);
                }
                ButtonId::ThemeToggle => {}
            }
        }
        UserAction::Clear(slot) => {
            controls.toggle_streak = 0;
            state.set_row_slot(state.current_turn(), slot, Color::Empty);
        }
        UserAction::Restart => state.restart(rng),
        UserAction::Quit => {}
    }
}
