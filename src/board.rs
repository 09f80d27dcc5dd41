use crate::color::{CODE_LENGTH, Color};

pub const MAX_TURNS: usize = 12;

/// One guess row. Slots start out `Color::Empty`.
pub type Row = [Color; CODE_LENGTH];

pub const EMPTY_ROW: Row = [Color::Empty; CODE_LENGTH];

/// Result of scoring one guess against the secret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hint {
    pub exact_matches: u8,
    pub color_matches: u8,
}

impl Hint {
    #[must_use]
    pub const fn new(exact_matches: u8, color_matches: u8) -> Self {
        Self {
            exact_matches,
            color_matches,
        }
    }

    #[must_use]
    pub fn is_win(self) -> bool {
        usize::from(self.exact_matches) == CODE_LENGTH
    }
}

/// True when every slot holds a playable color.
#[must_use]
pub fn is_row_complete(row: &Row) -> bool {
    row.iter().all(|c| c.is_playable())
}

/// Twelve guess rows and their hints.
///
/// A hint slot stays `None` until its row is evaluated, so an unplayed row can
/// never be mistaken for a `(0, 0)` result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_TURNS],
    hints: [Option<Hint>; MAX_TURNS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: [EMPTY_ROW; MAX_TURNS],
            hints: [None; MAX_TURNS],
        }
    }
}

impl Board {
    #[must_use]
    pub fn rows(&self) -> &[Row; MAX_TURNS] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, turn: usize) -> Option<&Row> {
        self.rows.get(turn)
    }

    #[must_use]
    pub fn hint(&self, turn: usize) -> Option<Hint> {
        self.hints.get(turn).copied().flatten()
    }

    /// Hint values with unevaluated rows shown as the `(0, 0)` placeholder,
    /// for drawing.
    #[must_use]
    pub fn hints_or_default(&self) -> [Hint; MAX_TURNS] {
        self.hints.map(Option::unwrap_or_default)
    }

    pub(crate) fn set_slot(&mut self, turn: usize, slot: usize, color: Color) -> bool {
        match self.rows.get_mut(turn).and_then(|row| row.get_mut(slot)) {
            Some(cell) => {
                *cell = color;
                true
            }
            None => false,
        }
    }

    pub(crate) fn record_hint(&mut self, turn: usize, hint: Hint) {
        if let Some(cell) = self.hints.get_mut(turn) {
            *cell = Some(hint);
        }
    }
}
