use crate::board::{Board, MAX_TURNS, is_row_complete};
use crate::color::{CODE_LENGTH, Code, Color};
use crate::controls::{Controls, UserAction, apply_action};
use crate::evaluator::evaluate;
use crate::secret::generate_code;
use crate::{debug_log, info_log};
use rand::Rng;
use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// One game of Mastermind: the hidden code, the board and turn bookkeeping.
///
/// Every mutation is total. Calls that arrive at the wrong time (a stale turn,
/// an out-of-range slot, a finished game) are ignored and leave the state
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    secret: Code,
    board: Board,
    current_turn: usize,
    status: Status,
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::fresh(generate_code(rng))
    }

    /// Start a game with a known secret. Returns `None` unless every slot is
    /// a playable color.
    #[must_use]
    pub fn with_secret(secret: Code) -> Option<Self> {
        secret
            .iter()
            .all(|c| c.is_playable())
            .then(|| Self::fresh(secret))
    }

    fn fresh(secret: Code) -> Self {
        Self {
            secret,
            board: Board::default(),
            current_turn: 0,
            status: Status::Playing,
        }
    }

    /// Throw the current game away and draw a new secret.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
        info_log!("restart() - New game started");
    }

    /// Paint one slot of the current row. Returns whether the board changed.
    ///
    /// `color` may be a playable color or `Color::Empty` to clear the slot.
    pub fn set_row_slot(&mut self, turn_index: usize, slot_index: usize, color: Color) -> bool {
        if self.is_over()
            || turn_index != self.current_turn
            || slot_index >= CODE_LENGTH
            || color == Color::Border
        {
            debug_log!(
                "set_row_slot() - Ignored turn={} slot={} color={} (current_turn={}, status={:?})",
                turn_index,
                slot_index,
                color,
                self.current_turn,
                self.status
            );
            return false;
        }
        self.board.set_slot(turn_index, slot_index, color)
    }

    /// Advance the turn machine once. Call exactly once per frame.
    ///
    /// The loss check runs before the row check, so a wrong twelfth guess
    /// leaves the game in `Playing` with `current_turn == MAX_TURNS` until the
    /// following tick.
    pub fn tick(&mut self) -> Status {
        if self.is_over() {
            return self.status;
        }

        if self.current_turn >= MAX_TURNS {
            self.status = Status::Lost;
            info_log!("tick() - Out of turns, game lost");
            return self.status;
        }

        let row = self.board.rows()[self.current_turn];
        if is_row_complete(&row) {
            let hint = evaluate(&self.secret, &row);
            self.board.record_hint(self.current_turn, hint);
            info_log!(
                "tick() - Turn {} scored: exact={} color={}",
                self.current_turn,
                hint.exact_matches,
                hint.color_matches
            );

            if hint.is_win() {
                self.status = Status::Won;
                info_log!("tick() - Code cracked on turn {}", self.current_turn);
            } else {
                self.current_turn += 1;
            }
        }

        self.status
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::Playing
    }

    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The secret, once the game is over.
    #[must_use]
    pub fn secret(&self) -> Option<&Code> {
        self.is_over().then_some(&self.secret)
    }
}

/// Rows played so far as display text, e.g. "1 turn" or "5 turns".
///
/// A won game counts its winning row, which `current_turn` still points at.
#[must_use]
pub fn turns_taken(state: &GameState) -> String {
    let turns = match state.status() {
        Status::Won => state.current_turn() + 1,
        _ => state.current_turn(),
    };
    if turns == 1 {
        "1 turn".to_string()
    } else {
        format!("{turns} turns")
    }
}

/// Input/render shell driven by [`game_loop`].
pub trait GameInterface {
    /// Collect the actions for one frame. An empty list is an idle frame.
    fn poll_actions(&mut self) -> io::Result<Vec<UserAction>>;

    fn render(&mut self, state: &GameState, controls: &Controls) -> io::Result<()>;
}

/// Run frames until the interface reports `Quit`.
///
/// Each frame polls input, applies the actions, ticks the turn machine once
/// and renders.
pub fn game_loop<R: Rng, I: GameInterface>(
    state: &mut GameState,
    controls: &mut Controls,
    rng: &mut R,
    interface: &mut I,
) -> io::Result<()> {
    interface.render(state, controls)?;

    loop {
        for action in interface.poll_actions()? {
            if action == UserAction::Quit {
                info_log!("game_loop() - Quit requested");
                return Ok(());
            }
            apply_action(state, controls, rng, action);
        }

        state.tick();
        interface.render(state, controls)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Hint;
    use crate::color::Color::{Blue, Green, Orange, Pink, Red, Yellow};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SECRET: Code = [Red, Blue, Green, Orange];
    const WRONG: Code = [Pink, Pink, Pink, Pink];

    fn game() -> GameState {
        GameState::with_secret(SECRET).unwrap()
    }

    fn fill_row(state: &mut GameState, row: Code) {
        let turn = state.current_turn();
        for (slot, color) in row.into_iter().enumerate() {
            assert!(state.set_row_slot(turn, slot, color));
        }
    }

    #[test]
    fn test_new_game_initial_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = GameState::new(&mut rng);
        assert_eq!(state.status(), Status::Playing);
        assert_eq!(state.current_turn(), 0);
        assert!(!state.is_over());
        assert!(state.secret().is_none());
    }

    #[test]
    fn test_with_secret_rejects_structural_colors() {
        assert!(GameState::with_secret([Red, Color::Empty, Red, Red]).is_none());
        assert!(GameState::with_secret([Color::Border, Red, Red, Red]).is_none());
        assert!(GameState::with_secret(SECRET).is_some());
    }

    #[test]
    fn test_tick_incomplete_row_is_idle() {
        let mut state = game();
        state.set_row_slot(0, 0, Red);
        state.set_row_slot(0, 1, Blue);
        assert_eq!(state.tick(), Status::Playing);
        assert_eq!(state.current_turn(), 0);
        assert_eq!(state.board().hint(0), None);
    }

    #[test]
    fn test_tick_scores_and_advances() {
        let mut state = game();
        fill_row(&mut state, [Red, Orange, Yellow, Yellow]);
        assert_eq!(state.tick(), Status::Playing);
        assert_eq!(state.current_turn(), 1);
        assert_eq!(state.board().hint(0), Some(Hint::new(1, 1)));
        assert_eq!(state.board().hint(1), None);
    }

    #[test]
    fn test_win_stops_on_winning_turn() {
        let mut state = game();
        fill_row(&mut state, WRONG);
        state.tick();
        fill_row(&mut state, SECRET);
        assert_eq!(state.tick(), Status::Won);
        assert!(state.is_over());
        assert_eq!(state.current_turn(), 1);
        assert_eq!(state.board().hint(1), Some(Hint::new(4, 0)));
        assert_eq!(state.secret(), Some(&SECRET));
    }

    #[test]
    fn test_loss_flagged_one_tick_after_last_guess() {
        let mut state = game();
        for turn in 0..MAX_TURNS {
            assert_eq!(state.current_turn(), turn);
            fill_row(&mut state, WRONG);
            assert_eq!(state.tick(), Status::Playing);
        }
        assert_eq!(state.current_turn(), MAX_TURNS);
        assert!(!state.is_over());
        assert!(state.secret().is_none());

        assert_eq!(state.tick(), Status::Lost);
        assert!(state.is_over());
        assert_eq!(state.current_turn(), MAX_TURNS);
        assert_eq!(state.secret(), Some(&SECRET));
    }

    #[test]
    fn test_win_on_last_turn() {
        let mut state = game();
        for _ in 0..MAX_TURNS - 1 {
            fill_row(&mut state, WRONG);
            state.tick();
        }
        fill_row(&mut state, SECRET);
        assert_eq!(state.tick(), Status::Won);
        assert_eq!(state.current_turn(), MAX_TURNS - 1);
    }

    #[test]
    fn test_set_row_slot_wrong_turn_is_noop() {
        let mut state = game();
        let before = state.clone();
        assert!(!state.set_row_slot(1, 0, Red));
        assert!(!state.set_row_slot(MAX_TURNS + 3, 0, Red));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_row_slot_out_of_range_slot_is_noop() {
        let mut state = game();
        let before = state.clone();
        assert!(!state.set_row_slot(0, CODE_LENGTH, Red));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_row_slot_rejects_border() {
        let mut state = game();
        let before = state.clone();
        assert!(!state.set_row_slot(0, 0, Color::Border));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_row_slot_can_clear() {
        let mut state = game();
        state.set_row_slot(0, 2, Green);
        assert!(state.set_row_slot(0, 2, Color::Empty));
        assert_eq!(state.board().row(0), Some(&[Color::Empty; CODE_LENGTH]));
    }

    #[test]
    fn test_previous_rows_frozen() {
        let mut state = game();
        fill_row(&mut state, WRONG);
        state.tick();
        assert!(!state.set_row_slot(0, 0, Red));
        assert_eq!(state.board().row(0), Some(&WRONG));
    }

    #[test]
    fn test_no_mutation_after_game_over() {
        let mut state = game();
        fill_row(&mut state, SECRET);
        state.tick();
        assert!(state.is_over());

        let before = state.clone();
        for turn in 0..=MAX_TURNS {
            for slot in 0..CODE_LENGTH {
                assert!(!state.set_row_slot(turn, slot, Yellow));
            }
        }
        assert_eq!(state.tick(), Status::Won);
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_row_slot_ignored_when_board_exhausted() {
        let mut state = game();
        for _ in 0..MAX_TURNS {
            fill_row(&mut state, WRONG);
            state.tick();
        }
        let before = state.clone();
        assert!(!state.set_row_slot(MAX_TURNS, 0, Red));
        assert_eq!(state, before);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = game();
        fill_row(&mut state, SECRET);
        state.tick();
        assert!(state.is_over());

        state.restart(&mut rng);
        assert!(!state.is_over());
        assert_eq!(state.current_turn(), 0);
        assert_eq!(*state.board(), Board::default());
    }

    #[test]
    fn test_restart_after_loss() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut state = game();
        for _ in 0..MAX_TURNS {
            fill_row(&mut state, WRONG);
            state.tick();
        }
        state.tick();
        assert_eq!(state.status(), Status::Lost);
        assert_eq!(state.secret(), Some(&SECRET));

        state.restart(&mut rng);
        assert!(!state.is_over());
        assert_eq!(state.status(), Status::Playing);
        assert_eq!(state.current_turn(), 0);
        assert_eq!(*state.board(), Board::default());
        assert!(state.secret().is_none());
    }

    #[test]
    fn test_turns_taken_singular_and_plural() {
        let mut state = game();
        assert_eq!(turns_taken(&state), "0 turns");

        fill_row(&mut state, SECRET);
        state.tick();
        assert_eq!(turns_taken(&state), "1 turn");

        let mut state = game();
        for _ in 0..2 {
            fill_row(&mut state, WRONG);
            state.tick();
        }
        fill_row(&mut state, SECRET);
        state.tick();
        assert_eq!(state.status(), Status::Won);
        assert_eq!(turns_taken(&state), "3 turns");
    }

    #[test]
    fn test_restart_draws_from_rng() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut expected_rng = StdRng::seed_from_u64(99);
        let mut state = game();

        state.restart(&mut rng);
        let expected = GameState::with_secret(generate_code(&mut expected_rng)).unwrap();
        assert_eq!(state, expected);
    }
}
