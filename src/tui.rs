//! TUI (Terminal User Interface) for Mastermind
//!
//! Renders the board with Ratatui and turns crossterm key and mouse events
//! into [`UserAction`]s.
//!
//! # Layout
//! - Board panel: twelve guess rows with their hint pegs, then the secret row
//! - Side panel: the six-color palette and the theme toggle
//! - Status line and key help underneath
//!
//! Mouse clicks are resolved against the button rectangles of the last drawn
//! frame, so the geometry lives in one place ([`screen_areas`]) and both
//! drawing and hit-testing read from it.

use crate::board::MAX_TURNS;
use crate::color::{CODE_LENGTH, Color, PLAYABLE};
use crate::controls::{ButtonId, Controls, UserAction};
use crate::game_state::{GameInterface, GameState, Status, turns_taken};
use crate::theme::{Rgb, Theme, hint_pegs, strobe_background};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const FRAME_POLL_TIMEOUT_MS: u64 = 50;
const ROW_LABEL_WIDTH: u16 = 4;
const SLOT_WIDTH: u16 = 3;
const SLOT_STRIDE: u16 = SLOT_WIDTH + 1;
/// Guess rows, a spacer and the secret row, plus borders.
const BOARD_HEIGHT: u16 = MAX_TURNS as u16 + 4;
const BOARD_WIDTH: u16 = ROW_LABEL_WIDTH + SLOT_STRIDE * CODE_LENGTH as u16 + 5 + 2;
const THEME_ROW: u16 = PLAYABLE.len() as u16 + 1;

const PEG: &str = "●";
const HOLE: &str = "·";
const HINT_HOLE: &str = "○";

fn term_color(rgb: Rgb) -> TermColor {
    TermColor::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Where everything goes for a given terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScreenAreas {
    board: Rect,
    side: Rect,
    status: Rect,
    instructions: Rect,
}

fn bordered() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

fn screen_areas(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(BOARD_HEIGHT), // Board + side panel
            Constraint::Length(3),         // Status line
            Constraint::Length(3),         // Instructions
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    ScreenAreas {
        board: columns[0],
        side: columns[1],
        status: rows[1],
        instructions: rows[2],
    }
}

/// Clickable rectangles for the current frame. Only the current row's slots
/// are clickable.
fn button_rects(area: Rect, current_turn: usize) -> Vec<(Rect, ButtonId)> {
    let areas = screen_areas(area);
    let board = bordered().inner(areas.board);
    let side = bordered().inner(areas.side);
    let mut buttons = Vec::with_capacity(CODE_LENGTH + PLAYABLE.len() + 1);

    if let Ok(turn) = u16::try_from(current_turn)
        && current_turn < MAX_TURNS
        && turn < board.height
    {
        for slot in 0..CODE_LENGTH {
            let x = board.x + ROW_LABEL_WIDTH + SLOT_STRIDE * slot as u16;
            buttons.push((Rect::new(x, board.y + turn, SLOT_WIDTH, 1), ButtonId::Slot(slot)));
        }
    }

    for (i, color) in PLAYABLE.iter().enumerate() {
        let y = side.y + i as u16;
        if y < side.y + side.height {
            buttons.push((Rect::new(side.x, y, side.width, 1), ButtonId::Palette(*color)));
        }
    }
    if THEME_ROW < side.height {
        buttons.push((
            Rect::new(side.x, side.y + THEME_ROW, side.width, 1),
            ButtonId::ThemeToggle,
        ));
    }

    buttons
}

fn button_at(buttons: &[(Rect, ButtonId)], column: u16, row: u16) -> Option<ButtonId> {
    buttons
        .iter()
        .find(|(rect, _)| rect.contains(Position::new(column, row)))
        .map(|(_, id)| *id)
}

/// Keyboard state that outlives a single event: the slot cursor on the
/// current row.
#[derive(Debug, Default)]
struct KeyState {
    cursor: usize,
}

impl KeyState {
    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(UserAction::Quit);
        }
        if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
            debug_log!("handle_key() - Ignoring key with modifier: {:?}", key.modifiers);
            return None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(UserAction::Quit),
            KeyCode::Char('r' | 'R') => {
                self.cursor = 0;
                Some(UserAction::Restart)
            }
            KeyCode::Char('t' | 'T') => Some(UserAction::Press(ButtonId::ThemeToggle)),
            KeyCode::Left => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(CODE_LENGTH - 1);
                None
            }
            KeyCode::Right | KeyCode::Tab => {
                self.cursor = (self.cursor + 1) % CODE_LENGTH;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let slot = self.cursor;
                self.cursor = (self.cursor + 1) % CODE_LENGTH;
                Some(UserAction::Press(ButtonId::Slot(slot)))
            }
            KeyCode::Backspace | KeyCode::Delete => Some(UserAction::Clear(self.cursor)),
            KeyCode::Char(c) => {
                let color = Color::from_token(&c.to_string());
                if color.is_none() {
                    debug_log!("handle_key() - Ignoring key: {:?}", c);
                }
                color.map(|color| UserAction::Press(ButtonId::Palette(color)))
            }
            _ => None,
        }
    }
}

/// Borrowed view of everything one frame draws.
struct RenderContext<'a> {
    state: &'a GameState,
    controls: &'a Controls,
    cursor: usize,
    background: Rgb,
}

impl RenderContext<'_> {
    fn theme(&self) -> Theme {
        self.controls.theme()
    }

    fn base_style(&self) -> Style {
        Style::default()
            .fg(term_color(self.theme().foreground()))
            .bg(term_color(self.background))
    }

    fn color_style(&self, color: Color) -> Style {
        self.base_style().fg(term_color(self.theme().rgb(color)))
    }
}

fn render_static(f: &mut Frame, ctx: &RenderContext) {
    let areas = screen_areas(f.area());
    f.render_widget(Block::default().style(ctx.base_style()), f.area());

    render_board(f, areas.board, ctx);
    render_side(f, areas.side, ctx);
    render_status(f, areas.status, ctx);
    render_instructions(f, areas.instructions, ctx);
}

fn render_slot<'a>(ctx: &RenderContext, color: Color, under_cursor: bool) -> Vec<Span<'a>> {
    let bracket = if under_cursor {
        ctx.color_style(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        ctx.base_style()
    };
    let glyph = if color.is_playable() {
        Span::styled(PEG, ctx.color_style(color))
    } else {
        Span::styled(HOLE, ctx.base_style())
    };
    vec![
        Span::styled("[", bracket),
        glyph,
        Span::styled("]", bracket),
        Span::raw(" "),
    ]
}

fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let state = ctx.state;
    let board = state.board();
    let hints = board.hints_or_default();
    let active_turn = (!state.is_over()).then_some(state.current_turn());
    let mut lines = Vec::with_capacity(MAX_TURNS + 2);

    for (turn, row) in board.rows().iter().enumerate() {
        let label_style = if active_turn == Some(turn) {
            ctx.base_style().add_modifier(Modifier::BOLD)
        } else {
            ctx.base_style().add_modifier(Modifier::DIM)
        };
        let mut spans = vec![Span::styled(format!("{:>2}. ", turn + 1), label_style)];
        for (slot, color) in row.iter().enumerate() {
            let under_cursor = active_turn == Some(turn) && slot == ctx.cursor;
            spans.extend(render_slot(ctx, *color, under_cursor));
        }
        spans.push(Span::raw(" "));
        for peg in hint_pegs(hints[turn]) {
            let glyph = if peg == Color::Empty { HINT_HOLE } else { PEG };
            spans.push(Span::styled(glyph, ctx.color_style(peg)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let mut secret_spans = vec![Span::styled("    ", ctx.base_style())];
    match state.secret() {
        Some(code) => {
            for color in code {
                secret_spans.extend(render_slot(ctx, *color, false));
            }
        }
        None => {
            for _ in 0..CODE_LENGTH {
                secret_spans.push(Span::styled("[?] ", ctx.base_style()));
            }
        }
    }
    lines.push(Line::from(secret_spans));

    let paragraph = Paragraph::new(lines)
        .style(ctx.base_style())
        .block(bordered().title("Mastermind").style(ctx.base_style()));
    f.render_widget(paragraph, area);
}

fn render_side(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let selected = ctx.controls.selected_color();
    let mut lines = Vec::with_capacity(PLAYABLE.len() + 2);

    for (i, color) in PLAYABLE.iter().enumerate() {
        let marker = if *color == selected { ">" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{} ", i + 1), ctx.base_style()),
            Span::styled(format!("{PEG}{PEG}{PEG}"), ctx.color_style(*color)),
            Span::styled(format!(" {color}"), ctx.base_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" [{}] theme", ctx.theme().icon()),
        ctx.base_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .style(ctx.base_style())
        .block(bordered().title("Palette").style(ctx.base_style()));
    f.render_widget(paragraph, area);
}

fn status_text(state: &GameState, controls: &Controls) -> String {
    let mut text = match state.status() {
        Status::Won => format!("Code cracked in {}! Press R to play again", turns_taken(state)),
        Status::Lost => "Out of turns. Press R to play again".to_string(),
        Status::Playing if state.current_turn() >= MAX_TURNS => "Board full".to_string(),
        Status::Playing => format!(
            "Turn {} of {MAX_TURNS} | Selected: {}",
            state.current_turn() + 1,
            controls.selected_color()
        ),
    };
    if controls.strobe() {
        text.push_str(" | Strobe mode");
    }
    text
}

fn render_status(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let style = match ctx.state.status() {
        Status::Won => ctx.color_style(Color::Green).add_modifier(Modifier::BOLD),
        Status::Lost => ctx.color_style(Color::Red).add_modifier(Modifier::BOLD),
        Status::Playing => ctx.base_style(),
    };
    let paragraph = Paragraph::new(status_text(ctx.state, ctx.controls))
        .style(style)
        .block(bordered().title("Status").style(ctx.base_style()));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let text = if ctx.state.is_over() {
        "R: New Game | T: Theme | ESC: Quit"
    } else {
        "1-6 color (5=red)  ←→ slot  SPC place  BKSP clear  R restart  T theme  Q quit"
    };
    let paragraph = Paragraph::new(text)
        .style(ctx.base_style().add_modifier(Modifier::DIM))
        .block(bordered().style(ctx.base_style()));
    f.render_widget(paragraph, area);
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

/// Main TUI interface component.
///
/// Owns the terminal for its lifetime: raw mode, alternate screen and mouse
/// capture are switched on in [`TuiInterface::new`] and restored on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    keys: KeyState,
    buttons: Vec<(Rect, ButtonId)>,
    last_turn: usize,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        // No Self exists yet, so Drop cannot undo a half-finished setup.
        let terminal = enter_screen().inspect_err(|_| {
            let _ = disable_raw_mode();
            let _ = leave_screen(&mut io::stdout());
        })?;
        info_log!("Terminal setup complete: alternate screen, mouse capture, cursor hidden");

        Ok(Self {
            terminal,
            keys: KeyState::default(),
            buttons: Vec::new(),
            last_turn: 0,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        leave_screen(self.terminal.backend_mut())
    }

    fn handle_mouse(&self, mouse: MouseEvent) -> Option<UserAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let button = button_at(&self.buttons, mouse.column, mouse.row);
        debug_log!(
            "handle_mouse() - Click at ({}, {}) -> {:?}",
            mouse.column,
            mouse.row,
            button
        );
        button.map(UserAction::Press)
    }
}

impl GameInterface for TuiInterface {
    fn poll_actions(&mut self) -> io::Result<Vec<UserAction>> {
        if !event::poll(std::time::Duration::from_millis(FRAME_POLL_TIMEOUT_MS))? {
            return Ok(Vec::new());
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.keys.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            other => {
                debug_log!("poll_actions() - Ignoring event: {:?}", other);
                None
            }
        };
        Ok(action.into_iter().collect())
    }

    fn render(&mut self, state: &GameState, controls: &Controls) -> io::Result<()> {
        if state.current_turn() != self.last_turn {
            self.last_turn = state.current_turn();
            self.keys.cursor = 0;
        }

        let background = if controls.strobe() {
            strobe_background(&mut rand::rng())
        } else {
            controls.theme().background()
        };
        let ctx = RenderContext {
            state,
            controls,
            cursor: self.keys.cursor,
            background,
        };

        let completed = self.terminal.draw(|f| render_static(f, &ctx))?;
        self.buttons = button_rects(completed.area, state.current_turn());
        Ok(())
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
