use crate::board::MAX_TURNS;
use crate::color::{CODE_LENGTH, Color, PLAYABLE};
use crate::controls::{ButtonId, Controls, UserAction};
use crate::game_state::{GameInterface, GameState, Status, turns_taken};
use crate::theme::hint_pegs;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Mastermind: crack the four-peg code in twelve turns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Play with line commands on stdin instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Start in the light theme
    #[arg(long)]
    pub light: bool,

    /// Seed for the secret code generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append log output to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const HELP: &str = "Commands: <color> | pick <color> | place <1-4> | clear <1-4> | \
guess <c1> <c2> <c3> <c4> | theme | restart (r) | quit";

fn parse_slot(token: Option<&str>) -> Result<usize, String> {
    let token = token.ok_or_else(|| format!("Missing slot number (1-{CODE_LENGTH})."))?;
    match token.parse::<usize>() {
        Ok(n) if (1..=CODE_LENGTH).contains(&n) => Ok(n - 1),
        _ => Err(format!("Invalid slot '{token}'. Use 1-{CODE_LENGTH}.")),
    }
}

fn parse_color(token: Option<&str>) -> Result<Color, String> {
    let token = token.ok_or_else(|| "Missing color.".to_string())?;
    Color::from_token(token).ok_or_else(|| format!("Unknown color '{token}'."))
}

/// Turn one input line into the actions for one frame.
///
/// An empty line is an idle frame. `r` is restart, not red.
pub fn parse_command(line: &str) -> Result<Vec<UserAction>, String> {
    let lowered = line.trim().to_ascii_lowercase();
    let mut words = lowered.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Vec::new());
    };

    let actions = match command {
        "quit" | "exit" | "q" => vec![UserAction::Quit],
        "restart" | "r" | "new" => vec![UserAction::Restart],
        "theme" | "t" => vec![UserAction::Press(ButtonId::ThemeToggle)],
        "pick" => vec![UserAction::Press(ButtonId::Palette(parse_color(words.next())?))],
        "place" => vec![UserAction::Press(ButtonId::Slot(parse_slot(words.next())?))],
        "clear" => vec![UserAction::Clear(parse_slot(words.next())?)],
        "guess" => {
            let colors = words
                .by_ref()
                .map(|w| parse_color(Some(w)))
                .collect::<Result<Vec<_>, _>>()?;
            if colors.len() != CODE_LENGTH {
                return Err(format!("A guess needs exactly {CODE_LENGTH} colors."));
            }
            colors
                .into_iter()
                .enumerate()
                .flat_map(|(slot, color)| {
                    [
                        UserAction::Press(ButtonId::Palette(color)),
                        UserAction::Press(ButtonId::Slot(slot)),
                    ]
                })
                .collect()
        }
        other => match Color::from_token(other) {
            Some(color) => vec![UserAction::Press(ButtonId::Palette(color))],
            None => return Err(format!("Unknown command '{other}'. {HELP}")),
        },
    };

    if let Some(extra) = words.next() {
        return Err(format!("Unexpected '{extra}' after '{command}'."));
    }
    Ok(actions)
}

fn format_row(row: &[Color]) -> String {
    row.iter().map(|c| c.initial().to_string()).collect::<Vec<_>>().join(" ")
}

fn format_pegs(pegs: &[Color]) -> String {
    pegs.iter()
        .map(|c| match c {
            Color::Border => '●',
            Color::Red => '○',
            _ => '·',
        })
        .collect()
}

pub fn display_board(state: &GameState) {
    let board = state.board();
    let last_row = state.current_turn().min(MAX_TURNS - 1);
    for turn in 0..=last_row {
        let Some(row) = board.row(turn) else { break };
        let marker = if turn == state.current_turn() && !state.is_over() {
            '>'
        } else {
            ' '
        };
        match board.hint(turn) {
            Some(hint) => println!(
                "{marker}{:>2}. {}   {} ({} exact, {} color)",
                turn + 1,
                format_row(row),
                format_pegs(&hint_pegs(hint)),
                hint.exact_matches,
                hint.color_matches
            ),
            None => println!("{marker}{:>2}. {}", turn + 1, format_row(row)),
        }
    }
}

pub fn display_status(state: &GameState, controls: &Controls) {
    let palette = PLAYABLE
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}={}", i + 1, c))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Palette: {palette}");
    println!(
        "Selected: {} | Theme: {:?}{}",
        controls.selected_color(),
        controls.theme(),
        if controls.strobe() { " (strobe)" } else { "" }
    );

    let secret = state
        .secret()
        .map_or_else(|| "? ? ? ?".to_string(), |code| format_row(code));
    println!("Secret: {secret}");

    match state.status() {
        Status::Won => println!("Code cracked in {}! 'restart' to play again.", turns_taken(state)),
        Status::Lost => println!("Out of turns. 'restart' to play again."),
        Status::Playing if state.current_turn() >= MAX_TURNS => println!("Board full."),
        Status::Playing => println!("Turn {} of {MAX_TURNS}.", state.current_turn() + 1),
    }
}

/// Line-oriented implementation of [`GameInterface`] over any `BufRead`.
/// Each input line is one frame. End of input quits.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn poll_actions(&mut self) -> io::Result<Vec<UserAction>> {
        println!("\nEnter a command ('help' for the list):");
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(vec![UserAction::Quit]);
        }

        if input.trim().eq_ignore_ascii_case("help") {
            println!("{HELP}");
            return Ok(Vec::new());
        }

        match parse_command(&input) {
            Ok(actions) => Ok(actions),
            Err(message) => {
                println!("{message}");
                Ok(Vec::new())
            }
        }
    }

    fn render(&mut self, state: &GameState, controls: &Controls) -> io::Result<()> {
        display_board(state);
        display_status(state, controls);
        Ok(())
    }
}
