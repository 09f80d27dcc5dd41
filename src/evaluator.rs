use crate::board::{Hint, Row};
use crate::color::{CODE_LENGTH, Code};

/// Score a guess against the secret.
///
/// First pass counts exact matches and consumes both slots. Second pass walks
/// the remaining guess slots left to right and consumes the first unconsumed
/// secret slot of the same color. The consumption order matters when either
/// side repeats a color.
#[must_use]
pub fn evaluate(secret: &Code, guess: &Row) -> Hint {
    let mut secret_used = [false; CODE_LENGTH];
    let mut guess_used = [false; CODE_LENGTH];
    let mut exact_matches = 0;
    let mut color_matches = 0;

    // First pass: exact
    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            exact_matches += 1;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    // Second pass: right color, wrong place
    for i in 0..CODE_LENGTH {
        if guess_used[i] {
            continue;
        }
        if let Some(j) = (0..CODE_LENGTH).find(|&j| !secret_used[j] && secret[j] == guess[i]) {
            color_matches += 1;
            secret_used[j] = true;
        }
    }

    Hint::new(exact_matches, color_matches)
}
