//! Gallows drawings, one stage per missed guess.

use crate::engine::GameStatus;

pub const STAGE_COUNT: usize = 11;
pub const STAGE_HEIGHT: usize = 10;

const BLANK: &str = "                   ";
const GROUND: [&str; 3] = [
    "   .'   ,  .  '.   ",
    " .' .  .     , .'. ",
    "                   ",
];

// Rows above the ground for each stage, top to bottom.
const STAGES: [[&str; 7]; STAGE_COUNT] = [
    [BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, "     .........     "],
    [BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, "     .I.....I.     "],
    [BLANK, BLANK, BLANK, BLANK, BLANK, "      _______      ", "     .I.....I.     "],
    [
        BLANK,
        BLANK,
        "           |       ",
        "           |       ",
        "           |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
    [
        BLANK,
        "       _____       ",
        "           |       ",
        "           |       ",
        "           |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
    [
        BLANK,
        "       _____       ",
        "       |   |       ",
        "           |       ",
        "           |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
    [
        BLANK,
        "       _____       ",
        "       |   |       ",
        "       °   |       ",
        "           |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
    [
        BLANK,
        "       _____       ",
        "       |   |       ",
        "      -°   |       ",
        "           |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
    [
        BLANK,
        "       _____       ",
        "       |   |       ",
        "      -°-  |       ",
        "           |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
    [
        BLANK,
        "       _____       ",
        "       |   |       ",
        "      -°-  |       ",
        "        `  |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
    [
        BLANK,
        "       _____       ",
        "       |   |       ",
        "      -°-  |       ",
        "      ´ `  |       ",
        "      _____|_      ",
        "     .I.....I.     ",
    ],
];

/// Stage index for a session, scaled so the last stage shows exactly when
/// no attempts remain.
#[must_use]
pub fn stage_for(status: &GameStatus) -> usize {
    if status.starting_attempts == 0 {
        return 0;
    }
    if status.remaining_attempts == 0 {
        return STAGE_COUNT - 1;
    }
    let last = (STAGE_COUNT - 1) as u32;
    (status.misses() * last / status.starting_attempts) as usize
}

/// The lines of drawing `stage` (clamped to the last stage).
#[must_use]
pub fn stage_lines(stage: usize) -> Vec<&'static str> {
    let stage = stage.min(STAGE_COUNT - 1);
    STAGES[stage].iter().chain(GROUND.iter()).copied().collect()
}

#[must_use]
pub fn render(status: &GameStatus) -> Vec<&'static str> {
    stage_lines(stage_for(status))
}
