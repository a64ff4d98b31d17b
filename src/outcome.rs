use crate::board::{Board, LINES, Player};

/// The result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line is satisfied and at least one cell is still empty.
    InProgress,
    /// A line is uniformly marked by `player`; `line` is the winning triplet.
    Win {
        player: Player,
        line: [usize; 3],
    },
    /// Every cell is occupied and no line is satisfied.
    Draw,
}

impl Outcome {
    /// Returns `true` for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning player, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Classifies a board snapshot as won, drawn, or still in progress.
///
/// Lines are checked in the fixed order of [`LINES`]; the first satisfied
/// one decides. Boards with several satisfied lines are unreachable through
/// alternating play, but the search probes hypothetical positions, so the
/// tie-break is defined rather than an error.
///
/// Pure and total: any 9-cell snapshot gets an answer, no side effects.
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(player) = board.get(a) {
            if board.get(b) == Some(player) && board.get(c) == Some(player) {
                return Outcome::Win { player, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
