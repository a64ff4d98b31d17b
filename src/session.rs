use crate::board::{Board, MoveError, Player};
use crate::outcome::{Outcome, evaluate};
use crate::score::Scores;
use crate::search::best_move;

/// Who controls the `O` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Both marks are placed through [`Session::play`].
    #[default]
    TwoPlayer,
    /// `O` is the engine; drive it with [`Session::computer_turn`].
    VsComputer,
}

/// Sequences turns over the pure engine functions.
///
/// Holds the board, the player to move, the outcome of the last evaluation,
/// and the running score tally. The engine itself stays stateless: every
/// turn hands it a snapshot and applies what comes back.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: Player,
    outcome: Outcome,
    mode: Mode,
    scores: Scores,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Mode::default())
    }
}

impl Session {
    /// Starts a session with an empty board, `X` to move, and a zeroed tally.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            outcome: Outcome::InProgress,
            mode,
            scores: Scores::default(),
        }
    }

    /// Starts a session with a previously persisted tally.
    pub fn with_scores(mode: Mode, scores: Scores) -> Self {
        Self {
            scores,
            ..Self::new(mode)
        }
    }

    /// The current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. Meaningless once the round is over.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// The outcome of the round as of the last applied move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The running tally. Counters only grow until [`Session::reset_scores`].
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// The configured mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Applies the current player's mark at `index`.
    ///
    /// On success the board is re-evaluated: a terminal result is recorded
    /// in the tally and ends the round, otherwise the turn alternates.
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::Finished);
        }

        self.board.place(index, self.current)?;
        self.outcome = evaluate(&self.board);
        match self.outcome {
            Outcome::Win { player, .. } => {
                tracing::debug!(%player, "round won");
                self.scores.record_win(player);
            }
            Outcome::Draw => {
                tracing::debug!("round drawn");
                self.scores.record_draw();
            }
            Outcome::InProgress => self.current = self.current.opponent(),
        }

        Ok(self.outcome)
    }

    /// Lets the engine take `O`'s turn.
    ///
    /// Applies the optimal move and returns its index when the session is in
    /// [`Mode::VsComputer`], the round is in progress, and `O` is to move;
    /// otherwise does nothing and returns `None`.
    pub fn computer_turn(&mut self) -> Option<usize> {
        if self.mode != Mode::VsComputer
            || self.current != Player::O
            || self.outcome.is_terminal()
        {
            return None;
        }

        let index = best_move(&self.board, Player::O)?;
        // The engine never picks an occupied cell on an in-progress board.
        self.play(index).ok()?;
        Some(index)
    }

    /// Starts a fresh round: empty board, `X` to move, tally preserved.
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.current = Player::X;
        self.outcome = Outcome::InProgress;
    }

    /// Zeroes the tally. The round in progress is unaffected.
    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
    }
}
