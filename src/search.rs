use crate::board::{Board, CELLS, CENTER, Player};
use crate::outcome::{Outcome, evaluate};

/// Base score of a win. Terminal positions score `WIN_SCORE - depth` when
/// `player` wins and `depth - WIN_SCORE` when the opponent does, so the
/// search prefers winning sooner and losing later.
const WIN_SCORE: i32 = 10;

/// Picks the provably optimal move for `player` on the given snapshot.
///
/// Runs an exhaustive minimax over every legal continuation: `player`
/// maximizes, the opponent minimizes, draws score zero. Among the empty
/// cells the strictly greatest score wins, first-found on ties (index order
/// `0..9`), so the answer is deterministic for a given board.
///
/// Returns `None` when the board is already terminal — a won position or a
/// full board leaves nothing to do.
///
/// The caller's board is never modified; the search backtracks on its own
/// scratch copy.
pub fn best_move(board: &Board, player: Player) -> Option<usize> {
    if evaluate(board).is_terminal() {
        return None;
    }

    // Known opening: moving second against anything but the center, taking
    // the free center is optimal. The full search agrees; answering here
    // also pins one choice among equally-scored replies.
    if board.occupied_count() == 1 && board.get(CENTER).is_none() {
        return Some(CENTER);
    }

    let opponent = player.opponent();
    let mut scratch = *board;
    let mut chosen = None;
    let mut best_score = i32::MIN;
    for index in board.empty_cells() {
        scratch.set(index, Some(player));
        let score = score_position(&mut scratch, 0, false, player, opponent);
        scratch.set(index, None);
        if score > best_score {
            best_score = score;
            chosen = Some(index);
        }
    }

    tracing::trace!(%player, ?chosen, best_score, "search complete");
    chosen
}

/// Recursively scores a position by playing out every continuation.
///
/// `depth` counts the hypothetical moves made since the root call, starting
/// at 0 for the root's children. Recursion is bounded by the 9 cells, so no
/// explicit cutoff is needed; every branch ends at a terminal board.
fn score_position(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    player: Player,
    opponent: Player,
) -> i32 {
    match evaluate(board) {
        Outcome::Win { player: winner, .. } => {
            return if winner == player {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if maximizing { player } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in 0..CELLS {
        if board.get(index).is_some() {
            continue;
        }
        board.set(index, Some(mover));
        let score = score_position(board, depth + 1, !maximizing, player, opponent);
        board.set(index, None);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, CELLS, CENTER, Player};
    use crate::outcome::{Outcome, evaluate};
    use crate::search::best_move;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn terminal_boards_have_no_move() {
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(best_move(&drawn, Player::X), None);

        // Won with empty cells left: the precondition is already violated.
        let won: Board = "XXX.OO...".parse().unwrap();
        assert_eq!(best_move(&won, Player::O), None);
    }

    #[test]
    fn second_player_takes_a_free_center() {
        for first in (0..CELLS).filter(|&index| index != CENTER) {
            let mut board = Board::new();
            board.place(first, Player::X).unwrap();
            assert_eq!(best_move(&board, Player::O), Some(CENTER));
        }
    }

    #[test]
    fn second_player_answers_center_with_a_corner() {
        let mut board = Board::new();
        board.place(CENTER, Player::X).unwrap();
        // All four corners draw and everything else loses; the first corner
        // in index order wins the tie.
        assert_eq!(best_move(&board, Player::O), Some(0));
    }

    #[test]
    fn takes_an_immediate_win() {
        // O completes the middle row; winning outranks blocking X's top row.
        let board: Board = "XX.OO....".parse().unwrap();
        let index = best_move(&board, Player::O).unwrap();
        assert_eq!(index, 5);

        let mut after = board;
        after.place(index, Player::O).unwrap();
        assert_eq!(evaluate(&after).winner(), Some(Player::O));
    }

    #[test]
    fn blocks_an_imminent_loss() {
        // X threatens the top row and O has no win of its own.
        let board: Board = "XX.OOX...".parse().unwrap();
        let index = best_move(&board, Player::O).unwrap();
        assert_eq!(index, 2);

        // The choice defeats the threat: X can no longer win on the spot.
        let mut after = board;
        after.place(index, Player::O).unwrap();
        for reply in after.empty_cells().collect::<Vec<_>>() {
            let mut probe = after;
            probe.place(reply, Player::X).unwrap();
            assert_eq!(evaluate(&probe).winner(), None);
        }
    }

    #[test]
    fn never_picks_an_occupied_cell() {
        let boards = ["X........", "XO.......", "X.O.X.O..", "XOXOXO...", "X...O...X"];
        for literal in boards {
            let board: Board = literal.parse().unwrap();
            for player in [Player::X, Player::O] {
                if let Some(index) = best_move(&board, player) {
                    assert_eq!(board.get(index), None, "picked occupied cell on {literal}");
                }
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_answers() {
        let board: Board = "X.O.X.O..".parse().unwrap();
        let first = best_move(&board, Player::X);
        assert_eq!(first, best_move(&board, Player::X));
        assert!(first.is_some());
    }

    #[test]
    fn caller_board_is_unchanged() {
        let board: Board = "XX.OOX...".parse().unwrap();
        let snapshot = board;
        best_move(&board, Player::O).unwrap();
        assert_eq!(board, snapshot);
    }

    /// Walks every X strategy (all legal X moves at every X turn) with O
    /// answering through the engine, and fails on any X win.
    fn engine_survives_every_line(board: &mut Board, games: &mut u32) {
        for index in 0..CELLS {
            if board.get(index).is_some() {
                continue;
            }
            board.set(index, Some(Player::X));
            match evaluate(board) {
                Outcome::Win { .. } => panic!("engine lost:\n{board}"),
                Outcome::Draw => *games += 1,
                Outcome::InProgress => {
                    let reply = best_move(board, Player::O).unwrap();
                    board.set(reply, Some(Player::O));
                    match evaluate(board) {
                        Outcome::Win { player, .. } => {
                            assert_eq!(player, Player::O);
                            *games += 1;
                        }
                        Outcome::Draw => *games += 1,
                        Outcome::InProgress => engine_survives_every_line(board, games),
                    }
                    board.set(reply, None);
                }
            }
            board.set(index, None);
        }
    }

    #[test]
    fn second_player_never_loses_against_any_strategy() {
        let mut board = Board::new();
        let mut games = 0;
        engine_survives_every_line(&mut board, &mut games);
        assert_eq!(board, Board::new());
        assert!(games > 0);
    }

    #[test]
    fn second_player_never_loses_against_a_random_opponent() {
        let mut rng = StdRng::seed_from_u64(0x0B0A2D);
        for _ in 0..100 {
            let mut board = Board::new();
            loop {
                let empty: Vec<usize> = board.empty_cells().collect();
                let pick = empty[rng.random_range(0..empty.len())];
                board.place(pick, Player::X).unwrap();
                if evaluate(&board).is_terminal() {
                    break;
                }
                let reply = best_move(&board, Player::O).unwrap();
                board.place(reply, Player::O).unwrap();
                if evaluate(&board).is_terminal() {
                    break;
                }
            }
            assert_ne!(evaluate(&board).winner(), Some(Player::X), "{board}");
        }
    }
}
