//! An interactive terminal round against the engine.
//!
//! `cargo run --example play` pits you (X) against the engine (O);
//! `cargo run --example play -- human` seats two players at one keyboard.
//! Scores persist in `xo_scores.json` next to the working directory.

use std::io::{self, Write};

use xo_minimax::board::{Board, Player};
use xo_minimax::outcome::Outcome;
use xo_minimax::score::ScoreStore;
use xo_minimax::session::{Mode, Session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mode = match std::env::args().nth(1).as_deref() {
        Some("human") => Mode::TwoPlayer,
        _ => Mode::VsComputer,
    };

    let store = ScoreStore::default();
    let mut session = Session::with_scores(mode, store.load());

    'rounds: loop {
        loop {
            render(session.board());
            if session.outcome().is_terminal() {
                break;
            }

            if let Some(index) = session.computer_turn() {
                println!("Engine plays {}", index + 1);
                continue;
            }

            let player = session.current_player();
            print!("{player}'s move (1-9, q to quit): ");
            io::stdout().flush().expect("stdout flush");
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() || input.is_empty() {
                break 'rounds;
            }
            let input = input.trim();
            if input.eq_ignore_ascii_case("q") {
                break 'rounds;
            }
            let cell = match input.parse::<usize>() {
                Ok(cell) if (1..=9).contains(&cell) => cell,
                _ => {
                    println!("Enter a number from 1 to 9.");
                    continue;
                }
            };
            if let Err(err) = session.play(cell - 1) {
                println!("{err}");
            }
        }

        match session.outcome() {
            Outcome::Win { player, .. } => println!("Round over! {player} wins."),
            Outcome::Draw => println!("Round over! Draw."),
            Outcome::InProgress => unreachable!("left the turn loop mid-round"),
        }
        let scores = session.scores();
        println!("Scores: X {} | O {} | draws {}", scores.x, scores.o, scores.draws);
        if let Err(err) = store.save(session.scores()) {
            eprintln!("could not save scores: {err}");
        }

        print!("Play again? (y/n): ");
        io::stdout().flush().expect("stdout flush");
        let mut again = String::new();
        if io::stdin().read_line(&mut again).is_err() {
            break;
        }
        if again.trim().eq_ignore_ascii_case("y") {
            session.new_round();
        } else {
            break;
        }
    }
}

/// Prints the grid with digit hints in the empty cells.
fn render(board: &Board) {
    println!();
    for row in 0..3 {
        let base = row * 3;
        println!(
            " {} | {} | {} ",
            cell_char(board, base),
            cell_char(board, base + 1),
            cell_char(board, base + 2)
        );
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn cell_char(board: &Board, index: usize) -> char {
    match board.get(index) {
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
        None => char::from_digit(index as u32 + 1, 10).expect("index is 0..9"),
    }
}
