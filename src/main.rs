use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{self, Write};

use ruy::board::{Color, Square};
use ruy::game::Game;
use ruy::rules::GameStatus;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess in the terminal", long_about = None)]
struct Args {
    /// Opponent: 'h' for a second human, 'r' for a random mover
    #[arg(long, default_value = "h")]
    opponent: String,

    /// Your color against the random mover: 'w' or 'b'
    #[arg(long, default_value = "w")]
    color: String,

    /// Seed for the random mover (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let vs_random = args.opponent.starts_with('r');
    let human_color = parse_color(&args.color)?;
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    println!("Enter moves as two squares, e.g. e2e4.");
    println!("Enter a single square to list its legal moves; 'quit' exits.");

    let mut game = Game::new();
    loop {
        println!("\n{}", game.board());
        match game.status() {
            GameStatus::Checkmate => {
                println!("Checkmate! {} loses!", game.turn());
                break;
            }
            GameStatus::Stalemate => {
                println!("Stalemate!");
                break;
            }
            GameStatus::Check => println!("{} is in check", game.turn()),
            GameStatus::Normal => {}
        }
        println!("{} to move", game.turn());

        if vs_random && game.turn() != human_color {
            let moves = game.all_legal_moves();
            // status() above guarantees at least one move exists
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            println!("Engine plays: {mv}");
            game.try_move(mv.from, mv.to)?;
            continue;
        }

        print!("Your move: ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            break;
        }

        // A single square stands in for clicking a piece: show where it
        // could go instead of highlighting squares.
        if let Some(sq) = Square::parse(input) {
            let moves = game.legal_moves(sq);
            if moves.is_empty() {
                println!("No legal moves from {sq}");
            } else {
                print!("Legal moves from {sq}:");
                for mv in moves {
                    print!(" {}", mv.to);
                }
                println!();
            }
            continue;
        }

        let parsed = (
            input.get(..2).and_then(Square::parse),
            input.get(2..).and_then(Square::parse),
        );
        let (Some(from), Some(to)) = parsed else {
            println!("Invalid input! Use a square like 'e2' or a move like 'e2e4'");
            continue;
        };
        if let Err(err) = game.try_move(from, to) {
            println!("{err}");
        }
    }

    Ok(())
}
