use clap::Parser;
use std::time::Instant;

use ruy::board::{Board, Color};
use ruy::perft::perft;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the ruy move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() {
    let args = Args::parse();
    let board = Board::initial();

    let t0 = Instant::now();
    let nodes = perft(&board, Color::White, args.depth);
    let dt = t0.elapsed().as_secs_f64();

    if args.nps {
        println!(
            "nodes: {nodes} elapsed: {dt:.3}s nps: {:.0}",
            nodes as f64 / dt.max(1e-9)
        );
    } else {
        println!("nodes: {nodes}");
    }
}
