//! Plays a bounded number of plies from a position and reports search
//! effort per move, for quick performance comparisons between builds.

use clap::Parser;
use damista::board::{Board, Color};
use damista::game::State;
use damista::search::{Decision, Search, SearchParams};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Position file; the standard opening setup when omitted
    #[arg(short, long)]
    file: Option<String>,

    #[arg(short, long, default_value_t = 8)]
    depth: u8,

    /// Maximum number of plies to play
    #[arg(short, long, default_value_t = 20)]
    moves: u32,
}

const START_ROWS: [&str; 8] = [
    ".b.b.b.b",
    "b.b.b.b.",
    ".b.b.b.b",
    "........",
    "........",
    "r.r.r.r.",
    ".r.r.r.r",
    "r.r.r.r.",
];

fn main() {
    let args = Args::parse();

    let board = match &args.file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => Board::from_rows(text.lines()),
            Err(e) => {
                eprintln!("cannot read {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Board::from_rows(START_ROWS),
    };

    let mut search = Search::new(SearchParams::new().max_depth(args.depth));
    let mut state = State::new(board, Color::Red);
    let mut total_nodes = 0u64;
    let start = std::time::Instant::now();

    for ply in 1..=args.moves {
        if state.board.is_terminal() {
            println!("terminal position after {} plies", ply - 1);
            break;
        }
        match search.decide(state) {
            Decision::Play(next) => {
                total_nodes += search.stats().nodes;
                println!(
                    "ply {:>3}: {} nodes in {} ms ({} cutoffs)",
                    ply,
                    search.stats().nodes,
                    search.stats().search_time.as_millis(),
                    search.stats().cutoffs,
                );
                state = next;
            }
            Decision::Stalemate(stuck) => {
                println!("stalemate at ply {ply}");
                state = stuck;
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    search.stats().print_summary();
    println!();
    println!(
        "total: {} nodes in {} ms ({:.2} Mnps)",
        total_nodes,
        elapsed.as_millis(),
        total_nodes as f64 / elapsed.as_micros().max(1) as f64
    );
    println!("final position:\n{}", state.board.render());
}
