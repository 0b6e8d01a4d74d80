//! Damista checkers engine main entry point.

use clap::Parser;
use damista::board::{Board, Color};
use damista::game::{self, State};
use damista::search::SearchParams;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input file that contains the starting position
    #[arg(long)]
    inputfile: String,

    /// The output file that receives the line of play
    #[arg(long)]
    outputfile: String,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("damista failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let text = std::fs::read_to_string(&args.inputfile)
        .map_err(|e| format!("cannot read {}: {e}", args.inputfile))?;
    let board = Board::from_rows(text.lines());

    // Red moves first.
    let initial = State::new(board, Color::Red);
    let final_state = game::play(initial, SearchParams::new());

    std::fs::write(&args.outputfile, game::render_line(&final_state))
        .map_err(|e| format!("cannot write {}: {e}", args.outputfile))?;
    Ok(())
}
