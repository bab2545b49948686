//! Minimum knight moves between two squares, from the command line.
//!
//! Run: cargo run --bin knight-path -- --size 8 --from 0,0 --to 7,0

use std::io::Write;

use clap::Parser;
use knight_core::Square;
use knight_paths::{KnightPathFinder, SearchError};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board side length N (the board is N×N)
    #[arg(short, long, default_value_t = 8)]
    size: i32,

    /// Starting square as x,y
    #[arg(short, long, default_value = "0,0", allow_hyphen_values = true)]
    from: Square,

    /// Target square as x,y
    #[arg(short, long, default_value = "7,0", allow_hyphen_values = true)]
    to: Square,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn run(args: &Args) -> Result<u32, SearchError> {
    let finder = KnightPathFinder::new(args.size);
    info!("searching {} -> {} on {} board", args.from, args.to, finder.board());
    finder.find(args.from, args.to)
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .init();

    match run(&args) {
        Ok(steps) => println!("Minimum number of steps required is {steps}."),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_demo() {
        let args = Args::try_parse_from(["knight-path"]).unwrap();
        assert_eq!(args.size, 8);
        assert_eq!(args.from, Square::new(0, 0));
        assert_eq!(args.to, Square::new(7, 0));
        assert_eq!(run(&args), Ok(5));
    }

    #[test]
    fn parses_squares() {
        let args =
            Args::try_parse_from(["knight-path", "--size", "4", "--from", "0,0", "--to", "2,2"])
                .unwrap();
        assert_eq!(run(&args), Ok(4));
    }

    #[test]
    fn rejects_malformed_square() {
        assert!(Args::try_parse_from(["knight-path", "--to", "seven"]).is_err());
    }

    #[test]
    fn reports_search_errors() {
        let args =
            Args::try_parse_from(["knight-path", "--size", "3", "--to", "1,1"]).unwrap();
        assert!(matches!(run(&args), Err(SearchError::PathNotFound { .. })));
        let args = Args::try_parse_from(["knight-path", "--from", "-1,0"]).unwrap();
        assert!(matches!(run(&args), Err(SearchError::InvalidSquare { .. })));
    }
}
