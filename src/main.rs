use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use log::debug;

use rusty_trimaze::maze::json_utils::traversal_to_json;
use rusty_trimaze::{
    solve, test_map, FollowerConfig, Hand, Outcome, Position, Traversal, Validity,
};

#[derive(Parser, Debug)]
#[command(name = "trimaze")]
#[command(about = "Validate and walk mazes made of triangular cells")]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("command").required(true).args(["test", "rpath", "lpath"])))]
struct Args {
    /// Test the validity of the maze in FILE
    #[arg(long, value_name = "FILE")]
    test: Option<PathBuf>,

    /// Solve the maze with the right-hand rule starting from row R, column C
    #[arg(long, num_args = 3, value_names = ["R", "C", "FILE"])]
    rpath: Option<Vec<String>>,

    /// Solve the maze with the left-hand rule starting from row R, column C
    #[arg(long, num_args = 3, value_names = ["R", "C", "FILE"])]
    lpath: Option<Vec<String>>,

    /// Print the walk as a JSON report instead of one `row,col` per line
    #[arg(long)]
    json: bool,

    /// Stop the walk after N moves
    #[arg(long, value_name = "N")]
    max_steps: Option<usize>,

    /// Do not stop the walk when it starts repeating itself
    #[arg(long)]
    no_cycle_check: bool,

    /// Leave dead ends through the side the walker came in from
    #[arg(long)]
    turn_back: bool,
}

fn main() -> ExitCode {
    // configure the log level; by default only errors
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    debug!("{args:?}");

    if let Some(file) = &args.test {
        return run_test(file);
    }

    let (hand, values) = match (&args.rpath, &args.lpath) {
        (Some(values), _) => (Hand::Right, values),
        (_, Some(values)) => (Hand::Left, values),
        _ => return ExitCode::FAILURE,
    };
    let (start, file) = match parse_walk(values) {
        Ok(walk) => walk,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Invalid arguments. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    let config = FollowerConfig::default()
        .with_max_steps(args.max_steps)
        .with_cycle_detection(!args.no_cycle_check)
        .with_turn_back(args.turn_back);
    run_solve(&file, start, hand, config, args.json)
}

fn parse_walk(values: &[String]) -> Result<(Position, PathBuf), String> {
    let [row, col, file] = values else {
        return Err(format!("expected R C FILE, got {} values", values.len()));
    };
    let row = row
        .parse::<usize>()
        .map_err(|_| format!("invalid row {row:?}"))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("invalid column {col:?}"))?;
    Ok((Position::new(row, col), PathBuf::from(file)))
}

fn run_test(file: &Path) -> ExitCode {
    match test_map(file) {
        Ok(Validity::Valid) => {
            println!("Valid");
            ExitCode::SUCCESS
        }
        Ok(Validity::Invalid(reason)) => {
            debug!("{reason}");
            println!("Invalid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_solve(
    file: &Path,
    start: Position,
    hand: Hand,
    config: FollowerConfig,
    json: bool,
) -> ExitCode {
    let traversal = match solve(file, start, hand, config) {
        Ok(traversal) => traversal,
        Err(e) if e.is_invalid_maze() => {
            eprintln!("Definition of maze is INVALID! ({e})");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_traversal(&traversal, json) {
        eprintln!("Failed to write the path: {e}");
        return ExitCode::FAILURE;
    }

    match traversal.outcome {
        Outcome::Exited { .. } | Outcome::Stalled => ExitCode::SUCCESS,
        Outcome::StepLimitReached { limit } => {
            eprintln!("Walk stopped after {limit} moves");
            ExitCode::FAILURE
        }
        Outcome::CycleDetected { at } => {
            eprintln!("Walk loops forever, stopped at {at}");
            ExitCode::FAILURE
        }
    }
}

fn print_traversal(traversal: &Traversal, json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let report = traversal_to_json(traversal).map_err(io::Error::other)?;
        writeln!(out, "{report}")?;
    } else {
        for position in &traversal.path {
            writeln!(out, "{position}")?;
        }
    }
    out.flush()
}
