// vim: set ai et ts=4 sts=4 sw=4:
use std::fs;
use std::io::{self, Read};
use std::process;

use clap::{crate_version, App, Arg};
use yaml_rust::YamlLoader;

use nonoqr::util::is_a_tty;
use nonoqr::generate::{bitmap_from_yaml, generate_from_bitmap};
use nonoqr::{Error, Puzzle, Solver};

pub struct Args {
    pub file:       Option<String>,
    pub generate:   bool,
    pub emit_color: bool,
    pub verbosity:  u64,
}

fn parse_args() -> Args {
    let matches = App::new("nonoqr")
        .version(crate_version!())
        .about("solves nonogram puzzles, and builds them from bitmaps")
        .arg(Arg::with_name("generate")
                 .short("g")
                 .long("generate")
                 .help("Treat the input as a 'bitmap:' document and generate a puzzle from it"))
        .arg(Arg::with_name("no-color")
                 .long("no-color")
                 .help("Never color the output, even on a tty"))
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("Log progress to stderr; repeat for more detail"))
        .arg(Arg::with_name("FILE")
                 .index(1)
                 .help("YAML puzzle document (stdin when omitted)"))
        .get_matches();

    Args {
        file:       matches.value_of("FILE").map(String::from),
        generate:   matches.is_present("generate"),
        emit_color: !matches.is_present("no-color") && is_a_tty(io::stdout()),
        verbosity:  matches.occurrences_of("verbose"),
    }
}

fn setup_logging(verbosity: u64) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .expect("logger already initialized");
}

fn read_input(file: &Option<String>) -> Result<String, Error> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| Error::Parse(format!("cannot read {}: {}", path, e))),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)
                       .map_err(|e| Error::Parse(format!("cannot read stdin: {}", e)))?;
            Ok(input)
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let input = read_input(&args.file)?;
    let docs = YamlLoader::load_from_str(&input)
        .map_err(|e| Error::Parse(format!("invalid yaml: {}", e)))?;
    let doc = docs.get(0)
        .ok_or_else(|| Error::Parse("empty input document".to_string()))?;

    if args.generate {
        let bitmap = bitmap_from_yaml(doc)?;
        match generate_from_bitmap(&bitmap)? {
            Some(generated) => {
                print!("{}", generated.puzzle.fmt_clues_yaml());
                print!("{}", generated.puzzle.fmt_board(args.emit_color));
            }
            None => {
                eprintln!("unable to derive a uniquely solvable puzzle from this bitmap");
                process::exit(2);
            }
        }
    } else {
        let puzzle = Puzzle::from_yaml(doc)?;
        let mut solver = Solver::new(puzzle);
        solver.solve()?;
        print!("{}", solver.puzzle.fmt_board(args.emit_color));
        let counts = solver.puzzle.grid.status_counts();
        if counts.unknown > 0 {
            eprintln!("{} square(s) could not be determined from the clues", counts.unknown);
        }
    }
    Ok(())
}

fn main() {
    let args = parse_args();
    setup_logging(args.verbosity);
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
