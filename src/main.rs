use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use npp::interpreter::parser::parse;
use tracing::{Level, debug};

/// npp runs programs written in the npp language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the program to run. Must end in `.npp`.
    path: PathBuf,

    /// Logs parser and interpreter activity to stderr.
    #[arg(short, long)]
    debug: bool,

    /// Prints the parsed program instead of running it.
    #[arg(short, long)]
    ast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_target(false)
                             .with_writer(io::stderr)
                             .with_max_level(level)
                             .init();

    if args.path.extension().is_none_or(|ext| ext != "npp") {
        eprintln!("Invalid file type. Please provide a .npp file.");
        return ExitCode::FAILURE;
    }

    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", args.path.display());
            return ExitCode::FAILURE;
        },
    };
    debug!(path = %args.path.display(), bytes = source.len(), "loaded source");

    let mut stdout = io::stdout().lock();
    let result = if args.ast {
        print_ast(&source, &mut stdout)
    } else {
        npp::run(&source, &mut stdout)
    };

    match result.and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            ExitCode::FAILURE
        },
    }
}

fn print_ast(source: &str, out: &mut impl Write) -> io::Result<()> {
    let (program, errors) = parse(source);
    for error in &errors {
        writeln!(out, "{error}")?;
    }
    write!(out, "{program}")
}
