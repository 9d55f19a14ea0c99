use std::{fs, io, process::ExitCode};

use clap::{CommandFactory, Parser};
use rscript::{interpreter::environment::Environment, run_script};
use tracing_subscriber::EnvFilter;

/// rscript runs programs written in a small R-like scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as source code instead of a file path.
    #[arg(short, long)]
    eval: bool,

    /// Increase log output on stderr (-v, -vv, -vvv). `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path of the script to run, or the script itself with `--eval`.
    contents: Option<String>,
}

fn install_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    install_tracing(args.verbose);

    let Some(contents) = args.contents else {
        println!("{}", Args::command().render_usage());
        return ExitCode::SUCCESS;
    };

    let script = if args.eval {
        contents
    } else {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!("File {contents} not found.");
                return ExitCode::SUCCESS;
            },
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut environment = Environment::new();

    if let Err(e) = run_script(&script, &mut environment, &mut out) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
