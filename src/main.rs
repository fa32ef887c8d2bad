use std::{fs, io, process::ExitCode, time::Duration};

use arrow::{
    diagnostics::DiagnosticPrinter,
    error::Error,
    highlight::highlight,
    interpreter::{
        environment::Environment,
        evaluator::{core::Interpreter, sink::ConsoleSink, supervisor::Limits},
    },
    parse_source,
};
use clap::Parser;

/// arrow runs programs written in a tiny actor-oriented, pattern-matching
/// rewrite language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    file: String,

    /// Wall-clock budget for the run in milliseconds. 0 disables it.
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// Maximum number of rewrite steps.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print the highlighted source and exit.
    #[arg(long)]
    highlight: bool,

    /// Print the program in canonical form and exit.
    #[arg(long)]
    ast: bool,

    /// Print the final environment after the run.
    #[arg(long)]
    env: bool,

    /// Raise the log level (warn, info, debug, trace). `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn limits(&self) -> Limits {
        let mut limits = Limits::unlimited();
        if self.timeout_ms > 0 {
            limits = limits.with_timeout(Duration::from_millis(self.timeout_ms));
        }
        if let Some(max_steps) = self.max_steps {
            limits = limits.with_max_steps(max_steps);
        }
        limits
    }

    const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    let Ok(source) = fs::read_to_string(&args.file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.file);
        return ExitCode::FAILURE;
    };
    let printer = DiagnosticPrinter::new(args.file.as_str(), source.as_str());

    if args.highlight {
        return match highlight(&source) {
            Ok(colored) => {
                println!("{colored}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                printer.print(&Error::from(e));
                ExitCode::FAILURE
            },
        };
    }

    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(e) => {
            printer.print(&e);
            return ExitCode::FAILURE;
        },
    };

    if args.ast {
        print!("{program}");
        return ExitCode::SUCCESS;
    }

    let mut interpreter = Interpreter::new(program, ConsoleSink::new(io::stdout().lock()));
    let outcome = interpreter.run(&args.limits());

    if outcome.is_timed_out() {
        eprintln!("warning: '{}' stopped after {} steps without terminating",
                  args.file,
                  outcome.steps());
    }

    if args.env {
        dump_env(interpreter.env());
    }

    ExitCode::SUCCESS
}

fn dump_env(env: &Environment) {
    for name in env.names() {
        if let Some(value) = env.get(name) {
            println!("{name} = {}", value.describe());
        }
    }
}
