use citygraph_core::{CommandLineReader, InputReader, ReaderOptions};
use serde::Serialize;
use std::io::{BufRead, BufReader, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Reader(citygraph_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Reader(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<citygraph_core::Error> for CliError {
    fn from(value: citygraph_core::Error) -> Self {
        Self::Reader(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    pretty: bool,
    lenient: bool,
}

fn usage() -> &'static str {
    "citygraph-cli\n\
\n\
USAGE:\n\
  citygraph-cli [--pretty] [--lenient] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', answers are read interactively from stdin.\n\
  - A <path> replays a scripted session, one answer per line.\n\
  - Prompts go to stdout and validation errors to stderr.\n\
  - The finished graph is printed as JSON to stdout, or written to --out.\n\
  - --lenient accepts self-loops and zero-length roads.\n\
  - Set CITYGRAPH_LOG (e.g. 'debug') to see structured events on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--lenient" => args.lenient = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>, CliError> {
    match input {
        None | Some("-") => Ok(Box::new(std::io::stdin().lock())),
        Some(path) => Ok(Box::new(BufReader::new(std::fs::File::open(path)?))),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    match out {
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        Some(path) => std::fs::write(path, text)?,
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CITYGRAPH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let options = if args.lenient {
        ReaderOptions::lenient()
    } else {
        ReaderOptions::strict()
    };
    let input = open_input(args.input.as_deref())?;
    let mut reader =
        CommandLineReader::new(input, std::io::stdout(), std::io::stderr()).with_options(options);
    let result = reader.read()?;

    write_json(&result, args.pretty, args.out.as_deref())?;
    tracing::debug!(out = ?args.out, "graph written");
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging();

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Reader(citygraph_core::Error::InputClosed { .. })) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
