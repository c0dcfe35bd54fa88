mod debug_report;

use akarkata::{Dictionary, Error, Options, Result, Stemmer, Tokenizer};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DICT_ENV: &str = "AKARKATA_DICT";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("error: {err}");
        let code = if matches!(err, Error::Config(_)) { 2 } else { 1 };
        std::process::exit(code);
    }
}

struct CliConfig {
    dict: PathBuf,
    /// Words from the command line; `None` means read text from stdin.
    words: Option<Vec<String>>,
    options: Options,
    verbose: bool,
    color: bool,
}

fn run(config: CliConfig) -> Result<()> {
    let dictionary = Dictionary::load(&config.dict)?;
    if dictionary.is_empty() {
        tracing::warn!(path = %config.dict.display(), "dictionary is empty; every word will be returned as is");
    }
    let stemmer = Stemmer::with_options(dictionary, config.options);

    let words = match config.words {
        Some(words) => words,
        None => Tokenizer::new().tokenize(&read_stdin_input()?),
    };
    if words.is_empty() {
        return Err(Error::Config(format!("no input provided\n\n{}", help_text())));
    }

    for word in &words {
        if config.verbose {
            let res = stemmer.stem_verbose(word);
            debug_report::print_run(&res, config.color);
        } else {
            println!("{}", stemmer.stem(word));
        }
    }

    Ok(())
}

fn parse_args() -> Result<CliConfig> {
    let mut dict: Option<PathBuf> = None;
    let mut words: Vec<String> = Vec::new();
    let mut options = Options::default();
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("akarkata {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" | "--verbose" => verbose = true,
            "--no-recombination" => options.recombination = false,
            "--dict" | "-d" => {
                let value = args.next().ok_or_else(|| Error::Config("--dict expects a value".to_string()))?;
                set_dict(&mut dict, value)?;
            }
            "--" => {
                words.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--dict=") => {
                set_dict(&mut dict, arg.trim_start_matches("--dict=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(Error::Config(format!("unknown option '{arg}'")));
            }
            _ => words.push(arg),
        }
    }

    let dict = match dict {
        Some(path) => path,
        None => match std::env::var_os(DICT_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                return Err(Error::Config(format!("no dictionary given (use --dict <path> or set {DICT_ENV})")));
            }
        },
    };

    let words = if words.is_empty() { None } else { Some(words) };
    Ok(CliConfig { dict, words, options, verbose, color })
}

fn set_dict(dict: &mut Option<PathBuf>, value: String) -> Result<()> {
    if dict.is_some() {
        return Err(Error::Config("dictionary provided multiple times".to_string()));
    }
    *dict = Some(PathBuf::from(value));
    Ok(())
}

fn read_stdin_input() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "akarkata {version}

Indonesian/Malay stemmer: strips affixes until a dictionary root is found.

Usage:
  akarkata [OPTIONS] --dict <path> [--] <word...>
  akarkata [OPTIONS] --dict <path> < text.txt

Options:
  -d, --dict <path>          Root dictionary, one word per line.
                             Default: the {env} environment variable.
  --no-recombination         Skip the suffix re-attachment pass.
  -v, --verbose              Print a probe-by-probe report for every word.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Words are taken from the remaining arguments. Without any, stdin is read as
free text and tokenized first.

Environment:
  RUST_LOG                   Log filter (default: warn), e.g. akarkata=trace.

Exit codes:
  0  Success.
  1  I/O or dictionary error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        env = DICT_ENV
    )
}
