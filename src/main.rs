// drs: print the domino tableau of a signed permutation as JSON.
//
// Usage: drs [--strategy linear|binary] [--check] [--pretty] [PERMUTATION...]
//
// Permutation arguments are joined with spaces; with none, the permutation
// is read from stdin. DRS_STRATEGY sets the default strategy, RUST_LOG the
// log level (logs go to stderr).

use std::io::Read;
use std::process::ExitCode;

use domino_rs::drs::{compute_tableau_checked, compute_tableau_with};
use domino_rs::{DrsError, Result, SignedPermutation, Strategy};

const USAGE: &str = "usage: drs [--strategy linear|binary] [--check] [--pretty] [PERMUTATION...]";

struct Options {
    strategy: Strategy,
    check: bool,
    pretty: bool,
    words: Vec<String>,
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
    strategy: Strategy,
) -> Result<Option<Options>> {
    let mut options = Options { strategy, check: false, pretty: false, words: Vec::new() };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--check" => options.check = true,
            "--pretty" => options.pretty = true,
            "--strategy" => {
                let name = args.next().ok_or(DrsError::MissingValue("--strategy"))?;
                options.strategy = name.parse()?;
            }
            // Anything else, negative entries included, is permutation text.
            _ => {
                if let Some(name) = arg.strip_prefix("--strategy=") {
                    options.strategy = name.parse()?;
                } else {
                    options.words.push(arg);
                }
            }
        }
    }
    return Ok(Some(options));
}

fn run() -> Result<()> {
    let strategy = match std::env::var("DRS_STRATEGY") {
        Ok(name) => name.parse()?,
        Err(_) => Strategy::default(),
    };
    let options = match parse_args(std::env::args().skip(1), strategy)? {
        Some(options) => options,
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let text = if options.words.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        options.words.join(" ")
    };

    let permutation = SignedPermutation::parse(&text)?;
    log::info!("{} entries, strategy {}", permutation.len(), options.strategy);

    let tableau = if options.check {
        compute_tableau_checked(&permutation)?
    } else {
        compute_tableau_with(&permutation, options.strategy)?
    };

    let view = tableau.view();
    let json = if options.pretty { view.to_json_pretty()? } else { view.to_json()? };
    println!("{}", json);
    return Ok(());
}

fn main() -> ExitCode {
    env_logger::init();

    return match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("drs: {}", err);
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    };
}
