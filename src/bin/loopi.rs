//! LOOP interpreter command-line.
//!
//! Usage: `loopi [--dump-ast] <program> [<x1> [<x2> ...]]`
//!
//! Runs the program file with the given natural numbers bound to `x1, x2, ...`
//! and prints the final value of `x0`. With `--dump-ast` the parsed program is
//! printed as JSON instead of being run.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

use anyhow::{self, bail, Context};

use loopi::{Evaluator, Natural, VariableStore};

fn main() -> Result<(), anyhow::Error> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();

    let dump_ast = args.first().map(String::as_str) == Some("--dump-ast");
    if dump_ast {
        args.remove(0);
    }

    if args.is_empty() {
        eprintln!("Usage: loopi [--dump-ast] <program> [<x1> [<x2> [ ... ]]]");
        process::exit(1);
    }

    let path = &args[0];
    let file = File::open(path).with_context(|| format!("failed to open input file {}", path))?;

    let program = loopi::parse_reader(BufReader::new(file)).map_err(|err| failed(err, path))?;

    if dump_ast {
        println!("{}", serde_json::to_string_pretty(&program)?);
        return Ok(());
    }

    let inputs = parse_inputs(&args[1..])?;
    let mut evaluator = Evaluator::with_store(VariableStore::from_inputs(&inputs));
    evaluator.execute(&program).map_err(|err| failed(err, path))?;

    println!("{}", evaluator.store().output());
    Ok(())
}

/// Converts positional arguments into values for `x1, x2, ...`
fn parse_inputs(args: &[String]) -> Result<Vec<Natural>, anyhow::Error> {
    args.iter()
        .zip(1..)
        .map(|(arg, id)| {
            let value: i128 = arg
                .trim()
                .parse()
                .with_context(|| format!("invalid value {:?} given for x{}", arg, id))?;
            if value < 0 {
                bail!("negative value {} given for x{}", value, id);
            }
            Natural::try_from(value)
                .with_context(|| format!("value {} for x{} is too large", value, id))
        })
        .collect()
}

/// Names the phase an interpreter error came from
fn failed(err: loopi::Error, path: &str) -> anyhow::Error {
    let phase = match err {
        loopi::Error::Io(_) => "failed to read",
        ref err if err.is_parse_error() => "failed to parse",
        _ => "failed to run",
    };
    anyhow::Error::new(err).context(format!("{} {}", phase, path))
}
