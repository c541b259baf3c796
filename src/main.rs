use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use person_name::PersonName;
use serde_json::json;
use std::cmp::Ordering;
use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

#[rustfmt::skip]
const USAGE: &str = "
Usage:
    person_name parse <name>
    person_name parse -
    person_name cmp '<name1>' '<name2>'
    person_name sort -

With the `parse` command, person_name will validate its argument as a name
of the form 'Family,Given', exiting with status 0 if it succeeds and status 1
otherwise, and print the canonical form, both parts, the display name and the
32-bit hash as JSON. If `-` is the argument, it will expect newline-separated
names from stdin, printing an empty line for each that fails to parse.

With the `cmp` command, it will print `<`, `=` or `>` according to the sort
order of the two names, exiting with status 1 if either fails to parse.

With the `sort` command, it will read newline-separated names from stdin and
print their canonical forms in sort order. Lines that fail to parse are
reported on stderr and skipped.

Set RUST_LOG (e.g. RUST_LOG=debug) to see why inputs are rejected.
";

fn main() {
    let _logger = match init_logging() {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("failed to start logger: {}", err);
            process::exit(70);
        }
    };

    let args: Vec<String> = env::args().collect();

    if args.len() == 4 && args[1] == "cmp" {
        compare_mode(&args[2], &args[3]);
    } else if args.len() == 3 && args[1] == "sort" && args[2] == "-" {
        sort_mode();
    } else if args.len() > 2 && args[1] == "parse" {
        parse_mode(&args[2..]);
    } else {
        eprintln!("{}", USAGE);
        process::exit(64);
    }
}

fn init_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("warn")?.log_to_stderr().start()
}

fn describe(name: &PersonName) -> serde_json::Value {
    json!({
        "canonical": name,
        "family": name.family(),
        "given": name.given(),
        "display": name.display_name(),
        "hash": name.hash32(),
    })
}

fn parse_mode(args: &[String]) {
    if args.len() == 1 && args[0] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let input = match line {
                Ok(input) => input,
                Err(_) => break,
            };

            let output = match PersonName::parse(&input) {
                Ok(name) => describe(&name).to_string(),
                Err(_) => String::new(),
            };

            if writeln!(io::stdout(), "{}", output).is_err() {
                break;
            }
        }
    } else {
        match PersonName::parse(&args.join(" ")) {
            Ok(name) => println!("{}", describe(&name)),
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    }
}

fn compare_mode(a: &str, b: &str) {
    let parsed = PersonName::parse(a).and_then(|a| PersonName::parse(b).map(|b| (a, b)));
    match parsed {
        Ok((a, b)) => {
            let symbol = match a.cmp(&b) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{}", symbol);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn sort_mode() {
    let reader = BufReader::new(io::stdin());
    let mut names = Vec::new();

    for line in reader.lines() {
        let input = match line {
            Ok(input) => input,
            Err(_) => break,
        };

        match PersonName::parse(&input) {
            Ok(name) => names.push(name),
            Err(err) => eprintln!("{}", err),
        }
    }

    names.sort();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for name in names {
        if writeln!(out, "{}", name).is_err() {
            break;
        }
    }
}
