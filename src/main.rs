mod cli;

use std::{
    fs,
    io::{self, BufRead},
    process,
};

use clap::Parser;
use cli::{Cli, Command};
use tally::{Builtins, Interpreter};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let builtins = if cli.bare {
        Builtins::new()
    } else {
        Builtins::standard()
    };
    let interpreter = Interpreter::from(builtins);
    if interpreter.builtins().is_empty() {
        log::debug!("starting with an empty builtins table");
    } else {
        log::debug!("loaded {} builtin(s)", interpreter.builtins().len());
    }

    let succeeded = match cli.command {
        Command::Eval { expr } => report(&interpreter, &expr.join(" ")),
        Command::Run { file } => {
            let src = match fs::read_to_string(&file) {
                Ok(src) => src,
                Err(why) => {
                    eprintln!("Failed to read {file:?}: {why}");
                    process::exit(1);
                }
            };
            src.lines()
                .fold(true, |ok, line| report(&interpreter, line) && ok)
        }
        Command::Repl => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        report(&interpreter, &line);
                    }
                    Err(why) => {
                        eprintln!("Failed to read stdin: {why}");
                        process::exit(1);
                    }
                }
            }
            true
        }
    };

    if !succeeded {
        process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn is_blank(selection: &str) -> bool {
    selection.trim().is_empty()
}

/// Renders `<value> = <source>` on success and `Error: <message>` on
/// failure. Blank selections never reach the interpreter and yield `None`.
fn render(interpreter: &Interpreter, selection: &str) -> Option<Result<String, String>> {
    if is_blank(selection) {
        log::debug!("skipping blank selection");
        return None;
    }

    Some(match interpreter.interpret(selection) {
        Ok(value) => Ok(format!("{value} = {selection}")),
        Err(why) => {
            log::debug!("{:?} error in {selection:?}", why.category());
            Err(format!("Error: {why}"))
        }
    })
}

fn report(interpreter: &Interpreter, selection: &str) -> bool {
    match render(interpreter, selection) {
        None => true,
        Some(Ok(line)) => {
            println!("{line}");
            true
        }
        Some(Err(line)) => {
            println!("{line}");
            false
        }
    }
}
