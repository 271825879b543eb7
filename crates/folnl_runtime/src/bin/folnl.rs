//! folnl CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use folnl_runtime::{PracticeMode, Repl, Reply, RuntimeConfig, init_logging};
use folnl_translator::{Direction, Translator};
use tracing::debug;

/// What the invocation asks for.
#[derive(Debug)]
enum Command {
    Translate {
        direction: Direction,
        text: Option<String>,
        file: Option<PathBuf>,
    },
    Repl,
    Practice {
        mode: PracticeMode,
    },
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    command: Option<Command>,
    show_help: bool,
    show_version: bool,
    quiet: bool,
    seed: Option<u64>,
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = true,
            "--seed" => {
                let value = take_value(args, &mut i, "--seed")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            "--log" => {
                config.log_filter = Some(take_value(args, &mut i, "--log")?.to_string());
            }
            "-f" | "--file" => {
                let value = take_value(args, &mut i, "--file")?;
                match &mut config.command {
                    Some(Command::Translate { file, .. }) => *file = Some(PathBuf::from(value)),
                    _ => return Err("--file is only valid after nl2fol or fol2nl".into()),
                }
            }
            "--mode" => {
                let value = take_value(args, &mut i, "--mode")?;
                match &mut config.command {
                    Some(Command::Practice { mode }) => *mode = value.parse()?,
                    _ => return Err("--mode is only valid after practice".into()),
                }
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            word => match &mut config.command {
                None => {
                    config.command = Some(match word {
                        "repl" => Command::Repl,
                        "practice" => Command::Practice {
                            mode: PracticeMode::default(),
                        },
                        other => Command::Translate {
                            direction: other
                                .parse()
                                .map_err(|_| format!("unknown command: {other}"))?,
                            text: None,
                            file: None,
                        },
                    });
                }
                Some(Command::Translate { text: text @ None, .. }) => {
                    *text = Some(word.to_string());
                }
                Some(_) => return Err(format!("unexpected argument: {word}").into()),
            },
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = parse_args(&args)?;

    if cli.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }
    if cli.show_version {
        println!("folnl {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut runtime = if cli.quiet {
        RuntimeConfig::quiet()
    } else {
        RuntimeConfig::default()
    };
    if let Some(seed) = cli.seed {
        runtime = runtime.with_practice_seed(seed);
    }
    if let Some(filter) = cli.log_filter {
        runtime = runtime.with_log_filter(filter);
    }
    init_logging(&runtime);
    debug!(command = ?cli.command, "starting");

    match cli.command {
        None => {
            print_help();
            Ok(ExitCode::FAILURE)
        }
        Some(Command::Translate {
            direction,
            text,
            file,
        }) => {
            let input = read_input(text, file)?;
            match Translator::standard().translate(direction, input.trim()) {
                Ok(output) => {
                    println!("{output}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Some(Command::Repl) => {
            Repl::new(runtime)?.run()?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Practice { mode }) => {
            let mut repl = Repl::new(runtime)?;
            if let Reply::Text(text) = repl.eval(&format!(":practice {mode}"))? {
                println!("{text}");
            }
            repl.run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Takes input from the argument, then the file, then stdin.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> io::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(path);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_help() {
    println!(
        "\x1b[1mfolnl\x1b[0m - Translate between natural language and first-order logic

\x1b[1mUSAGE:\x1b[0m
    folnl [OPTIONS] <COMMAND>

\x1b[1mCOMMANDS:\x1b[0m
    nl2fol [TEXT] [-f FILE]        Translate an English statement into FOL
    fol2nl [FORMULA] [-f FILE]     Translate a FOL formula into English
    repl                           Start the interactive translator
    practice [--mode MODE]         Start the REPL with a block exercise
                                   (MODE: nl2fol, fol2nl, mixed)

    Without TEXT or FILE, input is read from stdin.

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -q, --quiet        Do not print the REPL banner
    -f, --file FILE    Read input from FILE
    --seed N           Fix the practice exercise seed
    --log FILTER       Log filter when FOLNL_LOG is unset (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    folnl nl2fol \"Every human is mortal\"
    folnl fol2nl \"∀x(Human(x) → Mortal(x))\"
    echo \"Socrates is human.\" | folnl nl2fol
    folnl practice --mode fol2nl --seed 7"
    );
}
