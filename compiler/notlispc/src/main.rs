//! not-lisp CLI

use std::io::IsTerminal;

use notlisp_eval::Interpreter;
use notlispc::commands::{parse_file, repl, run_file, CommandError, ReplOptions};

fn main() {
    notlispc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);
    let color = use_color();

    let result = match command {
        "repl" => {
            let stdin = std::io::stdin();
            let options = ReplOptions {
                banner: stdin.is_terminal(),
                color,
            };
            repl(stdin.lock(), &mut Interpreter::new(), options)
        }
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: notlisp run <file>");
                std::process::exit(1);
            };
            run_file(path, &mut Interpreter::new(), color)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: notlisp parse <file|->");
                std::process::exit(1);
            };
            parse_file(path, color).map(|dump| print!("{dump}"))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("not-lisp {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        fail(&err);
    }
}

fn fail(err: &CommandError) -> ! {
    if let Some(report) = err.report() {
        eprint!("{report}");
    }
    eprintln!("error: {err}");
    std::process::exit(1);
}

/// Color reports only for an interactive terminal, honoring `NO_COLOR`.
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn print_usage() {
    println!("not-lisp, a small Lisp-like expression language");
    println!();
    println!("Usage: notlisp [command]");
    println!();
    println!("Commands:");
    println!("  repl            Start the interactive prompt (default)");
    println!("  run <file>      Evaluate each non-empty line of a file");
    println!("  parse <file|->  Print the parse tree of a file or stdin");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=notlisp_eval=trace) to trace evaluation.");
}
