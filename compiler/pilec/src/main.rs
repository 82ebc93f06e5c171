//! Pile CLI
//!
//! `pile run <file>` executes a program; `pile lex <file>` prints its tokens.

use pilec::commands::{lex_file, parse_run_args, run_file, RunOptions};
use pilec::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "run" => {
            let base = match RunOptions::from_env() {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            match parse_run_args(&args[2..], base) {
                Ok(run_args) => run_file(&run_args),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: pile run <file.pile> [--flat-scope] [--max-depth=<n>]");
                    1
                }
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: pile lex <file.pile>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("pile {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("Pile, a stack-based scripting language");
    println!();
    println!("Usage: pile <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.pile>      Run a Pile program");
    println!("  lex <file.pile>      Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --flat-scope         One variable table for the whole run;");
    println!("                       variables created inside functions persist");
    println!("  --max-depth=<n>      Maximum nesting of blocks and calls");
    println!();
    println!("Environment:");
    println!("  PILE_MAX_DEPTH       Default for --max-depth");
    println!("  RUST_LOG             Enable tracing output (e.g. RUST_LOG=pile_eval=debug)");
    println!();
    println!("Exit status: 0 on success, 1 on error, 2 when `break` ends the program.");
}
