//! `pseudo`: run and check pseudo-code programs from the command line.

mod commands;

use commands::{check_file, parse_run_options, run_file, suggest_file};

fn main() {
    pseudoc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: pseudo run <file> [options]");
                eprintln!();
                print_run_options();
                std::process::exit(1);
            }
            let options = match parse_run_options(&args[3..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!();
                    print_run_options();
                    std::process::exit(1);
                }
            };
            run_file(&args[2], options);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: pseudo check <file> [--json]");
                std::process::exit(1);
            }
            let json = args.iter().skip(3).any(|arg| arg == "--json");
            check_file(&args[2], json);
        }
        "suggest" => {
            if args.len() < 3 {
                eprintln!("Usage: pseudo suggest <file>");
                std::process::exit(1);
            }
            suggest_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("pseudo {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Pseudo-code engine");
    println!();
    println!("Usage: pseudo <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Check and run a program");
    println!("  check <file>     Report syntax problems without running");
    println!("  suggest <file>   Print learning suggestions for a program");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    print_run_options();
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=pseudo_eval=debug) to trace the engine.");
}

fn print_run_options() {
    println!("Run options:");
    println!("  --input <file>      Read `input` lines from a file (default: stdin)");
    println!("  --steps <n|none>    Step budget (default: 1000000)");
    println!("  --timeout-ms <n>    Wall-clock budget in milliseconds");
    println!("  --json              Print the outcome as JSON");
}
