//! twocalc CLI: generates, runs and converts expressions.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage, input or byte-decode error
//! - 2: Codec error
//! - 3: Machine error
//! - 4: Direct evaluation and bytecode execution disagree

mod commands;
mod config;
mod logger;

use std::process;

fn main() {
    let mut args: Vec<String> = std::env::args().collect();

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");
    logger::init(verbose);

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "generate" => commands::generate(&args[2..]),
        "run" => commands::run(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
        "encode" => commands::encode(&args[2..]),
        "decode" => commands::decode(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: twocalc [--verbose] <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  generate --seed N [--depth D] [-o out.tcb]        Generate and evaluate an expression");
    eprintln!("  run <prog.tcb> [--decompile]                      Run a bytecode program");
    eprintln!("  disassemble <prog.tcb>                            Print a bytecode program");
    eprintln!("  encode --seed N [--depth D] [--max-depth M] [--legacy] -o out.tcf");
    eprintln!("                                                    Encode a generated expression");
    eprintln!("  decode <in.tcf> [--max-depth M] [--resilient]     Decode and evaluate a flat buffer");
    eprintln!();
    eprintln!("Set TWOCALC_LOG=error|warn|info|debug|trace to control diagnostics.");
}
