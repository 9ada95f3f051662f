//! Equatable expansion CLI.

use equatec::commands::{check_files, expand_files, explain_error, lex_file, parse_file};
use equatec::{init_tracing, parse_expand_options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "expand" | "check" => {
            let (options, files) = match parse_expand_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            if files.is_empty() {
                eprintln!("Usage: equatec {command} <file.swift>... [options]");
                eprintln!();
                print_expand_options();
                std::process::exit(1);
            }
            if command == "expand" {
                expand_files(&files, &options);
            } else {
                check_files(&files, &options);
            }
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: equatec parse <file.swift>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: equatec lex <file.swift>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("equatec {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: equatec explain <ERROR_CODE>");
                eprintln!("Example: equatec explain E2001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
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
    println!("equatec: synthesize Equatable conformances for @Equatable structs");
    println!();
    println!("Usage: equatec <command> [options]");
    println!();
    println!("Commands:");
    println!("  expand <files...>    Print each file with its extensions inserted");
    println!("  check <files...>     Report diagnostics without printing output");
    println!("  parse <file>         Show the parsed declaration tree");
    println!("  lex <file>           Show the token stream");
    println!("  explain <code>       Explain an error code");
    println!("  help                 Show this message");
    println!("  version              Show version information");
    println!();
    print_expand_options();
    println!();
    println!("Environment:");
    println!("  EQUATE_LOG           Tracing filter (e.g. equate_expand=debug)");
    println!("  EQUATE_LOG_TREE=1    Print spans as an indented tree");
}

fn print_expand_options() {
    println!("Options for expand and check:");
    println!("  --emit=<mode>            source (default) or extensions");
    println!("  --color=<mode>           auto (default), always, or never");
    println!("  --wrapper=<name>         Also exclude members with @<name>");
    println!("  --no-default-wrappers    Clear the built-in wrapper list");
    println!("  --skip-marker=<name>     Per-member opt-out attribute (default SkipEquatable)");
    println!("  --view-marker=<name>     Supertype that excludes `body` (default View)");
    println!("  --no-view-marker         Never exclude `body`");
    println!("  --alias=<name>           Accept @<name> as @Equatable");
    println!("  --no-parallel            Expand files one at a time");
}
