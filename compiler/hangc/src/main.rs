//! hangover: hanging-indent checker CLI.

use hangc::commands::{explain_rule, parse_check_options, print_tokens, run_check};
use hangc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let options = match parse_check_options(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    eprintln!("Usage: hangover check [PATH...] [options]");
                    eprintln!("Run `hangover help` for the list of options.");
                    std::process::exit(2);
                }
            };
            let status = run_check(&options);
            std::process::exit(status.exit_code());
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: hangover explain <CODE>");
                eprintln!("Example: hangover explain FHG005");
                std::process::exit(1);
            }
            explain_rule(&args[2]);
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: hangover tokens <file.py>");
                std::process::exit(1);
            }
            print_tokens(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("hangover {}", env!("CARGO_PKG_VERSION"));
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
    println!("hangover: hanging-indent checker");
    println!();
    println!("Usage: hangover <command> [options]");
    println!();
    println!("Commands:");
    println!("  check [PATH...]      Check files and directories (default: .)");
    println!("  explain <CODE>       Show documentation for a rule code");
    println!("  tokens <file.py>     Print the token stream of a file");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --select=CODES       Only report these rule codes or prefixes");
    println!("  --ignore=CODES       Never report these rule codes or prefixes");
    println!("  --indent-width=N     Width of one indentation step (default: 4)");
    println!("  --format=FORMAT      Output format: text (default), json");
    println!("  --no-parallel        Analyze files one at a time");
    println!();
    println!("Exit status:");
    println!("  0  no issues found");
    println!("  1  issues found");
    println!("  2  a file could not be read or analyzed, or bad arguments");
    println!();
    println!("Environment:");
    println!("  HANG_LOG             Log filter directives, e.g. HANG_LOG=hang_check=trace");
    println!();
    println!("Examples:");
    println!("  hangover check src/");
    println!("  hangover check app.py --select=FHG00 --ignore=FHG007");
    println!("  hangover check --format=json . > report.json");
    println!("  hangover explain FHG005");
}
