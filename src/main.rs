use bulletin_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Bulletin Processor - Pigeon Race Result Parser");
    println!("==============================================");
    println!();
    println!("Parse semi-structured pigeon racing result bulletins (Dutch/French");
    println!("timing-software TXT exports) into structured race and result records.");
    println!();
    println!("USAGE:");
    println!("    bulletin-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse bulletin files into race and result records (main command)");
    println!("    rings       Inspect a ring roster file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a single bulletin:");
    println!("    bulletin-processor parse uitslag-mettet.txt");
    println!();
    println!("    # Parse a season of bulletins and export JSON:");
    println!("    bulletin-processor parse 'uploads/*.txt' --output-file season.json");
    println!();
    println!("    # Report which results belong to your own birds:");
    println!("    bulletin-processor parse uitslag.txt --rings-file my-rings.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bulletin-processor <COMMAND> --help");
}
