use clap::Parser;
use climate_explorer::cli::{args::Args, commands};
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
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Climate Explorer - Country Temperature Series Tool");
    println!("==================================================");
    println!();
    println!("Explore country-level average temperature data from CSV files:");
    println!("per-year trends with smoothing and normalization, country rankings,");
    println!("and dataset summaries.");
    println!();
    println!("USAGE:");
    println!("    climate-explorer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    trends      Show per-year temperature trends for selected countries");
    println!("    rank        Rank countries by average temperature over a year window");
    println!("    info        Summarize a temperature CSV file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Show trends for the default countries:");
    println!("    climate-explorer trends --input data/temperatures.csv");
    println!();
    println!("    # Compare specific countries over a window, normalized:");
    println!("    climate-explorer trends --input data/temperatures.csv \\");
    println!("                            --countries Kenya,India --start-year 1950 --normalize");
    println!();
    println!("    # Rank every country in the dataset as JSON:");
    println!("    climate-explorer rank --input data/temperatures.csv --format json");
    println!();
    println!("    # Get help for specific commands:");
    println!("    climate-explorer trends --help");
    println!("    climate-explorer rank --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    climate-explorer <COMMAND> --help");
}
