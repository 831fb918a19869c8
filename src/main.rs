use clap::Parser;
use colored::*;
use flight_stats::cli::{args::Args, commands};
use flight_stats::constants::messages::ANALYSIS_FAILED;
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_outcome) => {
            // Summary and notice have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{}", ANALYSIS_FAILED.bright_red());
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
