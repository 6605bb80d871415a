// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

use clap::Parser;

use rockfall_inference::cli::args::{Cli, Commands};
use rockfall_inference::cli::predict::run_prediction;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(args) => run_prediction(&args),
    }
}
