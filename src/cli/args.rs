// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Feature order (13 positional values):
    1  Rainfall                   mm/day
    2  Depth to Groundwater       m
    3  Pore Water Pressure        kPa
    4  Surface Runoff             m3/s
    5  Unit Weight                kN/m3
    6  Cohesion                   kPa
    7  Internal Friction Angle    deg
    8  Slope Angle                deg
    9  Slope Height               m
    10 Pore Water Pressure Ratio  0-1
    11 Bench Height               m
    12 Bench Width                m
    13 Inter-Ramp Angle           deg

Examples:
    rockfall-inference predict 12.5 8.2 45.0 0.3 22.1 35.0 30.0 55.0 120.0 0.4 15.0 8.0 48.0
    rockfall-inference predict --model ml/model.bin 0 0 0 0 0 0 0 0 0 0 0 0 0
    rockfall-inference predict --verbose false 12.5 8.2 45.0 0.3 22.1 35.0 30.0 55.0 120.0 0.4 15.0 8.0 48.0"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one sensor reading and print the risk report line
    Predict(PredictArgs),
}

/// Arguments for the predict command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// The 13 feature values, in the fixed order shown below
    #[arg(value_name = "FEATURE", num_args = 0.., allow_hyphen_values = true)]
    pub features: Vec<String>,

    /// Path to the model artifact [default: model.bin next to the executable]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Show verbose output on stderr
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
