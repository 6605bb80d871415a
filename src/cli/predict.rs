// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

use std::path::PathBuf;
use std::process;

use crate::cli::args::PredictArgs;
use crate::cli::logging::set_verbose;
use crate::error::PredictError;
use crate::features::parse_features;
use crate::model::RockfallModel;
use crate::results::Assessment;
use crate::{error, verbose, warn};

/// Run a rockfall risk prediction.
///
/// Prints exactly one report line to stdout on success; diagnostics go to
/// stderr and terminate the process with exit code 1.
pub fn run_prediction(args: &PredictArgs) {
    set_verbose(args.verbose);

    let row = match parse_features(&args.features) {
        Ok(row) => row,
        Err(e @ PredictError::ArgumentCountError(_)) => {
            error!("{e}. See --help for the feature order.");
            process::exit(1);
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let model_is_default = args.model.is_none();
    let model_path = args
        .model
        .clone()
        .map_or_else(RockfallModel::default_artifact_path, PathBuf::from);

    if model_is_default && args.verbose {
        warn!(
            "'model' argument is missing. Using default '--model={}'.",
            model_path.display()
        );
    }

    let model = match RockfallModel::load(&model_path) {
        Ok(m) => m,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    verbose!(
        "{} summary: {} features, link={}",
        model.name(),
        model.num_features(),
        model.link().as_str()
    );

    let raw_score = match model.predict_row(row.view()) {
        Ok(score) => score,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let assessment = Assessment::new(raw_score);
    verbose!("Risk level: {}", assessment.risk_level());

    println!("{}", assessment.report_line());
}
