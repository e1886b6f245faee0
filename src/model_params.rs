// Model parameter recovery module
//
// fast_align reports the two hyperparameters needed to re-apply a trained
// model on its stderr during training:
// - "expected target length = source length * N" -> length-ratio mean (-m)
// - "final tension: N" -> diagonal tension (-T)
// This module scans a saved copy of that stream and recovers both values so
// the aligner can be re-invoked deterministically on new data.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[path = "model_params_test.rs"]
mod model_params_test;

const MEAN_RATIO_MARKER: &str = "expected target length";
const TENSION_MARKER: &str = "final tension";

/// Scalar hyperparameters of a trained alignment model, kept as the exact
/// decimal strings from the training log so they can be handed back to
/// fast_align unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelParameters {
    pub tension: String,    // -T
    pub mean_ratio: String, // -m
}

/// Recover model parameters from a training error log.
///
/// The whole file is scanned; when a marker repeats, the last occurrence
/// wins. A marker that never appears leaves its field empty; the aligner
/// rejects the resulting argument itself, this layer does not guess.
pub fn read_error_log(path: &Path) -> io::Result<ModelParameters> {
    let reader = BufReader::new(File::open(path)?);
    let mut params = ModelParameters::default();

    for line in reader.lines() {
        let line = line?;
        if line.contains(MEAN_RATIO_MARKER) {
            if let Some(token) = line.split_whitespace().last() {
                params.mean_ratio = token.to_string();
            }
        } else if line.contains(TENSION_MARKER) {
            if let Some(token) = line.split_whitespace().last() {
                params.tension = token.to_string();
            }
        }
    }

    Ok(params)
}
