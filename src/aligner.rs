// fast_align child handle
//
// One fast_align process per direction, re-invoked with the hyperparameters
// recovered from its training log:
//   fast_align -i - -d -s -T <tension> -m <mean_ratio> -f <model> [-r]
// Input is one sentence pair (`source tokens ||| target tokens`) per line;
// output is one four-field line per pair:
//   source tokens ||| target tokens ||| links ||| score

use crate::model_params::ModelParameters;
use crate::process::LineProcess;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::ExitStatus;

#[path = "aligner_test.rs"]
mod aligner_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Handle on one long-running aligner child.
pub struct AlignerProcess {
    proc: LineProcess,
}

impl AlignerProcess {
    /// Spawn one aligner child for `direction`, conditioned on the trained
    /// model and its recovered hyperparameters.
    ///
    /// Empty parameter strings are passed through as empty arguments; a log
    /// that never reported a value is fast_align's to reject, not ours to
    /// guess.
    pub fn spawn(
        fast_align: &Path,
        direction: Direction,
        model: &Path,
        params: &ModelParameters,
    ) -> io::Result<AlignerProcess> {
        let mut args: Vec<OsString> = vec![
            "-i".into(),
            "-".into(),
            "-d".into(),
            "-s".into(),
            "-T".into(),
            params.tension.clone().into(),
            "-m".into(),
            params.mean_ratio.clone().into(),
            "-f".into(),
            model.as_os_str().to_owned(),
        ];
        if direction == Direction::Reverse {
            args.push("-r".into());
        }

        Ok(AlignerProcess {
            proc: LineProcess::spawn(fast_align, &args)?,
        })
    }

    /// Submit one sentence pair and block for its directional alignment line.
    ///
    /// The protocol is lock-step by assumption, not verification: exactly one
    /// output line per input line, in order. A child that ever answers with
    /// zero or two lines desynchronizes the pipeline silently.
    pub fn submit(&mut self, sentence_pair: &str) -> io::Result<String> {
        self.proc.round_trip(sentence_pair)
    }

    /// Close the child's stdin and block until it exits.
    pub fn shutdown(self) -> io::Result<ExitStatus> {
        self.proc.shutdown()
    }
}

/// Extract the link-set field (index 2) from a four-field aligner output
/// line. None when the line has fewer than three fields.
pub fn link_set(directional: &str) -> Option<&str> {
    directional.split("|||").nth(2).map(str::trim)
}
