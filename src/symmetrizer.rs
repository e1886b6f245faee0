// atools child handle
//
// The symmetrizer is started once with a fixed heuristic:
//   atools -i - -j - -c <heuristic>
// and consumes two link-set lines per call (forward first, then reverse),
// producing one merged line. The heuristics themselves live in atools; this
// module only selects one and respects the pairing convention.

use crate::process::LineProcess;
use clap::ValueEnum;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::ExitStatus;

#[path = "symmetrizer_test.rs"]
mod symmetrizer_test;

/// Symmetrization heuristic handed to `atools -c`.
///
/// The non-symmetric heuristics treat the first input line of each pair as
/// the primary direction, which is why `merge` always writes forward before
/// reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    Intersect,
    Union,
    GrowDiag,
    GrowDiagFinal,
    #[default]
    GrowDiagFinalAnd,
}

impl Heuristic {
    /// The atools argument string.
    pub fn as_str(self) -> &'static str {
        match self {
            Heuristic::Intersect => "intersect",
            Heuristic::Union => "union",
            Heuristic::GrowDiag => "grow-diag",
            Heuristic::GrowDiagFinal => "grow-diag-final",
            Heuristic::GrowDiagFinalAnd => "grow-diag-final-and",
        }
    }
}

/// Handle on the long-running symmetrizer child.
pub struct Symmetrizer {
    proc: LineProcess,
}

impl Symmetrizer {
    pub fn spawn(atools: &Path, heuristic: Heuristic) -> io::Result<Symmetrizer> {
        let args: Vec<OsString> = vec![
            "-i".into(),
            "-".into(),
            "-j".into(),
            "-".into(),
            "-c".into(),
            heuristic.as_str().into(),
        ];

        Ok(Symmetrizer {
            proc: LineProcess::spawn(atools, &args)?,
        })
    }

    /// Merge one forward and one reverse link set into a single alignment.
    ///
    /// Two writes with no intervening read, one flush, one blocking read.
    /// The write order matches the pairing convention the child was started
    /// with and must never be swapped.
    pub fn merge(&mut self, fwd_links: &str, rev_links: &str) -> io::Result<String> {
        self.proc.write_line(fwd_links)?;
        self.proc.write_line(rev_links)?;
        self.proc.flush()?;
        self.proc.read_line()
    }

    /// Close the child's stdin and block until it exits.
    pub fn shutdown(self) -> io::Result<ExitStatus> {
        self.proc.shutdown()
    }
}
