// force-align/src/pipeline.rs
//
// Forced-alignment pipeline
// Composes one forward aligner, one reverse aligner, and one symmetrizer
// and drives the per-sentence-pair protocol:
//   pair -> forward links; pair -> reverse links; (forward, reverse) -> merged
// Processing is strictly serial: output line n corresponds to input line n.

use crate::aligner::{self, AlignerProcess, Direction};
use crate::model_params;
use crate::symmetrizer::{Heuristic, Symmetrizer};
use anyhow::Result;
use std::path::PathBuf;

/// Everything needed to bring the three children up.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub fwd_model: PathBuf,
    pub fwd_err: PathBuf,
    pub rev_model: PathBuf,
    pub rev_err: PathBuf,
    pub heuristic: Heuristic,
    pub fast_align: PathBuf,
    pub atools: PathBuf,
}

/// The three child handles under one owner.
///
/// `align` may only be called between construction and `close`; `close`
/// consumes the pipeline, so a closed pipeline cannot be reused or closed
/// twice.
pub struct AlignmentPipeline {
    forward: AlignerProcess,
    reverse: AlignerProcess,
    symmetrizer: Symmetrizer,
}

impl AlignmentPipeline {
    /// Recover both models' hyperparameters from their training logs and
    /// spawn the three children. Any failure here is fatal; nothing is
    /// retried.
    pub fn new(config: &PipelineConfig) -> Result<AlignmentPipeline> {
        let fwd_params = model_params::read_error_log(&config.fwd_err).map_err(|e| {
            anyhow::anyhow!("Error reading forward error log {}: {}", config.fwd_err.display(), e)
        })?;
        let rev_params = model_params::read_error_log(&config.rev_err).map_err(|e| {
            anyhow::anyhow!("Error reading reverse error log {}: {}", config.rev_err.display(), e)
        })?;

        log::debug!(
            "Forward model: tension={:?} mean_ratio={:?}",
            fwd_params.tension,
            fwd_params.mean_ratio
        );
        log::debug!(
            "Reverse model: tension={:?} mean_ratio={:?}",
            rev_params.tension,
            rev_params.mean_ratio
        );

        let forward = AlignerProcess::spawn(
            &config.fast_align,
            Direction::Forward,
            &config.fwd_model,
            &fwd_params,
        )
        .map_err(|e| {
            anyhow::anyhow!("Error spawning forward aligner {}: {}", config.fast_align.display(), e)
        })?;
        let reverse = AlignerProcess::spawn(
            &config.fast_align,
            Direction::Reverse,
            &config.rev_model,
            &rev_params,
        )
        .map_err(|e| {
            anyhow::anyhow!("Error spawning reverse aligner {}: {}", config.fast_align.display(), e)
        })?;
        let symmetrizer = Symmetrizer::spawn(&config.atools, config.heuristic).map_err(|e| {
            anyhow::anyhow!("Error spawning symmetrizer {}: {}", config.atools.display(), e)
        })?;

        log::info!(
            "Aligning with heuristic {} (forward model {}, reverse model {})",
            config.heuristic.as_str(),
            config.fwd_model.display(),
            config.rev_model.display()
        );

        Ok(AlignmentPipeline {
            forward,
            reverse,
            symmetrizer,
        })
    }

    /// Align one sentence pair (`source tokens ||| target tokens`) and
    /// return the merged link set, trimmed.
    ///
    /// Forward links are always handed to the symmetrizer before reverse
    /// links; the asymmetric heuristics depend on that order.
    pub fn align(&mut self, sentence_pair: &str) -> Result<String> {
        let fwd_line = self
            .forward
            .submit(sentence_pair)
            .map_err(|e| anyhow::anyhow!("Error from forward aligner: {}", e))?;
        let fwd_links = aligner::link_set(&fwd_line)
            .ok_or_else(|| anyhow::anyhow!("Malformed forward aligner output: {:?}", fwd_line))?;

        let rev_line = self
            .reverse
            .submit(sentence_pair)
            .map_err(|e| anyhow::anyhow!("Error from reverse aligner: {}", e))?;
        let rev_links = aligner::link_set(&rev_line)
            .ok_or_else(|| anyhow::anyhow!("Malformed reverse aligner output: {:?}", rev_line))?;

        let merged = self
            .symmetrizer
            .merge(fwd_links, rev_links)
            .map_err(|e| anyhow::anyhow!("Error from symmetrizer: {}", e))?;

        Ok(merged.trim().to_string())
    }

    /// Shut the three children down in spawn order, blocking on each exit.
    pub fn close(self) -> Result<()> {
        let status = self
            .forward
            .shutdown()
            .map_err(|e| anyhow::anyhow!("Error shutting down forward aligner: {}", e))?;
        log::debug!("Forward aligner exited with {}", status);

        let status = self
            .reverse
            .shutdown()
            .map_err(|e| anyhow::anyhow!("Error shutting down reverse aligner: {}", e))?;
        log::debug!("Reverse aligner exited with {}", status);

        let status = self
            .symmetrizer
            .shutdown()
            .map_err(|e| anyhow::anyhow!("Error shutting down symmetrizer: {}", e))?;
        log::debug!("Symmetrizer exited with {}", status);

        Ok(())
    }
}
