use super::metrics::RunSummary;
use super::Field;
use std::{error::Error, fmt};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperimentError {
    InvalidSampleEvery,
    TooManyTicks { max: usize, actual: usize },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::InvalidSampleEvery => write!(f, "sample_every must be positive"),
            ExperimentError::TooManyTicks { max, actual } => {
                write!(f, "ticks ({actual}) exceed supported maximum ({max})")
            }
        }
    }
}

impl Error for ExperimentError {}

impl Field {
    pub const MAX_EXPERIMENT_TICKS: usize = 1_000_000;

    /// Advances the field by one tick.
    ///
    /// Cells are visited once in row-major order (x outer, y inner) and every
    /// doable occupant acts on the live field. Nothing is double-buffered: an
    /// object moved forward in scan order during this pass is visited again at
    /// its new cell, one moved backward is not visited at all.
    pub fn on_tick(&mut self) {
        for idx in 0..self.cells.len() {
            if !self.cells[idx].obj_type().is_doable() {
                continue;
            }
            let actor = self.cells[idx].clone();
            let at = self.point_of(idx);
            if let Some(doable) = actor.as_doable() {
                doable.act(self, at);
            }
        }
        self.tick += 1;
        debug!(tick = self.tick, "field advanced");
    }

    pub fn run_experiment(&mut self, ticks: usize, sample_every: usize) -> RunSummary {
        self.try_run_experiment(ticks, sample_every)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Runs `ticks` ticks, sampling metrics every `sample_every` ticks and after the last one.
    pub fn try_run_experiment(
        &mut self,
        ticks: usize,
        sample_every: usize,
    ) -> Result<RunSummary, ExperimentError> {
        self.try_run_experiment_with_observer(ticks, sample_every, |_| {})
    }

    /// Like `try_run_experiment`, but hands the field to `observer` after every tick.
    pub fn try_run_experiment_with_observer<F>(
        &mut self,
        ticks: usize,
        sample_every: usize,
        mut observer: F,
    ) -> Result<RunSummary, ExperimentError>
    where
        F: FnMut(&Field),
    {
        if sample_every == 0 {
            return Err(ExperimentError::InvalidSampleEvery);
        }
        if ticks > Self::MAX_EXPERIMENT_TICKS {
            return Err(ExperimentError::TooManyTicks {
                max: Self::MAX_EXPERIMENT_TICKS,
                actual: ticks,
            });
        }

        info!(ticks, sample_every, size = self.size, "starting experiment");
        let estimated_samples = if ticks == 0 {
            0
        } else {
            ((ticks - 1) / sample_every) + 1
        };
        let mut samples = Vec::with_capacity(estimated_samples);
        for step in 1..=ticks {
            self.on_tick();
            observer(self);
            if step % sample_every == 0 || step == ticks {
                samples.push(self.collect_tick_metrics());
            }
        }
        let final_census = self.census();
        info!(
            tick = self.tick,
            phytoplankton = final_census.phytoplankton,
            zooplankton = final_census.zooplankton,
            "experiment finished"
        );
        Ok(RunSummary {
            schema_version: 1,
            ticks,
            sample_every,
            final_census,
            samples,
        })
    }
}
