use crate::error::BenchError;
use crate::image_source::ImageSource;
use crate::pixel_buffer::PixelBuffer;
use crate::stopwatch::Stopwatch;
use crate::strategies::{
    IndexedLoop, PointerArithmeticLoop, ReferenceStrategy, RowPointerLoop, ThresholdParams,
    ThresholdStrategy,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Elapsed time of one strategy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSample {
    pub label: String,
    pub elapsed_nanoseconds: u128,
}

impl TimingSample {
    pub fn new(label: impl Into<String>, elapsed_nanoseconds: u128) -> Self {
        Self {
            label: label.into(),
            elapsed_nanoseconds,
        }
    }
}

/// Result of a single run, handed to the reporters.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub timing: TimingSample,
    pub params: ThresholdParams,
    pub output: PixelBuffer,
}

/// One configured run: what to call it, what to run, and with which cut point.
pub struct StrategyRun {
    pub label: String,
    pub strategy: Box<dyn ThresholdStrategy>,
    pub params: ThresholdParams,
}

/// Runs a fixed sequence of strategies against one shared input.
#[derive(Default)]
pub struct BenchmarkDriver {
    /// Runs in registration order
    runs: Vec<StrategyRun>,
}

impl BenchmarkDriver {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// The four strategies with the thresholds the harness has always used.
    pub fn standard() -> Self {
        let mut driver = Self::new();
        driver.add("threshold_cv", ReferenceStrategy, ThresholdParams::new(50));
        driver.add("threshold_loop", IndexedLoop, ThresholdParams::new(200));
        driver.add("threshold_loop_ptr", RowPointerLoop, ThresholdParams::new(100));
        driver.add(
            "threshold_loop_ptr2",
            PointerArithmeticLoop,
            ThresholdParams::new(120),
        );
        driver
    }

    pub fn add<T: ThresholdStrategy + 'static>(
        &mut self,
        label: &str,
        strategy: T,
        params: ThresholdParams,
    ) {
        self.runs.push(StrategyRun {
            label: label.to_string(),
            strategy: Box::new(strategy),
            params,
        });
    }

    pub fn runs(&self) -> &[StrategyRun] {
        &self.runs
    }

    /// Runs whose strategy honors a different threshold than the one configured,
    /// as `(label, asked, honored)`.
    pub fn overrides(&self) -> Vec<(&str, ThresholdParams, ThresholdParams)> {
        self.runs
            .iter()
            .filter_map(|run| {
                let honored = run.strategy.effective_params(run.params);
                (honored != run.params).then_some((run.label.as_str(), run.params, honored))
            })
            .collect()
    }

    /// Run every strategy once, in order, each into its own output buffer.
    pub fn run(&self, input: &PixelBuffer) -> Vec<RunOutcome> {
        let mut outcomes = Vec::with_capacity(self.runs.len());

        // report overrides up front so no logging lands inside a timed section
        for (label, asked, honored) in self.overrides() {
            warn!(
                "{} was asked for threshold {} but cuts at {}",
                label, asked.threshold, honored.threshold
            );
        }

        for (index, run) in self.runs.iter().enumerate() {
            debug!(
                "Executing run {}: {} ({}) at threshold {}",
                index + 1,
                run.label,
                run.strategy.name(),
                run.params.threshold
            );

            let watch = Stopwatch::start();
            let output = run.strategy.apply(input, run.params);
            let elapsed = watch.elapsed_ns();

            assert!(
                output.rows() == input.rows() && output.cols() == input.cols(),
                "{} produced a {}x{} output for a {}x{} input",
                run.strategy.name(),
                output.rows(),
                output.cols(),
                input.rows(),
                input.cols()
            );

            outcomes.push(RunOutcome {
                timing: TimingSample::new(run.label.as_str(), elapsed),
                params: run.params,
                output,
            });
        }

        outcomes
    }

    /// Acquire the input from `source`, then run. Nothing runs if the source fails.
    ///
    /// The input is returned alongside the outcomes for verification and reporting.
    pub fn run_from(
        &self,
        source: &dyn ImageSource,
    ) -> Result<(PixelBuffer, Vec<RunOutcome>), BenchError> {
        let input = source.acquire()?;
        debug!(
            "Acquired {}x{} input (contiguous: {})",
            input.rows(),
            input.cols(),
            input.is_contiguous()
        );

        let outcomes = self.run(&input);
        Ok((input, outcomes))
    }
}
