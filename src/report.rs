use crate::driver::{RunOutcome, TimingSample};
use crate::error::BenchError;
use crate::pixel_buffer::PixelBuffer;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Consumes run outcomes once all timed runs have completed.
pub trait Reporter {
    fn report(&mut self, outcome: &RunOutcome) -> Result<(), BenchError>;

    /// Called after the last outcome.
    fn finish(&mut self) -> Result<(), BenchError> {
        Ok(())
    }
}

/// Logs one `RUNTIME of <label>: <n> ns` line per run.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, outcome: &RunOutcome) -> Result<(), BenchError> {
        info!(
            "RUNTIME of {}: {} ns",
            outcome.timing.label, outcome.timing.elapsed_nanoseconds
        );
        Ok(())
    }
}

/// Writes each output as `<label>_<threshold>.png` into a directory.
pub struct PngReporter {
    output_dir: PathBuf,
}

impl PngReporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, BenchError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self { output_dir })
    }

    /// Write the shared input as `grayscale.png` so outputs can be compared against it.
    pub fn write_input(&self, input: &PixelBuffer) -> Result<(), BenchError> {
        if input.is_empty() {
            return Ok(());
        }

        input.to_gray_image()?.save(self.output_dir.join("grayscale.png"))?;
        Ok(())
    }

    pub fn path_for(&self, outcome: &RunOutcome) -> PathBuf {
        self.output_dir.join(format!(
            "{}_{}.png",
            outcome.timing.label, outcome.params.threshold
        ))
    }
}

impl Reporter for PngReporter {
    fn report(&mut self, outcome: &RunOutcome) -> Result<(), BenchError> {
        if outcome.output.is_empty() {
            info!("Skipping empty output of {}", outcome.timing.label);
            return Ok(());
        }

        let path = self.path_for(outcome);
        outcome.output.to_gray_image()?.save(&path)?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Collects timing samples and writes them as a JSON array on `finish`.
pub struct JsonSummary<W: Write> {
    writer: W,
    samples: Vec<TimingSample>,
}

impl<W: Write> JsonSummary<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            samples: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonSummary<W> {
    fn report(&mut self, outcome: &RunOutcome) -> Result<(), BenchError> {
        self.samples.push(outcome.timing.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), BenchError> {
        serde_json::to_writer_pretty(&mut self.writer, &self.samples)?;
        writeln!(self.writer)?;
        self.samples.clear();
        Ok(())
    }
}

/// Hand every outcome to every reporter, then finish them all.
pub fn report_all(
    outcomes: &[RunOutcome],
    reporters: &mut [Box<dyn Reporter>],
) -> Result<(), BenchError> {
    for outcome in outcomes {
        for reporter in reporters.iter_mut() {
            reporter.report(outcome)?;
        }
    }

    for reporter in reporters.iter_mut() {
        reporter.finish()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::ThresholdParams;

    fn outcome(label: &str, ns: u128) -> RunOutcome {
        RunOutcome {
            timing: TimingSample::new(label, ns),
            params: ThresholdParams::new(100),
            output: PixelBuffer::from_vec(1, 2, vec![0, 255]).unwrap(),
        }
    }

    #[test]
    fn json_summary_keeps_run_order() {
        let mut summary = JsonSummary::new(Vec::new());
        summary.report(&outcome("first", 10)).unwrap();
        summary.report(&outcome("second", 20)).unwrap();
        summary.finish().unwrap();

        let written = String::from_utf8(summary.into_inner()).unwrap();
        let parsed: Vec<TimingSample> = serde_json::from_str(&written).unwrap();
        assert_eq!(
            parsed,
            vec![TimingSample::new("first", 10), TimingSample::new("second", 20)]
        );
        assert!(written.contains("\"elapsedNanoseconds\""));
    }

    #[test]
    fn png_reporter_names_files_by_label_and_threshold() {
        let dir = std::env::temp_dir().join(format!("threshold-bench-png-out-{}", std::process::id()));
        let mut reporter = PngReporter::new(&dir).unwrap();
        let run = outcome("threshold_loop", 5);

        reporter.report(&run).unwrap();
        reporter.write_input(&run.output).unwrap();
        assert!(dir.join("grayscale.png").exists());
        let path = dir.join("threshold_loop_100.png");
        assert_eq!(reporter.path_for(&run), path);

        let saved = image::open(&path).unwrap().to_luma8();
        assert_eq!(saved.as_raw(), &vec![0, 255]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
