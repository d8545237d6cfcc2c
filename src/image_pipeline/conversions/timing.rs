use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, info_span};

/// Stages of a field to TIFF conversion, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    DecodeField,
    RemovePhaseRamp,
    ScaleModulus,
    EncodeColors,
    EncodeTiff,
}

impl PipelineStep {
    pub fn name(self) -> &'static str {
        match self {
            PipelineStep::DecodeField => "decode_field",
            PipelineStep::RemovePhaseRamp => "remove_phase_ramp",
            PipelineStep::ScaleModulus => "scale_modulus",
            PipelineStep::EncodeColors => "encode_colors",
            PipelineStep::EncodeTiff => "encode_tiff",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub step: PipelineStep,
    pub duration: Duration,
}

/// Wall-clock time spent in each stage of one conversion.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` inside a span named after `step` and records how long it took.
    pub fn time<T>(&mut self, step: PipelineStep, f: impl FnOnce() -> T) -> T {
        let _span = info_span!("pipeline_step", step = step.name()).entered();
        let start = Instant::now();
        let out = f();
        self.steps.push(StepTiming {
            step,
            duration: start.elapsed(),
        });
        out
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, step: PipelineStep) -> Option<Duration> {
        self.steps
            .iter()
            .find(|s| s.step == step)
            .map(|s| s.duration)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for s in &self.steps {
            let share = if total > Duration::ZERO {
                s.duration.as_secs_f64() / total.as_secs_f64() * 100.0
            } else {
                0.0
            };
            info!(
                step = s.step.name(),
                ms = s.duration.as_secs_f64() * 1000.0,
                percent = share,
                "Step timing"
            );
        }
        info!(ms = total.as_secs_f64() * 1000.0, "Conversion total");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_records_steps_in_order() {
        let mut timings = PipelineTimings::new();
        let width = timings.time(PipelineStep::DecodeField, || 640);
        let failed: Result<(), &str> = timings.time(PipelineStep::EncodeColors, || Err("bad range"));

        assert_eq!(width, 640);
        assert!(failed.is_err());
        let order: Vec<_> = timings.steps().iter().map(|s| s.step).collect();
        assert_eq!(order, vec![PipelineStep::DecodeField, PipelineStep::EncodeColors]);
        assert!(timings.get_step(PipelineStep::EncodeColors).is_some());
        assert!(timings.get_step(PipelineStep::EncodeTiff).is_none());
    }

    #[test]
    fn test_total_is_sum_of_steps() {
        let mut timings = PipelineTimings::new();
        assert_eq!(timings.total_duration(), Duration::ZERO);
        timings.log_summary();

        timings.time(PipelineStep::ScaleModulus, || std::thread::sleep(Duration::from_millis(2)));
        timings.time(PipelineStep::EncodeTiff, || ());

        let sum: Duration = timings.steps().iter().map(|s| s.duration).sum();
        assert_eq!(timings.total_duration(), sum);
        assert!(timings.get_step(PipelineStep::ScaleModulus).unwrap() >= Duration::from_millis(2));
        assert_eq!(PipelineStep::ScaleModulus.to_string(), "scale_modulus");
    }
}
