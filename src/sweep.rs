use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use chrono::{NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::angles::incidence_angle;
use crate::error::{PlantError, PlantResult};
use crate::light::LightSource;
use crate::mount::ModuleMount;
use crate::plant::Plant;

const SOLAR_NOON_SECS: f64 = 12.0 * 3600.0;
const HALF_DAY_SECS: f64 = 6.0 * 3600.0;
// Absorbs the drift of a source advanced by repeated `move_by`.
const ANGLE_SLACK: f64 = 1e-9;
/// Upper bound on the number of samples one sweep may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Stepped traversal of the light source angle, radians, end inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: -FRAC_PI_2,
            end: FRAC_PI_2,
            step: PI / 16.0,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> PlantResult<()> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err(PlantError::InvalidSweep(format!(
                "bounds and step must be finite: start={}, end={}, step={}",
                self.start, self.end, self.step
            )));
        }
        if self.step <= 0.0 {
            return Err(PlantError::InvalidSweep(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.end < self.start {
            return Err(PlantError::InvalidSweep(format!(
                "end {} lies before start {}",
                self.end, self.start
            )));
        }
        let steps = ((self.end - self.start) / self.step + ANGLE_SLACK).floor();
        if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
            return Err(PlantError::InvalidSweep(format!(
                "step {} over [{}, {}] exceeds {} samples",
                self.step, self.start, self.end, MAX_SAMPLES
            )));
        }
        Ok(())
    }

    pub fn sample_count(&self) -> PlantResult<usize> {
        self.validate()?;
        let steps = ((self.end - self.start) / self.step + ANGLE_SLACK).floor();
        Ok(steps as usize + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    pub source_angle: f64,
    pub probe_power: f64,
    pub plant_output: f64,
    pub solar_time: Option<NaiveTime>,
}

impl fmt::Display for SweepSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}; {:.2}; {:.2}",
            self.source_angle, self.probe_power, self.plant_output
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepStats {
    pub mean: f64,
    pub std_dev: f64,
    pub peak: f64,
    /// Trapezoidal integral of plant output over source angle, W·rad.
    pub energy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMetadata {
    pub generated_at: String,
    pub sample_count: usize,
    pub plant_peak_power: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub config: SweepConfig,
    pub samples: Vec<SweepSample>,
    pub stats: SweepStats,
    pub metadata: SweepMetadata,
}

impl SweepReport {
    pub fn outputs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.plant_output).collect()
    }
}

/// Maps `[-π/2, π/2]` onto a 06:00..18:00 solar day.
pub fn solar_time(source_angle: f64) -> Option<NaiveTime> {
    if !(-FRAC_PI_2 - ANGLE_SLACK..=FRAC_PI_2 + ANGLE_SLACK).contains(&source_angle) {
        return None;
    }
    let secs = (SOLAR_NOON_SECS + source_angle / FRAC_PI_2 * HALF_DAY_SECS)
        .round()
        .clamp(SOLAR_NOON_SECS - HALF_DAY_SECS, SOLAR_NOON_SECS + HALF_DAY_SECS);
    NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0)
}

pub fn summarize(outputs: &[f64], step: f64) -> SweepStats {
    if outputs.is_empty() {
        return SweepStats {
            mean: 0.0,
            std_dev: 0.0,
            peak: 0.0,
            energy: 0.0,
        };
    }
    let n = outputs.len() as f64;
    let mean = outputs.iter().sum::<f64>() / n;
    let variance = outputs.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let peak = outputs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let energy = outputs
        .windows(2)
        .map(|w| 0.5 * (w[0] + w[1]) * step)
        .sum::<f64>();
    SweepStats {
        mean,
        std_dev: variance.sqrt(),
        peak,
        energy,
    }
}

/// Samples `plant` and the stand-alone `probe` mount across the sweep.
pub fn run_sweep(
    plant: &Plant,
    probe: &ModuleMount,
    config: &SweepConfig,
) -> PlantResult<SweepReport> {
    let n_samples = config.sample_count()?;
    let mut source = LightSource::new();
    source.set_angle(config.start);

    let mut samples = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let angle = source.angle();
        let probe_power = probe.current_power(incidence_angle(probe.orientation(), angle));
        let plant_output = plant.current_output(&source);
        trace!(angle, probe_power, plant_output, "sweep sample");
        samples.push(SweepSample {
            source_angle: angle,
            probe_power,
            plant_output,
            solar_time: solar_time(angle),
        });
        source.move_by(config.step);
    }

    let outputs: Vec<f64> = samples.iter().map(|s| s.plant_output).collect();
    let stats = summarize(&outputs, config.step);
    info!(
        samples = samples.len(),
        mean = stats.mean,
        std_dev = stats.std_dev,
        peak = stats.peak,
        "sweep complete"
    );

    Ok(SweepReport {
        config: *config,
        metadata: SweepMetadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            sample_count: samples.len(),
            plant_peak_power: plant.total_peak_power(),
        },
        samples,
        stats,
    })
}
