//! Tap detection on raw accelerometer samples
//!
//! An impact shows up as a sharp change between two consecutive samples.
//! The detector compares each sample with the previous one and reports the
//! axis that moved the most once that change crosses the threshold.

use crate::config::TapConfig;

/// Accelerometer axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Sign of the acceleration change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Positive,
    Negative,
}

/// A detected impact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tap {
    pub axis: Axis,
    pub direction: Direction,
}

/// Sample units per g, independent of the sensor's measurement range
pub const UNITS_PER_G: f32 = 256.0;

/// One accelerometer reading in 1/256 g units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Sample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Build a sample from accelerations in g, saturating at the i16 limits
    pub fn from_g(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: (x * UNITS_PER_G) as i16,
            y: (y * UNITS_PER_G) as i16,
            z: (z * UNITS_PER_G) as i16,
        }
    }
}

/// Turns a stream of samples into discrete taps
pub struct TapDetector {
    config: TapConfig,
    /// Last sample seen
    previous: Option<Sample>,
    /// Samples left before the next tap may fire
    holdoff: u8,
}

impl TapDetector {
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            previous: None,
            holdoff: 0,
        }
    }

    /// Forget history, the next sample only primes the detector
    pub fn reset(&mut self) {
        self.previous = None;
        self.holdoff = 0;
    }

    /// Feed one sample, returns a tap if it completes an impact
    pub fn update(&mut self, sample: Sample) -> Option<Tap> {
        let previous = self.previous.replace(sample)?;

        if self.holdoff > 0 {
            self.holdoff -= 1;
            return None;
        }

        let deltas = [
            (Axis::X, i32::from(sample.x) - i32::from(previous.x)),
            (Axis::Y, i32::from(sample.y) - i32::from(previous.y)),
            (Axis::Z, i32::from(sample.z) - i32::from(previous.z)),
        ];
        let (axis, delta) = deltas
            .into_iter()
            .max_by_key(|(_, delta)| delta.unsigned_abs())?;

        if delta.unsigned_abs() <= u32::from(self.config.threshold) {
            return None;
        }

        self.holdoff = self.config.holdoff_samples;
        Some(Tap {
            axis,
            direction: if delta > 0 {
                Direction::Positive
            } else {
                Direction::Negative
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REST: Sample = Sample::new(0, 0, 256);

    fn detector() -> TapDetector {
        TapDetector::new(TapConfig {
            threshold: 100,
            holdoff_samples: 3,
        })
    }

    #[test]
    fn test_first_sample_primes() {
        let mut det = detector();
        assert_eq!(det.update(Sample::new(1000, 0, 0)), None);
    }

    #[test]
    fn test_spike_reports_axis_and_direction() {
        let mut det = detector();
        det.update(REST);
        assert_eq!(
            det.update(Sample::new(20, -10, 600)),
            Some(Tap {
                axis: Axis::Z,
                direction: Direction::Positive
            })
        );

        let mut det = detector();
        det.update(REST);
        assert_eq!(
            det.update(Sample::new(-300, 0, 256)),
            Some(Tap {
                axis: Axis::X,
                direction: Direction::Negative
            })
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut det = detector();
        det.update(REST);
        assert_eq!(det.update(Sample::new(0, 100, 256)), None);
        assert!(det.update(Sample::new(0, 201, 256)).is_some());
    }

    #[test]
    fn test_holdoff_suppresses_ringing() {
        let mut det = detector();
        det.update(REST);
        assert!(det.update(Sample::new(0, 0, 800)).is_some());

        // Rebound right after the impact
        assert_eq!(det.update(REST), None);
        assert_eq!(det.update(Sample::new(0, 0, 800)), None);
        assert_eq!(det.update(REST), None);

        // Holdoff over
        assert!(det.update(Sample::new(0, 0, 800)).is_some());
    }

    #[test]
    fn test_slow_drift_never_taps() {
        let mut det = detector();
        for step in 0..200 {
            let sample = Sample::new(step * 10, -(step * 5), 256);
            assert_eq!(det.update(sample), None);
        }
    }

    #[test]
    fn test_reset_clears_history() {
        let mut det = detector();
        det.update(REST);
        assert!(det.update(Sample::new(0, 0, 800)).is_some());

        det.reset();
        assert_eq!(det.update(REST), None);
        assert!(det.update(Sample::new(0, 500, 256)).is_some());
    }

    #[test]
    fn test_from_g_scales_to_fixed_units() {
        assert_eq!(Sample::from_g(0.0, 0.0, 1.0), REST);
        assert_eq!(Sample::from_g(-1.5, 0.5, 2.0), Sample::new(-384, 128, 512));
    }

    #[test]
    fn test_from_g_saturates() {
        assert_eq!(
            Sample::from_g(1000.0, -1000.0, f32::NAN),
            Sample::new(i16::MAX, i16::MIN, 0)
        );
    }

    #[test]
    fn test_default_threshold_is_range_independent() {
        // A 2 g jolt on Z from rest counts with the default tuning whatever
        // range the sensor is set to, since samples are normalized to g
        let mut det = TapDetector::new(TapConfig::default());
        det.update(Sample::from_g(0.0, 0.0, 1.0));
        assert_eq!(
            det.update(Sample::from_g(0.0, 0.0, 3.0)),
            Some(Tap {
                axis: Axis::Z,
                direction: Direction::Positive
            })
        );

        // 1 g is below the 1.5 g default
        let mut det = TapDetector::new(TapConfig::default());
        det.update(Sample::from_g(0.0, 0.0, 1.0));
        assert_eq!(det.update(Sample::from_g(0.0, 0.0, 2.0)), None);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let mut det = detector();
        det.update(Sample::new(i16::MIN, i16::MIN, i16::MIN));
        assert_eq!(
            det.update(Sample::new(i16::MAX, i16::MIN, i16::MIN)),
            Some(Tap {
                axis: Axis::X,
                direction: Direction::Positive
            })
        );
    }
}
