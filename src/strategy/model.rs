//! Logistic win probability model

use crate::config::types::ModelConfig;

/// Win probability estimate from score differential and game clock
///
/// `p = 1 / (1 + exp(-k * score_diff / time_frac))` where `time_frac` is the
/// fraction of regulation remaining, floored at one second. A given lead is
/// worth more certainty the less time is left to overturn it.
#[derive(Debug, Clone)]
pub struct WinProbability {
    /// Steepness applied to the score differential
    steepness: f64,
    /// Regulation game length in seconds
    regulation_seconds: f64,
}

impl WinProbability {
    pub fn new(steepness: f64, regulation_seconds: f64) -> Self {
        Self {
            steepness,
            regulation_seconds,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.steepness, config.regulation_seconds)
    }

    /// Probability that the home team wins, strictly inside (0, 1)
    ///
    /// `time_seconds` at or below one second is clamped so a late lead maps
    /// to near-certainty instead of dividing by zero.
    pub fn probability(&self, score_diff: i64, time_seconds: f64) -> f64 {
        let time_frac = time_seconds.max(1.0) / self.regulation_seconds;
        let exponent = -self.steepness * score_diff as f64 / time_frac;
        1.0 / (1.0 + exponent.exp())
    }
}

impl Default for WinProbability {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> WinProbability {
        WinProbability::default()
    }

    #[test]
    fn test_level_scores_are_a_coin_flip() {
        assert_eq!(model().probability(0, 2880.0), 0.5);
        assert_eq!(model().probability(0, 10.0), 0.5);
    }

    #[test]
    fn test_output_stays_inside_unit_interval() {
        let m = model();
        for &diff in &[-200_i64, -50, -1, 0, 1, 50, 200] {
            for &time in &[0.0, 0.5, 1.0, 60.0, 2880.0, 1e9] {
                let p = m.probability(diff, time);
                assert!(p > 0.0 && p < 1.0, "p={} for diff={} time={}", p, diff, time);
            }
        }
    }

    #[test]
    fn test_monotone_in_lead() {
        let m = model();
        let p_down = m.probability(-6, 1200.0);
        let p_level = m.probability(0, 1200.0);
        let p_up = m.probability(6, 1200.0);
        assert!(p_down < p_level && p_level < p_up);
    }

    #[test]
    fn test_same_lead_hardens_as_clock_runs_down() {
        let m = model();
        let early = m.probability(8, 2500.0);
        let late = m.probability(8, 120.0);
        assert!(late > early);
        assert!(late > 0.99);
    }

    #[test]
    fn test_clock_clamped_below_one_second() {
        let m = model();
        assert_eq!(m.probability(3, 0.0), m.probability(3, 1.0));
        assert_eq!(m.probability(3, -5.0), m.probability(3, 1.0));
    }
}
