use crate::common::series::SeriesPair;
use crate::common::walk_exception::{ErrCode, WalkError};
use crate::stats::descriptive::sample_variance;
use crate::stats::sma::simple_moving_average;
use crate::walk::step_config::{StepConfig, StepMode};
use rand::Rng;

/// One realization of a stochastic additive process.
///
/// A walk is either empty (no path yet) or populated, in which case the
/// first path element is always the start value. Once populated, a walk
/// never becomes empty again; `reset` shrinks it back to the start value
/// and redraws a fresh realization of the same length.
///
/// Randomness is always supplied by the caller, so a seeded
/// `rand::rngs::StdRng` makes every operation reproducible.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    start: Option<f64>,
    path: Vec<f64>,
    config: Option<StepConfig>,
}

impl RandomWalk {
    /// Walk of `size` values starting at `start`, generated immediately.
    ///
    /// A nonzero `size` requires both the start value and the step
    /// parameters; `size == 0` builds an empty walk holding whatever
    /// parameters were supplied, pending an explicit `generate` call.
    pub fn new<R: Rng>(
        size: usize,
        start: Option<f64>,
        config: Option<StepConfig>,
        rng: &mut R,
    ) -> Result<Self, WalkError> {
        let mut walk = Self {
            start,
            path: Vec::new(),
            config,
        };

        if size != 0 {
            match (start, config) {
                (Some(_), Some(config)) => walk.generate(size, config, rng)?,
                _ => {
                    return Err(WalkError::new(
                        "a sized walk needs a start value and step parameters",
                        ErrCode::MissingParameters,
                    ))
                }
            }
        }

        Ok(walk)
    }

    /// Empty walk pending explicit generation.
    pub fn empty(start: Option<f64>) -> Self {
        Self {
            start,
            path: Vec::new(),
            config: None,
        }
    }

    /// Extend the walk from its current position.
    ///
    /// The first requested step is taken to be the existing last element,
    /// so `num_steps - 1` values are appended; a walk generated in one call
    /// of `num_steps` from the start value has exactly `num_steps` elements.
    /// On an empty walk the start value is pushed first. Each step draws a
    /// uniform decision in [0, 1) and a magnitude from the interval (real
    /// in continuous mode, integer in discrete mode); a decision below the
    /// step probability adds the magnitude, otherwise it is subtracted.
    /// The step parameters are recorded for later `reset` replay.
    pub fn generate<R: Rng>(
        &mut self,
        num_steps: usize,
        config: StepConfig,
        rng: &mut R,
    ) -> Result<(), WalkError> {
        let mut current = match self.path.last() {
            Some(&last) => last,
            None => {
                let start = self.start.ok_or_else(|| {
                    WalkError::new(
                        "cannot generate a walk without a start value",
                        ErrCode::MissingParameters,
                    )
                })?;
                self.path.push(start);
                start
            }
        };

        self.config = Some(config);

        for _ in 1..num_steps {
            let decision = rng.gen::<f64>();
            let magnitude = match config.mode {
                StepMode::Continuous => rng.gen_range(
                    config.interval.lower_bound()..=config.interval.upper_bound(),
                ),
                StepMode::Discrete => {
                    let (lower, upper) = config.interval.integer_bounds().ok_or_else(|| {
                        WalkError::new(
                            format!("discrete steps need integer bounds, got {}", config.interval),
                            ErrCode::InvalidArgument,
                        )
                    })?;
                    rng.gen_range(lower..=upper) as f64
                }
            };

            current = if decision < config.probability {
                current + magnitude
            } else {
                current - magnitude
            };
            self.path.push(current);
        }

        Ok(())
    }

    /// Discard everything beyond the start value and redraw a realization
    /// of the same length with the recorded step parameters. New random
    /// draws, not a replay of the previous ones.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), WalkError> {
        let previous_size = self.path.len();
        if previous_size == 0 {
            return Ok(());
        }

        let config = self.config.ok_or_else(|| {
            WalkError::new(
                "no step parameters recorded to replay",
                ErrCode::MissingParameters,
            )
        })?;
        let start = self.start.ok_or_else(|| {
            WalkError::new("no start value recorded", ErrCode::MissingParameters)
        })?;

        self.path.clear();
        self.path.push(start);
        self.generate(previous_size, config, rng)
    }

    /// Successive value differences, length size - 1. None below size 2.
    pub fn step_differences(&self) -> Option<Vec<f64>> {
        if self.path.len() < 2 {
            return None;
        }
        Some(self.path.windows(2).map(|pair| pair[1] - pair[0]).collect())
    }

    /// Sign of each step: 1 up, -1 down, 0 for an exactly flat step.
    pub fn step_directions(&self) -> Option<Vec<i32>> {
        let differences = self.step_differences()?;
        Some(
            differences
                .iter()
                .map(|&diff| {
                    if diff > 0.0 {
                        1
                    } else if diff < 0.0 {
                        -1
                    } else {
                        0
                    }
                })
                .collect(),
        )
    }

    /// Sample variance of every path prefix. The first value is always 0,
    /// a single observation having no dispersion.
    pub fn running_variance(&self) -> Vec<f64> {
        (0..self.path.len())
            .map(|end| sample_variance(&self.path[..=end]))
            .collect()
    }

    /// Running volatility: square root of the prefix variance.
    pub fn running_volatility(&self) -> Vec<f64> {
        self.running_variance().into_iter().map(f64::sqrt).collect()
    }

    /// Moving average of the current path.
    pub fn moving_average_series(&self, period: usize) -> Result<SeriesPair, WalkError> {
        simple_moving_average(&self.path, period)
    }

    pub fn path_series(&self) -> SeriesPair {
        SeriesPair::from_values(self.path.clone())
    }

    pub fn running_variance_series(&self) -> SeriesPair {
        SeriesPair::from_values(self.running_variance())
    }

    pub fn running_volatility_series(&self) -> SeriesPair {
        SeriesPair::from_values(self.running_volatility())
    }

    pub fn path(&self) -> &[f64] {
        &self.path
    }

    pub fn size(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn current_value(&self) -> Option<f64> {
        self.path.last().copied()
    }

    pub fn start_value(&self) -> Option<f64> {
        self.start
    }

    pub fn step_config(&self) -> Option<StepConfig> {
        self.config
    }
}
