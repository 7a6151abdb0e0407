use std::{fmt, ops::Deref};

use rand::{Rng, SeedableRng, rngs::StdRng};
use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// A source of oven heating factors.
///
/// Each oven run scales the oven's temperature by one factor drawn from this
/// source. Inject a [`FixedFactor`] to make heating deterministic.
pub trait HeatingFactor: fmt::Debug {
    /// Returns the factor for the next run.
    fn next_factor(&mut self) -> f64;
}

/// Always returns the same factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFactor(pub f64);

impl HeatingFactor for FixedFactor {
    fn next_factor(&mut self) -> f64 {
        self.0
    }
}

/// Relative deviation an oven may show around its configured temperature.
///
/// Must fall in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingSpread(Constrained<Ratio, UnitInterval>);

impl HeatingSpread {
    /// Create a [`HeatingSpread`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`HeatingSpread`] from a quantity with ratio units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Default for HeatingSpread {
    /// Five percent.
    fn default() -> Self {
        Self::from_quantity(Ratio::new::<percent>(5.0)).expect("5% lies in [0, 1]")
    }
}

impl Deref for HeatingSpread {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Draws factors uniformly from `[1 - spread, 1 + spread]`.
#[derive(Debug, Clone)]
pub struct RandomFactor<R> {
    rng: R,
    spread: HeatingSpread,
}

impl<R: Rng> RandomFactor<R> {
    #[must_use]
    pub fn new(rng: R, spread: HeatingSpread) -> Self {
        Self { rng, spread }
    }
}

impl RandomFactor<StdRng> {
    /// Seeds a generator from the operating system.
    #[must_use]
    pub fn from_os_rng(spread: HeatingSpread) -> Self {
        Self::new(StdRng::from_os_rng(), spread)
    }

    /// Seeds a reproducible generator.
    #[must_use]
    pub fn seeded(seed: u64, spread: HeatingSpread) -> Self {
        Self::new(StdRng::seed_from_u64(seed), spread)
    }
}

impl<R: Rng + fmt::Debug> HeatingFactor for RandomFactor<R> {
    fn next_factor(&mut self) -> f64 {
        let spread = self.spread.get::<ratio>();
        if spread == 0.0 {
            return 1.0;
        }
        self.rng.random_range(1.0 - spread..=1.0 + spread)
    }
}

/// Oven configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OvenConfig {
    /// Deviation around the configured temperature.
    pub spread: HeatingSpread,

    /// Seed for the heating factor generator.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl OvenConfig {
    /// Builds the heating factor source this configuration describes.
    pub(super) fn factor_source(&self) -> Box<dyn HeatingFactor> {
        match self.seed {
            Some(seed) => Box::new(RandomFactor::seeded(seed, self.spread)),
            None => Box::new(RandomFactor::from_os_rng(self.spread)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_spread_is_five_percent() {
        assert_relative_eq!(HeatingSpread::default().get::<ratio>(), 0.05);
    }

    #[test]
    fn spread_outside_unit_interval_is_rejected() {
        assert!(HeatingSpread::new(-0.01).is_err());
        assert!(HeatingSpread::new(1.01).is_err());
        assert!(HeatingSpread::new(0.0).is_ok());
    }

    #[test]
    fn random_factors_stay_within_spread() {
        let mut source = RandomFactor::seeded(42, HeatingSpread::default());
        for _ in 0..1_000 {
            let factor = source.next_factor();
            assert!((0.95..=1.05).contains(&factor), "{factor}");
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomFactor::seeded(9, HeatingSpread::default());
        let mut b = RandomFactor::seeded(9, HeatingSpread::default());
        for _ in 0..10 {
            assert_relative_eq!(a.next_factor(), b.next_factor());
        }
    }

    #[test]
    fn zero_spread_is_exact() {
        let mut source = RandomFactor::seeded(1, HeatingSpread::new(0.0).unwrap());
        assert_relative_eq!(source.next_factor(), 1.0);
        assert_relative_eq!(FixedFactor(1.02).next_factor(), 1.02);
    }
}
