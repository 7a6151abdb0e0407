//! Dual-axis temperature values.
//!
//! A [`Temperature`] is a pair of non-negative magnitudes, coldness and
//! hotness, of which at most one is non-zero. Heating first consumes
//! coldness and then adds hotness (cooling is symmetric), so a temperature
//! moves along a single signed axis:
//!
//! ```text
//!   coldness ... 2  1  0  1  2 ... hotness
//! ```
//!
//! Both axes saturate at a process-wide [`upper_limit`]. Exceeding it is not
//! an error: the driving axis is simply capped.
//!
//! # Example
//!
//! ```
//! use alchemy_lab::support::temperature::Temperature;
//!
//! let mut t = Temperature::new(5, 0);
//! t.heat(20);
//! assert_eq!((t.coldness(), t.hotness()), (0, 15));
//! t.cool(15);
//! assert_eq!(t, Temperature::ZERO);
//! ```

mod limit;

use std::{cmp::Ordering, fmt};

pub use limit::{DEFAULT_UPPER_LIMIT, LimitAlreadySet, set_upper_limit, upper_limit};

/// A bounded dual-axis temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Temperature {
    coldness: u64,
    hotness: u64,
}

impl Temperature {
    /// Neither cold nor hot.
    pub const ZERO: Self = Self {
        coldness: 0,
        hotness: 0,
    };

    /// Standard temperature of water.
    ///
    /// Constants bypass the [`upper_limit`]. Under a limit below 20, build
    /// the value with [`Temperature::new`] to have it capped.
    pub const WATER: Self = Self {
        coldness: 0,
        hotness: 20,
    };

    /// Creates a temperature from two magnitudes.
    ///
    /// Each magnitude is capped at the [`upper_limit`]. If both are non-zero
    /// they are netted against each other so only one axis remains.
    #[must_use]
    pub fn new(coldness: u64, hotness: u64) -> Self {
        let limit = upper_limit();
        let coldness = coldness.min(limit);
        let hotness = hotness.min(limit);

        match coldness.cmp(&hotness) {
            Ordering::Less => Self {
                coldness: 0,
                hotness: hotness - coldness,
            },
            Ordering::Equal => Self::ZERO,
            Ordering::Greater => Self {
                coldness: coldness - hotness,
                hotness: 0,
            },
        }
    }

    /// Creates a temperature from a signed magnitude (negative is cold).
    #[must_use]
    pub fn from_magnitude(magnitude: i64) -> Self {
        if magnitude < 0 {
            Self::new(magnitude.unsigned_abs(), 0)
        } else {
            Self::new(0, magnitude.unsigned_abs())
        }
    }

    #[must_use]
    pub fn coldness(&self) -> u64 {
        self.coldness
    }

    #[must_use]
    pub fn hotness(&self) -> u64 {
        self.hotness
    }

    /// Returns the signed magnitude `hotness - coldness`.
    #[must_use]
    pub fn magnitude(&self) -> i64 {
        saturating_signed(self.hotness) - saturating_signed(self.coldness)
    }

    /// Raises the temperature by `amount`, saturating at the upper limit.
    pub fn heat(&mut self, amount: u64) {
        (self.hotness, self.coldness) = shift(self.hotness, self.coldness, amount);
    }

    /// Lowers the temperature by `amount`, saturating at the upper limit.
    pub fn cool(&mut self, amount: u64) {
        (self.coldness, self.hotness) = shift(self.coldness, self.hotness, amount);
    }

    /// Heats for a positive `delta` and cools for a negative one.
    pub fn adjust(&mut self, delta: i64) {
        if delta >= 0 {
            self.heat(delta.unsigned_abs());
        } else {
            self.cool(delta.unsigned_abs());
        }
    }

    /// Orders two temperatures by signed magnitude.
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.cmp(b)
    }

    /// Returns the signed magnitude difference `a - b`.
    ///
    /// A positive difference means `a` is hotter than `b`.
    #[must_use]
    pub fn difference(a: &Self, b: &Self) -> i64 {
        a.magnitude().saturating_sub(b.magnitude())
    }
}

/// Moves `amount` onto the `driving` axis after draining the `opposing` one.
///
/// Returns the new `(driving, opposing)` pair.
fn shift(driving: u64, opposing: u64, amount: u64) -> (u64, u64) {
    if amount <= opposing {
        return (driving, opposing - amount);
    }

    let remainder = amount - opposing;
    let driving = driving.saturating_add(remainder).min(upper_limit());
    (driving, 0)
}

fn saturating_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl Ord for Temperature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude().cmp(&other.magnitude())
    }
}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.coldness, self.hotness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn construction_nets_both_axes() {
        assert_eq!(Temperature::new(5, 20), Temperature::new(0, 15));
        assert_eq!(Temperature::new(20, 5), Temperature::new(15, 0));
        assert_eq!(Temperature::new(7, 7), Temperature::ZERO);
    }

    #[test]
    fn construction_caps_at_limit() {
        let t = Temperature::new(0, DEFAULT_UPPER_LIMIT + 500);
        assert_eq!(t.hotness(), DEFAULT_UPPER_LIMIT);

        let t = Temperature::from_magnitude(-i64::MAX);
        assert_eq!(t.coldness(), DEFAULT_UPPER_LIMIT);
    }

    #[test]
    fn heat_consumes_coldness_first() {
        let mut t = Temperature::new(10, 0);

        t.heat(4);
        assert_eq!((t.coldness(), t.hotness()), (6, 0));

        t.heat(6);
        assert_eq!(t, Temperature::ZERO);

        t.heat(3);
        assert_eq!((t.coldness(), t.hotness()), (0, 3));
    }

    #[test]
    fn cool_crosses_zero() {
        let mut t = Temperature::WATER;
        t.cool(50);
        assert_eq!((t.coldness(), t.hotness()), (30, 0));
    }

    #[test]
    fn heating_saturates() {
        let mut t = Temperature::new(0, DEFAULT_UPPER_LIMIT - 1);
        t.heat(100);
        assert_eq!(t.hotness(), DEFAULT_UPPER_LIMIT);

        t.heat(u64::MAX);
        assert_eq!(t.hotness(), DEFAULT_UPPER_LIMIT);
    }

    #[test]
    fn adjust_follows_sign() {
        let mut t = Temperature::ZERO;
        t.adjust(12);
        assert_eq!(t.magnitude(), 12);
        t.adjust(-30);
        assert_eq!(t.magnitude(), -18);
        t.adjust(0);
        assert_eq!(t.magnitude(), -18);
    }

    #[test]
    fn heat_then_cool_round_trips() {
        for amount in [0, 1, 20, 999, DEFAULT_UPPER_LIMIT] {
            let mut t = Temperature::ZERO;
            t.heat(amount);
            t.cool(amount);
            assert_eq!(t, Temperature::ZERO, "amount {amount}");
        }
    }

    #[test]
    fn one_axis_invariant_holds_under_random_adjustments() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut t = Temperature::ZERO;

        for _ in 0..5_000 {
            let amount = rng.random_range(0..=2 * DEFAULT_UPPER_LIMIT);
            if rng.random_bool(0.5) {
                t.heat(amount);
            } else {
                t.cool(amount);
            }

            assert!(t.coldness() == 0 || t.hotness() == 0, "{t}");
            assert!(t.coldness() <= DEFAULT_UPPER_LIMIT);
            assert!(t.hotness() <= DEFAULT_UPPER_LIMIT);
        }
    }

    #[test]
    fn compare_is_antisymmetric() {
        let samples = [
            Temperature::new(30, 0),
            Temperature::ZERO,
            Temperature::WATER,
            Temperature::new(0, 100),
        ];

        for a in &samples {
            assert_eq!(Temperature::compare(a, a), Ordering::Equal);
            for b in &samples {
                assert_eq!(
                    Temperature::compare(a, b),
                    Temperature::compare(b, a).reverse()
                );
            }
        }

        assert!(Temperature::new(1, 0) < Temperature::ZERO);
        assert!(Temperature::WATER > Temperature::new(0, 19));
    }

    #[test]
    fn difference_is_signed() {
        let cold = Temperature::new(10, 0);
        assert_eq!(Temperature::difference(&Temperature::WATER, &cold), 30);
        assert_eq!(Temperature::difference(&cold, &Temperature::WATER), -30);
    }

    #[test]
    fn displays_both_axes() {
        assert_eq!(Temperature::WATER.to_string(), "[0, 20]");
    }
}
