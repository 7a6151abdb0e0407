use uom::si::{f64::Ratio, ratio::ratio};

use crate::error::CapacityError;

use super::{PhysicalState, Unit};

/// Common units per spoon: the least common multiple of both spoon sizes.
///
/// Expressing quantities of either state in common units makes them
/// comparable without rounding: one drop is 3 and one pinch is 4.
pub const COMMON_UNITS_PER_SPOON: u64 =
    lcm(Unit::LIQUID_SPOON.capacity(), Unit::POWDER_SPOON.capacity());

const fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

const fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

/// Returns the smallest container of `state` that holds `quantity`.
///
/// `quantity` is counted in the smallest unit of `state`.
///
/// # Errors
///
/// Returns a [`CapacityError`] if `quantity` exceeds every container.
pub fn smallest_container(state: PhysicalState, quantity: u64) -> Result<Unit, CapacityError> {
    Unit::containers_of(state)
        .find(|unit| unit.absolute_capacity() >= quantity)
        .ok_or_else(|| {
            CapacityError::container(format!(
                "{quantity} exceeds the largest {state} container ({} holds {})",
                Unit::largest_container(state).name(),
                Unit::largest_container(state).absolute_capacity(),
            ))
        })
}

/// Returns the factor converting a quantity of `from` into a quantity of `to`.
///
/// Defined as `spoon(to) / spoon(from)` in smallest units.
#[must_use]
pub fn cross_state_ratio(from: PhysicalState, to: PhysicalState) -> Ratio {
    #[allow(clippy::cast_precision_loss)]
    let value = spoon_size(to) as f64 / spoon_size(from) as f64;
    Ratio::new::<ratio>(value)
}

/// Converts `quantity` of `from` into `to`, rounding down.
///
/// Uses exact integer arithmetic rather than the floating-point
/// [`cross_state_ratio`].
#[must_use]
pub fn convert_quantity(quantity: u64, from: PhysicalState, to: PhysicalState) -> u64 {
    let scaled = u128::from(quantity) * u128::from(spoon_size(to)) / u128::from(spoon_size(from));
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Expresses `quantity` of `state` in common units.
#[must_use]
pub fn common_units(state: PhysicalState, quantity: u64) -> u128 {
    u128::from(quantity) * u128::from(COMMON_UNITS_PER_SPOON / spoon_size(state))
}

/// Converts `count` of `unit` into the smallest unit of its state.
#[must_use]
pub fn to_smallest(count: u64, unit: Unit) -> u64 {
    count.saturating_mul(unit.absolute_capacity())
}

fn spoon_size(state: PhysicalState) -> u64 {
    Unit::spoon(state).absolute_capacity()
}
