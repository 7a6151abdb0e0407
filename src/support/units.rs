//! Measurement units and quantity conversion.
//!
//! Every physical state has its own ladder of units, from the smallest
//! (drop or pinch) up to the storeroom. Quantities are always counted in the
//! smallest unit of their state; a [`Unit`] only says how many of those fit
//! into it ([`Unit::absolute_capacity`]).
//!
//! ## Crossing states
//!
//! A spoon of liquid and a spoon of powder are the same amount of substance.
//! [`cross_state_ratio`] and [`convert_quantity`] translate quantities
//! between states through that equivalence.
//!
//! ```
//! use alchemy_lab::support::units::{PhysicalState, Unit, convert_quantity, smallest_container};
//!
//! // One liquid spoon (8 drops) is one powder spoon (6 pinches).
//! assert_eq!(convert_quantity(8, PhysicalState::Liquid, PhysicalState::Powder), 6);
//!
//! assert_eq!(smallest_container(PhysicalState::Liquid, 9).unwrap(), Unit::VIAL);
//! ```

mod conversion;
mod table;

pub use conversion::{
    COMMON_UNITS_PER_SPOON, common_units, convert_quantity, cross_state_ratio,
    smallest_container, to_smallest,
};
pub use table::{PhysicalState, Unit};
