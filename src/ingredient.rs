//! Ingredients and the containers that carry them.
//!
//! - [`IngredientName`]: validated simple names plus an optional special name
//! - [`IngredientType`]: name, physical state and standard temperature
//! - [`AlchemicIngredient`]: a quantity of a type at its own temperature
//! - [`Container`]: a unit-sized vessel holding one ingredient
//!
//! Invalid names never raise: [`IngredientType::new`] falls back to water.
//!
//! ```
//! use alchemy_lab::ingredient::{AlchemicIngredient, Container, IngredientType};
//! use alchemy_lab::support::{temperature::Temperature, units::{PhysicalState, Unit}};
//!
//! let beer = IngredientType::new(["Beer"], PhysicalState::Liquid, Temperature::new(0, 5));
//! let mut pint = AlchemicIngredient::new(beer, 40);
//! pint.heat(10);
//! assert_eq!(pint.full_name(), "Heated Beer");
//!
//! let container = Container::new(pint).unwrap();
//! assert_eq!(container.unit(), Unit::VIAL);
//! ```

mod alchemic;
mod container;
mod kind;
mod name;

pub use alchemic::AlchemicIngredient;
pub use container::Container;
pub use kind::IngredientType;
pub use name::{FORBIDDEN_WORDS, IngredientName, SPECIAL_CHARACTERS, is_valid_name};
