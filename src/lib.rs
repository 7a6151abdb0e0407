//! # Alchemy Lab
//!
//! Processing engine for an alchemical laboratory: typed ingredients with a
//! temperature, devices that transform them, and capacity-bounded storage.
//!
//! ## Crate layout
//!
//! - [`support`]: Value types the rest of the crate builds on: temperatures,
//!   measurement units and numeric constraints.
//! - [`ingredient`]: Ingredient names, types, quantities and containers.
//! - [`device`]: The four devices and the load, process, unload cycle they share.
//! - [`laboratory`]: Storage gated on which devices a laboratory owns.
//!
//! ## Errors
//!
//! Capacity violations are the only failures and surface as [`CapacityError`].
//! Malformed names and out-of-range temperatures degrade to documented
//! defaults instead.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber.

pub mod device;
pub mod ingredient;
pub mod laboratory;
pub mod support;

mod error;

pub use error::{CapacityError, Culprit};
