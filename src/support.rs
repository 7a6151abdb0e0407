//! Value types shared by ingredients, devices and laboratories.

pub mod constraint;
pub mod temperature;
pub mod units;
