//! Devices that transform ingredients.
//!
//! Every device follows the same cycle: [`Device::load`] consumes containers,
//! [`Device::process`] transforms what was loaded, and [`Device::unload`]
//! hands results back in fresh containers.
//!
//! # Variants
//!
//! Single-slot devices hold one ingredient at a time and only change its
//! temperature:
//!
//! - [`CoolingBox`]: cools ingredients down to the box temperature
//! - [`Oven`]: heats ingredients up to (roughly) the oven temperature
//!
//! Unlimited-slot devices accept any number of loads before processing and
//! drain their results one at a time, first in first out:
//!
//! - [`Kettle`]: mixes everything loaded into one ingredient
//! - [`Transmogrifier`]: flips the physical state of each ingredient
//!
//! [`AnyDevice`] closes over the four variants so a laboratory can keep them
//! in one collection.
//!
//! # Example
//!
//! ```
//! use alchemy_lab::device::{CoolingBox, Device};
//! use alchemy_lab::ingredient::{AlchemicIngredient, Container, IngredientType};
//! use alchemy_lab::support::{temperature::Temperature, units::PhysicalState};
//!
//! let tea = IngredientType::new(["Tea"], PhysicalState::Liquid, Temperature::new(0, 60));
//! let mut cooling_box = CoolingBox::new(Temperature::new(0, 10));
//!
//! cooling_box.load(Container::new(AlchemicIngredient::new(tea, 8))?)?;
//! cooling_box.process()?;
//! let iced = cooling_box.unload()?.expect("processed").into_ingredient();
//!
//! assert_eq!(iced.temperature(), Temperature::new(0, 10));
//! assert_eq!(iced.full_name(), "Cooled Tea");
//! # Ok::<(), alchemy_lab::CapacityError>(())
//! ```

mod cooling_box;
mod heating;
mod kettle;
mod oven;
mod slot;
mod transmogrifier;

use std::fmt;

pub use cooling_box::CoolingBox;
pub use heating::{FixedFactor, HeatingFactor, HeatingSpread, OvenConfig, RandomFactor};
pub use kettle::{Kettle, mix};
pub use oven::Oven;
pub use transmogrifier::{Transmogrifier, transmogrify};

use crate::{error::CapacityError, ingredient::Container, laboratory::LaboratoryId};

/// The four kinds of device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    CoolingBox,
    Oven,
    Kettle,
    Transmogrifier,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CoolingBox => "cooling box",
            Self::Oven => "oven",
            Self::Kettle => "kettle",
            Self::Transmogrifier => "transmogrifier",
        })
    }
}

/// The load, process, unload cycle shared by every device.
pub trait Device {
    fn kind(&self) -> DeviceKind;

    /// Consumes a container and keeps its ingredient for processing.
    ///
    /// # Errors
    ///
    /// Single-slot devices return a [`CapacityError`] while they still hold
    /// an ingredient.
    fn load(&mut self, container: Container) -> Result<(), CapacityError>;

    /// Transforms the loaded ingredients.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if the device cannot process in its
    /// current state.
    fn process(&mut self) -> Result<(), CapacityError>;

    /// Returns the next processed ingredient, if any, in its smallest container.
    ///
    /// # Errors
    ///
    /// Single-slot devices return a [`CapacityError`] if no container holds
    /// the result, which then stays in the device. Unlimited-slot devices
    /// discard whatever exceeds the largest container instead.
    fn unload(&mut self) -> Result<Option<Container>, CapacityError>;

    /// The laboratory this device belongs to.
    fn laboratory(&self) -> Option<LaboratoryId>;
}

/// Any one of the device variants.
#[derive(Debug)]
pub enum AnyDevice {
    CoolingBox(CoolingBox),
    Oven(Oven),
    Kettle(Kettle),
    Transmogrifier(Transmogrifier),
}

impl AnyDevice {
    fn as_device(&self) -> &dyn Device {
        match self {
            Self::CoolingBox(device) => device,
            Self::Oven(device) => device,
            Self::Kettle(device) => device,
            Self::Transmogrifier(device) => device,
        }
    }

    fn as_device_mut(&mut self) -> &mut dyn Device {
        match self {
            Self::CoolingBox(device) => device,
            Self::Oven(device) => device,
            Self::Kettle(device) => device,
            Self::Transmogrifier(device) => device,
        }
    }

    pub(crate) fn set_laboratory(&mut self, laboratory: Option<LaboratoryId>) {
        match self {
            Self::CoolingBox(device) => device.laboratory = laboratory,
            Self::Oven(device) => device.laboratory = laboratory,
            Self::Kettle(device) => device.laboratory = laboratory,
            Self::Transmogrifier(device) => device.laboratory = laboratory,
        }
    }
}

impl Device for AnyDevice {
    fn kind(&self) -> DeviceKind {
        self.as_device().kind()
    }

    fn load(&mut self, container: Container) -> Result<(), CapacityError> {
        self.as_device_mut().load(container)
    }

    fn process(&mut self) -> Result<(), CapacityError> {
        self.as_device_mut().process()
    }

    fn unload(&mut self) -> Result<Option<Container>, CapacityError> {
        self.as_device_mut().unload()
    }

    fn laboratory(&self) -> Option<LaboratoryId> {
        self.as_device().laboratory()
    }
}

impl From<CoolingBox> for AnyDevice {
    fn from(device: CoolingBox) -> Self {
        Self::CoolingBox(device)
    }
}

impl From<Oven> for AnyDevice {
    fn from(device: Oven) -> Self {
        Self::Oven(device)
    }
}

impl From<Kettle> for AnyDevice {
    fn from(device: Kettle) -> Self {
        Self::Kettle(device)
    }
}

impl From<Transmogrifier> for AnyDevice {
    fn from(device: Transmogrifier) -> Self {
        Self::Transmogrifier(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        ingredient::{AlchemicIngredient, IngredientType},
        support::{temperature::Temperature, units::PhysicalState},
    };

    #[test]
    fn any_device_delegates() {
        let mut device = AnyDevice::from(Transmogrifier::new());
        assert_eq!(device.kind(), DeviceKind::Transmogrifier);
        assert_eq!(device.laboratory(), None);

        let salt = IngredientType::new(["Salt"], PhysicalState::Powder, Temperature::ZERO);
        device
            .load(Container::new(AlchemicIngredient::new(salt, 6)).unwrap())
            .unwrap();
        device.process().unwrap();

        let brine = device.unload().unwrap().unwrap().into_ingredient();
        assert_eq!(brine.state(), PhysicalState::Liquid);
        assert_eq!(brine.quantity(), 8);
        assert!(device.unload().unwrap().is_none());
    }

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(DeviceKind::CoolingBox.to_string(), "cooling box");
        assert_eq!(AnyDevice::from(Kettle::new()).kind().to_string(), "kettle");
    }
}
