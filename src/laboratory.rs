//! Capacity-bounded storage that owns the devices it relies on.
//!
//! A [`Laboratory`] keeps `(type -> quantity)` pairs, never live ingredients:
//! everything entering storage is brought back to its standard temperature,
//! which requires the right device. Devices live in the laboratory's own
//! arena, at most one of each kind, and carry the laboratory's
//! [`LaboratoryId`] while attached.
//!
//! ```
//! use alchemy_lab::device::{CoolingBox, DeviceKind};
//! use alchemy_lab::ingredient::{AlchemicIngredient, Container, IngredientType};
//! use alchemy_lab::laboratory::Laboratory;
//! use alchemy_lab::support::{temperature::Temperature, units::PhysicalState};
//!
//! let mut lab = Laboratory::new(1)?;
//! lab.add_device(CoolingBox::new(Temperature::ZERO))?;
//!
//! let broth = IngredientType::new(["Broth"], PhysicalState::Liquid, Temperature::new(0, 30));
//! let hot = AlchemicIngredient::new(broth, 40).with_temperature(Temperature::new(0, 90));
//! lab.store(Container::new(hot)?)?;
//!
//! let cup = lab.request("Broth", 16)?;
//! assert_eq!(cup.ingredient().temperature(), Temperature::new(0, 30));
//! assert_eq!(lab.quantity_of("Broth"), Some(24));
//! assert!(lab.has_device(DeviceKind::CoolingBox));
//! # Ok::<(), alchemy_lab::CapacityError>(())
//! ```

mod storage;

use std::{
    collections::HashMap,
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    device::{AnyDevice, Device, DeviceKind},
    error::CapacityError,
    ingredient::IngredientType,
    support::{
        constraint::NonNegative,
        units::{PhysicalState, Unit, common_units},
    },
};

/// A handle identifying one laboratory.
///
/// Devices hold this handle instead of a reference to their laboratory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaboratoryId(u64);

impl LaboratoryId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LaboratoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "laboratory #{}", self.0)
    }
}

/// An ingredient store bounded by a number of storerooms.
#[derive(Debug)]
pub struct Laboratory {
    id: LaboratoryId,
    storerooms: u64,
    capacity: u128,
    storage: HashMap<IngredientType, u64>,
    devices: Vec<AnyDevice>,
}

impl Laboratory {
    /// Creates an empty laboratory holding `storerooms` storerooms.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `storerooms` is negative or too large
    /// to measure.
    pub fn new(storerooms: i64) -> Result<Self, CapacityError> {
        let id = LaboratoryId::next();

        let storerooms = NonNegative::new(storerooms)
            .map_err(|err| CapacityError::laboratory(id, format!("invalid capacity: {err}")))?
            .into_inner()
            .unsigned_abs();

        let per_storeroom = common_units(
            PhysicalState::Liquid,
            Unit::storeroom(PhysicalState::Liquid).absolute_capacity(),
        );
        let capacity = u128::from(storerooms) * per_storeroom;
        if u64::try_from(capacity).is_err() {
            return Err(CapacityError::laboratory(
                id,
                format!("invalid capacity: {storerooms} storerooms is too large"),
            ));
        }

        tracing::debug!(%id, storerooms, "laboratory opened");
        Ok(Self {
            id,
            storerooms,
            capacity,
            storage: HashMap::new(),
            devices: Vec::new(),
        })
    }

    #[must_use]
    pub fn id(&self) -> LaboratoryId {
        self.id
    }

    /// Capacity in storerooms.
    #[must_use]
    pub fn storerooms(&self) -> u64 {
        self.storerooms
    }

    /// Capacity in common units.
    #[must_use]
    pub fn capacity_in_common_units(&self) -> u128 {
        self.capacity
    }

    /// Stored quantity of every type, in common units.
    #[must_use]
    pub fn used_capacity(&self) -> u128 {
        self.storage
            .iter()
            .map(|(kind, &quantity)| common_units(kind.state(), quantity))
            .sum()
    }

    /// Attaches `device` to this laboratory.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if the device already belongs to a
    /// laboratory or one of the same kind is attached. The device is dropped.
    pub fn add_device(&mut self, device: impl Into<AnyDevice>) -> Result<(), CapacityError> {
        let mut device = device.into();
        let kind = device.kind();

        if let Some(owner) = device.laboratory() {
            return Err(CapacityError::both(
                kind,
                self.id,
                format!("device already belongs to {owner}"),
            ));
        }
        if self.has_device(kind) {
            return Err(CapacityError::both(kind, self.id, format!("already has a {kind}")));
        }

        device.set_laboratory(Some(self.id));
        self.devices.push(device);
        tracing::debug!(id = %self.id, %kind, "device attached");
        Ok(())
    }

    /// Detaches and returns the device of `kind`, if attached.
    pub fn remove_device(&mut self, kind: DeviceKind) -> Option<AnyDevice> {
        let index = self.devices.iter().position(|device| device.kind() == kind)?;
        let mut device = self.devices.remove(index);
        device.set_laboratory(None);
        tracing::debug!(id = %self.id, %kind, "device detached");
        Some(device)
    }

    #[must_use]
    pub fn device(&self, kind: DeviceKind) -> Option<&AnyDevice> {
        self.devices.iter().find(|device| device.kind() == kind)
    }

    pub fn device_mut(&mut self, kind: DeviceKind) -> Option<&mut AnyDevice> {
        self.devices.iter_mut().find(|device| device.kind() == kind)
    }

    #[must_use]
    pub fn has_device(&self, kind: DeviceKind) -> bool {
        self.device(kind).is_some()
    }

    /// Attached devices in attachment order.
    pub fn devices(&self) -> impl Iterator<Item = &AnyDevice> {
        self.devices.iter()
    }
}
