use crate::{
    error::CapacityError,
    ingredient::{AlchemicIngredient, Container},
    laboratory::LaboratoryId,
    support::temperature::Temperature,
};

use super::{Device, DeviceKind, slot::SingleSlot};

/// Cools one ingredient at a time down to the box temperature.
///
/// Ingredients at or below the box temperature pass through unchanged.
#[derive(Debug)]
pub struct CoolingBox {
    temperature: Temperature,
    slot: SingleSlot,
    pub(super) laboratory: Option<LaboratoryId>,
}

impl CoolingBox {
    #[must_use]
    pub fn new(temperature: Temperature) -> Self {
        Self {
            temperature,
            slot: SingleSlot::default(),
            laboratory: None,
        }
    }

    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.temperature = temperature;
    }

    /// The ingredient waiting to be processed.
    #[must_use]
    pub fn loaded(&self) -> Option<&AlchemicIngredient> {
        self.slot.loaded()
    }

    /// The ingredient waiting to be unloaded.
    #[must_use]
    pub fn processed(&self) -> Option<&AlchemicIngredient> {
        self.slot.processed()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }
}

/// Cools `ingredient` by exactly its excess over `target`.
fn cool_to(ingredient: &mut AlchemicIngredient, target: Temperature) {
    let excess = Temperature::difference(&ingredient.temperature(), &target);
    if excess > 0 {
        ingredient.cool(excess.unsigned_abs());
    }
}

impl Device for CoolingBox {
    fn kind(&self) -> DeviceKind {
        DeviceKind::CoolingBox
    }

    fn load(&mut self, container: Container) -> Result<(), CapacityError> {
        self.slot.load(self.kind(), container)
    }

    fn process(&mut self) -> Result<(), CapacityError> {
        let target = self.temperature;
        self.slot.process(|ingredient| {
            tracing::debug!(ingredient = %ingredient, %target, "cooling");
            cool_to(ingredient, target);
        });
        Ok(())
    }

    fn unload(&mut self) -> Result<Option<Container>, CapacityError> {
        self.slot.unload()
    }

    fn laboratory(&self) -> Option<LaboratoryId> {
        self.laboratory
    }
}
