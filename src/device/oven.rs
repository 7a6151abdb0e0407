use crate::{
    error::CapacityError,
    ingredient::{AlchemicIngredient, Container},
    laboratory::LaboratoryId,
    support::temperature::Temperature,
};

use super::{Device, DeviceKind, HeatingFactor, OvenConfig, slot::SingleSlot};

/// Heats one ingredient at a time up to roughly the oven temperature.
///
/// Ovens are imprecise: each run scales the oven temperature by a factor
/// drawn from a [`HeatingFactor`] source (by default within ±5%) and heats
/// the ingredient up to that point. Ingredients at or above the oven
/// temperature pass through unchanged, and an oven never cools.
#[derive(Debug)]
pub struct Oven {
    temperature: Temperature,
    factor: Box<dyn HeatingFactor>,
    slot: SingleSlot,
    pub(super) laboratory: Option<LaboratoryId>,
}

impl Oven {
    /// Creates an oven with the default [`OvenConfig`].
    #[must_use]
    pub fn new(temperature: Temperature) -> Self {
        Self::with_config(temperature, &OvenConfig::default())
    }

    #[must_use]
    pub fn with_config(temperature: Temperature, config: &OvenConfig) -> Self {
        Self::with_factor_source(temperature, config.factor_source())
    }

    /// Creates an oven drawing heating factors from `factor`.
    #[must_use]
    pub fn with_factor_source(temperature: Temperature, factor: Box<dyn HeatingFactor>) -> Self {
        Self {
            temperature,
            factor,
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

    #[must_use]
    pub fn loaded(&self) -> Option<&AlchemicIngredient> {
        self.slot.loaded()
    }

    #[must_use]
    pub fn processed(&self) -> Option<&AlchemicIngredient> {
        self.slot.processed()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }
}

/// Scales both axes of `temperature` by `factor`, rounding to the nearest unit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scaled(temperature: Temperature, factor: f64) -> Temperature {
    let scale = |magnitude: u64| (magnitude as f64 * factor).round().max(0.0) as u64;
    Temperature::new(scale(temperature.coldness()), scale(temperature.hotness()))
}

impl Device for Oven {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Oven
    }

    fn load(&mut self, container: Container) -> Result<(), CapacityError> {
        self.slot.load(self.kind(), container)
    }

    fn process(&mut self) -> Result<(), CapacityError> {
        let setting = self.temperature;
        let factor = &mut self.factor;

        self.slot.process(|ingredient| {
            if ingredient.temperature() >= setting {
                return;
            }

            let factor = factor.next_factor();
            let target = scaled(setting, factor);
            tracing::debug!(ingredient = %ingredient, %target, factor, "heating");

            let shortfall = Temperature::difference(&target, &ingredient.temperature());
            if shortfall > 0 {
                ingredient.heat(shortfall.unsigned_abs());
            }
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
