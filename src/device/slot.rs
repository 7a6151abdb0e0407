//! Ingredient storage shared by the device variants.

use std::{collections::VecDeque, mem};

use crate::{
    error::CapacityError,
    ingredient::{AlchemicIngredient, Container},
    support::units::{Unit, smallest_container},
};

use super::DeviceKind;

#[derive(Debug, Default)]
enum Slot {
    #[default]
    Empty,
    Loaded(AlchemicIngredient),
    Processed(AlchemicIngredient),
}

/// Holds one ingredient through `Empty -> Loaded -> Processed -> Empty`.
#[derive(Debug, Default)]
pub(super) struct SingleSlot {
    slot: Slot,
}

impl SingleSlot {
    /// Accepts a container only while empty.
    pub(super) fn load(
        &mut self,
        kind: DeviceKind,
        container: Container,
    ) -> Result<(), CapacityError> {
        match self.slot {
            Slot::Empty => {}
            Slot::Loaded(_) => return Err(CapacityError::device(kind, "already loaded")),
            Slot::Processed(_) => {
                return Err(CapacityError::device(
                    kind,
                    "processed ingredient must be unloaded first",
                ));
            }
        }

        self.slot = Slot::Loaded(container.into_ingredient());
        Ok(())
    }

    /// Applies `transform` to the loaded ingredient; does nothing otherwise.
    pub(super) fn process(&mut self, transform: impl FnOnce(&mut AlchemicIngredient)) {
        self.slot = match mem::take(&mut self.slot) {
            Slot::Loaded(mut ingredient) => {
                transform(&mut ingredient);
                Slot::Processed(ingredient)
            }
            other => other,
        };
    }

    /// Returns the processed ingredient in its smallest container.
    ///
    /// An ingredient no container holds stays in the slot.
    pub(super) fn unload(&mut self) -> Result<Option<Container>, CapacityError> {
        match mem::take(&mut self.slot) {
            Slot::Processed(ingredient) => {
                match smallest_container(ingredient.state(), ingredient.quantity()) {
                    Ok(unit) => Ok(Some(Container::sized(unit, ingredient))),
                    Err(err) => {
                        self.slot = Slot::Processed(ingredient);
                        Err(err)
                    }
                }
            }
            other => {
                self.slot = other;
                Ok(None)
            }
        }
    }

    pub(super) fn loaded(&self) -> Option<&AlchemicIngredient> {
        match &self.slot {
            Slot::Loaded(ingredient) => Some(ingredient),
            _ => None,
        }
    }

    pub(super) fn processed(&self) -> Option<&AlchemicIngredient> {
        match &self.slot {
            Slot::Processed(ingredient) => Some(ingredient),
            _ => None,
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }
}

/// Accumulates any number of ingredients and drains results in FIFO order.
#[derive(Debug, Default)]
pub(super) struct Batch {
    pending: Vec<AlchemicIngredient>,
    processed: VecDeque<AlchemicIngredient>,
}

impl Batch {
    pub(super) fn load(&mut self, container: Container) {
        self.pending.push(container.into_ingredient());
    }

    pub(super) fn pending(&self) -> &[AlchemicIngredient] {
        &self.pending
    }

    pub(super) fn take_pending(&mut self) -> Vec<AlchemicIngredient> {
        mem::take(&mut self.pending)
    }

    pub(super) fn processed(&self) -> impl Iterator<Item = &AlchemicIngredient> {
        self.processed.iter()
    }

    pub(super) fn has_processed(&self) -> bool {
        !self.processed.is_empty()
    }

    pub(super) fn push_processed(&mut self, ingredient: AlchemicIngredient) {
        self.processed.push_back(ingredient);
    }

    /// Removes and returns the first processed ingredient only.
    ///
    /// Whatever exceeds the largest container is discarded.
    pub(super) fn unload(&mut self) -> Result<Option<Container>, CapacityError> {
        let Some(mut ingredient) = self.processed.pop_front() else {
            return Ok(None);
        };

        let largest = Unit::largest_container(ingredient.state()).absolute_capacity();
        if ingredient.quantity() > largest {
            tracing::warn!(
                ingredient = %ingredient,
                discarded = ingredient.quantity() - largest,
                "result exceeds the largest container",
            );
            ingredient.truncate(largest);
        }

        Container::new(ingredient).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        ingredient::IngredientType,
        support::{temperature::Temperature, units::PhysicalState},
    };

    fn water(quantity: u64) -> AlchemicIngredient {
        AlchemicIngredient::new(IngredientType::water(), quantity)
    }

    #[test]
    fn oversized_single_result_stays_in_slot() {
        let mut slot = SingleSlot::default();
        slot.load(DeviceKind::Oven, Container::new(water(8)).unwrap()).unwrap();
        slot.process(|ingredient| *ingredient = water(Unit::BARREL.absolute_capacity() + 1));

        assert!(slot.unload().is_err());
        assert!(slot.processed().is_some());
    }

    #[test]
    fn single_result_unloads_in_smallest_container() {
        let mut slot = SingleSlot::default();
        slot.load(DeviceKind::CoolingBox, Container::new(water(9)).unwrap()).unwrap();
        assert!(slot.unload().unwrap().is_none());

        slot.process(|_| {});
        let container = slot.unload().unwrap().unwrap();
        assert_eq!(container.unit(), Unit::VIAL);
        assert!(slot.is_empty());
    }

    #[test]
    fn oversized_batch_result_is_clamped_to_largest_container() {
        let barrel = Unit::BARREL.absolute_capacity();
        let mut batch = Batch::default();
        batch.push_processed(water(2 * barrel).with_temperature(Temperature::new(0, 70)));
        batch.push_processed(water(5));

        let first = batch.unload().unwrap().unwrap();
        assert_eq!(first.unit(), Unit::BARREL);
        assert_eq!(first.ingredient().quantity(), barrel);
        assert_eq!(first.ingredient().temperature(), Temperature::new(0, 70));
        assert_eq!(first.ingredient().state(), PhysicalState::Liquid);

        assert_eq!(batch.unload().unwrap().unwrap().ingredient().quantity(), 5);
        assert!(!batch.has_processed());
    }
}
