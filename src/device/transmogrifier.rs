use crate::{
    error::CapacityError,
    ingredient::{AlchemicIngredient, Container},
    laboratory::LaboratoryId,
    support::units::convert_quantity,
};

use super::{Device, DeviceKind, slot::Batch};

/// Flips the physical state of every loaded ingredient.
#[derive(Debug, Default)]
pub struct Transmogrifier {
    batch: Batch,
    pub(super) laboratory: Option<LaboratoryId>,
}

impl Transmogrifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transmogrifier preloaded with `containers`.
    #[must_use]
    pub fn with_batch(containers: impl IntoIterator<Item = Container>) -> Self {
        let mut transmogrifier = Self::new();
        for container in containers {
            transmogrifier.batch.load(container);
        }
        transmogrifier
    }

    #[must_use]
    pub fn pending(&self) -> &[AlchemicIngredient] {
        self.batch.pending()
    }

    pub fn processed(&self) -> impl Iterator<Item = &AlchemicIngredient> {
        self.batch.processed()
    }
}

/// Returns `ingredient` in the opposite physical state.
///
/// Names, standard temperature and current temperature carry over. The
/// quantity is converted spoon for spoon and rounds down, so a round trip
/// can lose a little.
#[must_use]
pub fn transmogrify(ingredient: AlchemicIngredient) -> AlchemicIngredient {
    let from = ingredient.state();
    let to = from.opposite();

    let kind = ingredient.kind().with_state(to);
    let quantity = convert_quantity(ingredient.quantity(), from, to);
    AlchemicIngredient::new(kind, quantity).with_temperature(ingredient.temperature())
}

impl Device for Transmogrifier {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Transmogrifier
    }

    fn load(&mut self, container: Container) -> Result<(), CapacityError> {
        self.batch.load(container);
        Ok(())
    }

    fn process(&mut self) -> Result<(), CapacityError> {
        for ingredient in self.batch.take_pending() {
            let result = transmogrify(ingredient);
            tracing::debug!(ingredient = %result, state = %result.state(), "transmogrified");
            self.batch.push_processed(result);
        }
        Ok(())
    }

    fn unload(&mut self) -> Result<Option<Container>, CapacityError> {
        self.batch.unload()
    }

    fn laboratory(&self) -> Option<LaboratoryId> {
        self.laboratory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        ingredient::IngredientType,
        support::{temperature::Temperature, units::PhysicalState},
    };

    fn powder(name: &str, quantity: u64) -> AlchemicIngredient {
        let kind = IngredientType::new([name], PhysicalState::Powder, Temperature::new(0, 10));
        AlchemicIngredient::new(kind, quantity)
    }

    #[test]
    fn flips_state_and_keeps_identity() {
        let sand = powder("Sand", 12).with_temperature(Temperature::new(0, 40));
        let glass = transmogrify(sand.clone());

        assert_eq!(glass.state(), PhysicalState::Liquid);
        assert_eq!(glass.quantity(), 16);
        assert_eq!(glass.temperature(), Temperature::new(0, 40));
        assert_eq!(glass.kind().simple_name(), "Sand");
        assert_eq!(glass.kind().standard_temperature(), Temperature::new(0, 10));
        assert_ne!(glass.kind(), sand.kind());
    }

    #[test]
    fn round_trip_never_gains() {
        for quantity in [0, 1, 5, 7, 13, 100, 1_001] {
            let original = powder("Ash", quantity);
            let back = transmogrify(transmogrify(original.clone()));
            assert_eq!(back.state(), PhysicalState::Powder);
            assert!(back.quantity() <= original.quantity(), "{quantity}");
        }

        // 7 drops become 5 pinches, which become 6 drops.
        let kind = IngredientType::new(["Dew"], PhysicalState::Liquid, Temperature::ZERO);
        let twice = transmogrify(transmogrify(AlchemicIngredient::new(kind, 7)));
        assert_eq!(twice.quantity(), 6);
    }

    #[test]
    fn special_name_survives() {
        let kind = IngredientType::new(["Lead"], PhysicalState::Powder, Temperature::ZERO)
            .with_special_name("Philosopher's Dust");
        let gold = transmogrify(AlchemicIngredient::new(kind, 6));
        assert_eq!(gold.kind().display_name(), "Philosopher's Dust");
    }

    #[test]
    fn processes_every_input_and_unloads_in_order() {
        let containers = [powder("Salt", 6), powder("Sugar", 12)]
            .map(|i| Container::new(i).unwrap());
        let mut transmogrifier = Transmogrifier::with_batch(containers);
        transmogrifier.process().unwrap();

        assert!(transmogrifier.pending().is_empty());
        assert_eq!(transmogrifier.processed().count(), 2);

        let first = transmogrifier.unload().unwrap().unwrap().into_ingredient();
        let second = transmogrifier.unload().unwrap().unwrap().into_ingredient();
        assert_eq!(first.kind().simple_name(), "Salt");
        assert_eq!(first.quantity(), 8);
        assert_eq!(second.kind().simple_name(), "Sugar");
        assert!(transmogrifier.unload().unwrap().is_none());
    }
}
