use crate::{
    error::CapacityError,
    support::units::{Unit, smallest_container},
};

use super::AlchemicIngredient;

/// A disposable vessel holding exactly one ingredient.
///
/// Loading a container into a device or storing it in a laboratory consumes
/// it; only [`Container::into_ingredient`] gets the contents back out.
#[derive(Debug, PartialEq, Eq)]
pub struct Container {
    unit: Unit,
    ingredient: AlchemicIngredient,
}

impl Container {
    /// Puts `ingredient` in the smallest container that holds it.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if no container of the ingredient's state
    /// is large enough.
    pub fn new(ingredient: AlchemicIngredient) -> Result<Self, CapacityError> {
        let unit = smallest_container(ingredient.state(), ingredient.quantity())?;
        Ok(Self::sized(unit, ingredient))
    }

    /// Binds `ingredient` to a `unit` already chosen by [`smallest_container`].
    pub(crate) fn sized(unit: Unit, ingredient: AlchemicIngredient) -> Self {
        Self { unit, ingredient }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn ingredient(&self) -> &AlchemicIngredient {
        &self.ingredient
    }

    /// Empties the container, destroying it.
    #[must_use]
    pub fn into_ingredient(self) -> AlchemicIngredient {
        self.ingredient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        error::Culprit,
        ingredient::IngredientType,
        support::{temperature::Temperature, units::PhysicalState},
    };

    #[test]
    fn sized_to_contents() {
        let salt = IngredientType::new(["Salt"], PhysicalState::Powder, Temperature::new(0, 10));

        let container = Container::new(AlchemicIngredient::new(salt.clone(), 6)).unwrap();
        assert_eq!(container.unit(), Unit::POWDER_SPOON);

        let container = Container::new(AlchemicIngredient::new(salt, 7)).unwrap();
        assert_eq!(container.unit(), Unit::SACHET);
        assert_eq!(container.into_ingredient().quantity(), 7);
    }

    #[test]
    fn oversized_contents_are_rejected() {
        let ingredient = AlchemicIngredient::new(IngredientType::water(), 10_081);
        let err = Container::new(ingredient).unwrap_err();
        assert_eq!(err.culprit, Culprit::Container);
    }
}
