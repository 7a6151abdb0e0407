use crate::{
    device::DeviceKind,
    error::CapacityError,
    ingredient::{AlchemicIngredient, Container, IngredientType},
    support::units::{Unit, common_units, to_smallest},
};

use super::Laboratory;

impl Laboratory {
    /// Stores the ingredient in `container`, consuming the container.
    ///
    /// An ingredient away from its standard temperature is brought back to
    /// it first, which takes an [`Oven`] or a [`CoolingBox`]. Storing a type
    /// that is already in stock takes a [`Kettle`]. An empty container
    /// stores nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`], leaving storage unchanged, if a required
    /// device is missing, if a different type already answers to the same
    /// name, or if the ingredient would not fit.
    ///
    /// [`CoolingBox`]: crate::device::CoolingBox
    /// [`Oven`]: crate::device::Oven
    /// [`Kettle`]: crate::device::Kettle
    pub fn store(&mut self, container: Container) -> Result<(), CapacityError> {
        let mut ingredient = container.into_ingredient();
        if ingredient.quantity() == 0 {
            return Ok(());
        }

        if !ingredient.is_at_standard_temperature() {
            if !self.has_device(DeviceKind::Oven) && !self.has_device(DeviceKind::CoolingBox) {
                return Err(CapacityError::laboratory(
                    self.id,
                    format!(
                        "{} must return to its standard temperature, \
                         which needs an oven or a cooling box",
                        ingredient.full_name(),
                    ),
                ));
            }
            ingredient.normalize();
        }

        let kind = ingredient.kind();
        if self.storage.contains_key(kind) {
            self.require(DeviceKind::Kettle, || format!("{kind} is already stored"))?;
        } else if let Some(clash) = self.storage.keys().find(|stored| names_clash(stored, kind)) {
            return Err(CapacityError::laboratory(
                self.id,
                format!("{kind} would share a name with stored {clash}"),
            ));
        }

        let needed = common_units(kind.state(), ingredient.quantity());
        let free = self.capacity.saturating_sub(self.used_capacity());
        if needed > free {
            return Err(CapacityError::laboratory(
                self.id,
                format!("{kind} needs {needed} common units but only {free} are free"),
            ));
        }

        tracing::debug!(
            id = %self.id,
            ingredient = %kind,
            quantity = ingredient.quantity(),
            "stored",
        );
        let stock = self.storage.entry(kind.clone()).or_default();
        *stock = stock.saturating_add(ingredient.quantity());
        Ok(())
    }

    /// Withdraws `amount` smallest units of the type answering to `name`.
    ///
    /// `name` is matched against composed simple names and special names.
    /// The result is at standard temperature in its smallest container.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if no type answers to `name`, if less than
    /// `amount` is in stock, or if no container holds `amount`.
    pub fn request(&mut self, name: &str, amount: u64) -> Result<Container, CapacityError> {
        let (kind, stock) = self.find(name)?;
        if amount > stock {
            return Err(CapacityError::laboratory(
                self.id,
                format!("requested {amount} of {kind} but only {stock} are stored"),
            ));
        }

        let container = Container::new(AlchemicIngredient::new(kind.clone(), amount))?;
        self.withdraw(&kind, amount);
        Ok(container)
    }

    /// Withdraws `count` of `unit` of the type answering to `name`.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `unit` measures the other physical
    /// state, and otherwise as [`Laboratory::request`].
    pub fn request_in(
        &mut self,
        name: &str,
        count: u64,
        unit: Unit,
    ) -> Result<Container, CapacityError> {
        let (kind, _) = self.find(name)?;
        if unit.state() != kind.state() {
            return Err(CapacityError::laboratory(
                self.id,
                format!("{kind} is a {} and cannot be measured in {unit}", kind.state()),
            ));
        }
        self.request(name, to_smallest(count, unit))
    }

    /// Withdraws the whole stock of the type answering to `name`.
    ///
    /// Stock beyond the largest container is discarded.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if no type answers to `name`.
    pub fn request_all(&mut self, name: &str) -> Result<Container, CapacityError> {
        let (kind, stock) = self.find(name)?;

        let largest = Unit::largest_container(kind.state());
        let amount = stock.min(largest.absolute_capacity());
        if amount < stock {
            tracing::warn!(
                id = %self.id,
                ingredient = %kind,
                discarded = stock - amount,
                "stock exceeds the largest container",
            );
        }

        let container = Container::new(AlchemicIngredient::new(kind.clone(), amount))?;
        self.storage.remove(&kind);
        Ok(container)
    }

    /// Stock of the type answering to `name`, in smallest units.
    #[must_use]
    pub fn quantity_of(&self, name: &str) -> Option<u64> {
        self.find(name).ok().map(|(_, stock)| stock)
    }

    /// Every stored type with its stock, in no particular order.
    pub fn stored_types(&self) -> impl Iterator<Item = (&IngredientType, u64)> {
        self.storage.iter().map(|(kind, &stock)| (kind, stock))
    }

    fn find(&self, name: &str) -> Result<(IngredientType, u64), CapacityError> {
        self.storage
            .iter()
            .find(|(kind, _)| kind.name().answers_to(name))
            .map(|(kind, &stock)| (kind.clone(), stock))
            .ok_or_else(|| {
                CapacityError::laboratory(self.id, format!("no ingredient named {name}"))
            })
    }

    fn withdraw(&mut self, kind: &IngredientType, amount: u64) {
        if let Some(stock) = self.storage.get_mut(kind) {
            *stock -= amount;
            if *stock == 0 {
                self.storage.remove(kind);
            }
        }
    }

    fn require(
        &self,
        kind: DeviceKind,
        reason: impl FnOnce() -> String,
    ) -> Result<(), CapacityError> {
        if self.has_device(kind) {
            return Ok(());
        }
        Err(CapacityError::both(kind, self.id, format!("{}, which needs a {kind}", reason())))
    }
}

/// Checks whether two different types answer to a common name.
fn names_clash(a: &IngredientType, b: &IngredientType) -> bool {
    let answers = |kind: &IngredientType, other: &IngredientType| {
        kind.name().answers_to(&other.simple_name())
            || other.special_name().is_some_and(|special| kind.name().answers_to(special))
    };
    a != b && (answers(a, b) || answers(b, a))
}
