use std::{cmp::Ordering, fmt};

use crate::support::{temperature::Temperature, units::PhysicalState};

use super::IngredientType;

/// A quantity of an ingredient type at its own current temperature.
///
/// The type and quantity are fixed at construction; only the temperature
/// changes. Quantities count the smallest unit of the type's physical state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlchemicIngredient {
    kind: IngredientType,
    quantity: u64,
    temperature: Temperature,
}

impl AlchemicIngredient {
    /// Creates an ingredient at its type's standard temperature.
    #[must_use]
    pub fn new(kind: IngredientType, quantity: u64) -> Self {
        let temperature = kind.standard_temperature();
        Self {
            kind,
            quantity,
            temperature,
        }
    }

    /// Returns this ingredient at another temperature.
    #[must_use]
    pub fn with_temperature(self, temperature: Temperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    #[must_use]
    pub fn kind(&self) -> &IngredientType {
        &self.kind
    }

    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    #[must_use]
    pub fn state(&self) -> PhysicalState {
        self.kind.state()
    }

    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn heat(&mut self, amount: u64) {
        self.temperature.heat(amount);
    }

    pub fn cool(&mut self, amount: u64) {
        self.temperature.cool(amount);
    }

    /// Heats for a positive `delta` and cools for a negative one.
    pub fn adjust(&mut self, delta: i64) {
        self.temperature.adjust(delta);
    }

    /// Signed distance of the current temperature from the standard one.
    #[must_use]
    pub fn deviation(&self) -> i64 {
        Temperature::difference(&self.temperature, &self.kind.standard_temperature())
    }

    #[must_use]
    pub fn is_at_standard_temperature(&self) -> bool {
        self.deviation() == 0
    }

    /// Reduces the quantity to at most `quantity`.
    pub(crate) fn truncate(&mut self, quantity: u64) {
        self.quantity = self.quantity.min(quantity);
    }

    /// Brings the ingredient back to its standard temperature.
    pub(crate) fn normalize(&mut self) {
        self.temperature = self.kind.standard_temperature();
    }

    /// Returns the display name, prefixed with `"Heated"` or `"Cooled"` when
    /// away from the standard temperature.
    #[must_use]
    pub fn full_name(&self) -> String {
        let name = self.kind.display_name();
        match self.deviation().cmp(&0) {
            Ordering::Greater => format!("Heated {name}"),
            Ordering::Less => format!("Cooled {name}"),
            Ordering::Equal => name,
        }
    }
}

impl fmt::Display for AlchemicIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} ({}) at {}",
            self.full_name(),
            self.quantity,
            self.state(),
            self.temperature
        )
    }
}
