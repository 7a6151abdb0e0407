use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::support::{temperature::Temperature, units::PhysicalState};

use super::IngredientName;

/// An immutable description of a substance.
///
/// Two types are equal when their simple names, physical state and standard
/// temperature match. The special name is for display only.
#[derive(Debug, Clone)]
pub struct IngredientType {
    name: IngredientName,
    state: PhysicalState,
    standard_temperature: Temperature,
}

impl IngredientType {
    /// Creates a type from simple names.
    ///
    /// If `names` is empty or any name breaks the naming grammar, the type
    /// falls back to [`IngredientType::water`].
    pub fn new<I, S>(names: I, state: PhysicalState, standard_temperature: Temperature) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match IngredientName::new(names) {
            Some(name) => Self::from_name(name, state, standard_temperature),
            None => {
                tracing::warn!("invalid ingredient names, falling back to water");
                Self::water()
            }
        }
    }

    /// Creates a type from an already validated name.
    #[must_use]
    pub fn from_name(
        name: IngredientName,
        state: PhysicalState,
        standard_temperature: Temperature,
    ) -> Self {
        Self {
            name,
            state,
            standard_temperature,
        }
    }

    /// The default type: liquid `"Water"` at `[0, 20]`, capped at the upper limit.
    #[must_use]
    pub fn water() -> Self {
        let name = IngredientName::new(["Water"]).expect("\"Water\" is a valid name");
        let standard = Temperature::new(0, Temperature::WATER.hotness());
        Self::from_name(name, PhysicalState::Liquid, standard)
    }

    /// Sets the special name; an invalid special name is ignored.
    #[must_use]
    pub fn with_special_name(self, special: impl Into<String>) -> Self {
        Self {
            name: self.name.with_special_name(special),
            ..self
        }
    }

    /// Returns the same substance in another physical state.
    #[must_use]
    pub fn with_state(&self, state: PhysicalState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn name(&self) -> &IngredientName {
        &self.name
    }

    pub fn simple_names(&self) -> impl Iterator<Item = &str> {
        self.name.simple_names()
    }

    #[must_use]
    pub fn simple_name(&self) -> String {
        self.name.simple_name()
    }

    #[must_use]
    pub fn special_name(&self) -> Option<&str> {
        self.name.special_name()
    }

    /// Returns the special name if set, otherwise the composed simple name.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.display_name()
    }

    #[must_use]
    pub fn state(&self) -> PhysicalState {
        self.state
    }

    #[must_use]
    pub fn standard_temperature(&self) -> Temperature {
        self.standard_temperature
    }
}

impl Default for IngredientType {
    fn default() -> Self {
        Self::water()
    }
}

impl PartialEq for IngredientType {
    fn eq(&self, other: &Self) -> bool {
        self.name.simple_names().eq(other.name.simple_names())
            && self.state == other.state
            && self.standard_temperature == other.standard_temperature
    }
}

impl Eq for IngredientType {}

impl Hash for IngredientType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for name in self.name.simple_names() {
            name.hash(state);
        }
        self.state.hash(state);
        self.standard_temperature.hash(state);
    }
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
