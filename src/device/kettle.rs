use crate::{
    error::CapacityError,
    ingredient::{AlchemicIngredient, Container, IngredientName, IngredientType},
    laboratory::LaboratoryId,
    support::{
        temperature::Temperature,
        units::{PhysicalState, common_units, convert_quantity},
    },
};

use super::{Device, DeviceKind, slot::Batch};

/// Mixes every loaded ingredient into a single new one.
///
/// A kettle accepts any number of loads. Processing requires at least one
/// pending ingredient and an empty output queue.
#[derive(Debug, Default)]
pub struct Kettle {
    batch: Batch,
    pub(super) laboratory: Option<LaboratoryId>,
}

impl Kettle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a kettle preloaded with `containers`.
    #[must_use]
    pub fn with_batch(containers: impl IntoIterator<Item = Container>) -> Self {
        let mut kettle = Self::new();
        for container in containers {
            kettle.batch.load(container);
        }
        kettle
    }

    /// Ingredients waiting to be mixed, in load order.
    #[must_use]
    pub fn pending(&self) -> &[AlchemicIngredient] {
        self.batch.pending()
    }

    /// Mixed results waiting to be unloaded, oldest first.
    pub fn processed(&self) -> impl Iterator<Item = &AlchemicIngredient> {
        self.batch.processed()
    }
}

impl Device for Kettle {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Kettle
    }

    fn load(&mut self, container: Container) -> Result<(), CapacityError> {
        self.batch.load(container);
        Ok(())
    }

    fn process(&mut self) -> Result<(), CapacityError> {
        if self.batch.has_processed() {
            return Err(CapacityError::device(self.kind(), "kettle not empty"));
        }

        let Some(mixture) = mix(self.batch.pending()) else {
            return Err(CapacityError::device(self.kind(), "no ingredients to mix"));
        };

        tracing::debug!(
            inputs = self.batch.pending().len(),
            mixture = %mixture,
            temperature = %mixture.temperature(),
            "mixed",
        );
        self.batch.take_pending();
        self.batch.push_processed(mixture);
        Ok(())
    }

    fn unload(&mut self) -> Result<Option<Container>, CapacityError> {
        self.batch.unload()
    }

    fn laboratory(&self) -> Option<LaboratoryId> {
        self.laboratory
    }
}

/// Mixes `ingredients` into one, or returns `None` if there are none.
///
/// The result is built as follows:
///
/// 1. Its simple names are the sorted union of every input's simple names.
/// 2. The inputs whose standard temperature lies closest to that of water
///    decide the rest of the type. The result is liquid if any of them is
///    liquid and powder otherwise, and takes the hottest of their standard
///    temperatures.
/// 3. Its quantity sums the inputs of the resulting state, plus the inputs of
///    the other state converted (rounding down).
/// 4. Its temperature is the average of the input temperatures, weighted by
///    quantity measured in spoons. Division truncates toward zero.
#[must_use]
pub fn mix(ingredients: &[AlchemicIngredient]) -> Option<AlchemicIngredient> {
    let name = IngredientName::union(ingredients.iter().map(|i| i.kind().name()))?;

    let closest = closest_to_water(ingredients);
    let state = if closest.iter().any(|i| i.state() == PhysicalState::Liquid) {
        PhysicalState::Liquid
    } else {
        PhysicalState::Powder
    };
    let standard_temperature = closest
        .iter()
        .map(|i| i.kind().standard_temperature())
        .max()?;

    let kind = IngredientType::from_name(name, state, standard_temperature);
    let mut mixture = AlchemicIngredient::new(kind, mixed_quantity(ingredients, state));

    let average = weighted_temperature(ingredients).unwrap_or(standard_temperature);
    mixture.adjust(Temperature::difference(&average, &standard_temperature));
    Some(mixture)
}

/// Collects the inputs with minimal standard-temperature distance from water.
fn closest_to_water(ingredients: &[AlchemicIngredient]) -> Vec<&AlchemicIngredient> {
    let water = Temperature::WATER;
    let mut closest = Vec::new();
    let mut best = u64::MAX;

    for ingredient in ingredients {
        let distance =
            Temperature::difference(&ingredient.kind().standard_temperature(), &water)
                .unsigned_abs();
        if distance < best {
            best = distance;
            closest.clear();
        }
        if distance == best {
            closest.push(ingredient);
        }
    }
    closest
}

fn mixed_quantity(ingredients: &[AlchemicIngredient], state: PhysicalState) -> u64 {
    let (same, other) = ingredients.iter().fold((0_u64, 0_u64), |(same, other), i| {
        if i.state() == state {
            (same.saturating_add(i.quantity()), other)
        } else {
            (same, other.saturating_add(i.quantity()))
        }
    });
    same.saturating_add(convert_quantity(other, state.opposite(), state))
}

/// Averages temperatures weighted by common units; `None` if nothing weighs.
fn weighted_temperature(ingredients: &[AlchemicIngredient]) -> Option<Temperature> {
    let (sum, weight) = ingredients.iter().fold((0_i128, 0_i128), |(sum, weight), i| {
        let w = i128::try_from(common_units(i.state(), i.quantity())).unwrap_or(i128::MAX);
        let magnitude = i128::from(i.temperature().magnitude());
        (
            sum.saturating_add(magnitude.saturating_mul(w)),
            weight.saturating_add(w),
        )
    });

    if weight == 0 {
        return None;
    }
    let average = sum / weight;
    let average = i64::try_from(average).unwrap_or(if average < 0 { i64::MIN } else { i64::MAX });
    Some(Temperature::from_magnitude(average))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{error::Culprit, support::units::Unit};

    fn ingredient(name: &str, state: PhysicalState, standard: Temperature, q: u64) -> Container {
        let kind = IngredientType::new([name], state, standard);
        Container::new(AlchemicIngredient::new(kind, q)).unwrap()
    }

    fn water(quantity: u64) -> Container {
        Container::new(AlchemicIngredient::new(IngredientType::water(), quantity)).unwrap()
    }

    fn brew(kettle: &mut Kettle) -> AlchemicIngredient {
        kettle.process().unwrap();
        kettle.unload().unwrap().unwrap().into_ingredient()
    }

    #[test]
    fn two_waters_make_more_water() {
        let mut kettle = Kettle::with_batch([water(10), water(20)]);
        let mixture = brew(&mut kettle);

        assert_eq!(mixture.quantity(), 30);
        assert_eq!(mixture.state(), PhysicalState::Liquid);
        assert_eq!(mixture.kind().standard_temperature(), Temperature::WATER);
        assert_eq!(mixture.temperature(), Temperature::WATER);
        assert_eq!(mixture.kind().simple_name(), "Water");
        assert!(kettle.pending().is_empty());
    }

    #[test]
    fn empty_kettle_has_nothing_to_mix() {
        let mut kettle = Kettle::new();
        let err = kettle.process().unwrap_err();

        assert_eq!(err.culprit, Culprit::Device(DeviceKind::Kettle));
        assert!(err.message.contains("no ingredients"), "{err}");
    }

    #[test]
    fn unloaded_output_blocks_next_mix() {
        let mut kettle = Kettle::with_batch([water(5)]);
        kettle.process().unwrap();
        kettle.load(water(5)).unwrap();

        let err = kettle.process().unwrap_err();
        assert!(err.message.contains("not empty"), "{err}");
        assert_eq!(kettle.pending().len(), 1);

        kettle.unload().unwrap();
        assert!(kettle.process().is_ok());
    }

    #[test]
    fn oversized_mixture_is_clamped_and_frees_the_kettle() {
        let barrel = Unit::BARREL.absolute_capacity();
        let mut kettle = Kettle::with_batch([water(barrel), water(barrel)]);
        kettle.process().unwrap();

        let mixture = kettle.unload().unwrap().unwrap();
        assert_eq!(mixture.unit(), Unit::BARREL);
        assert_eq!(mixture.ingredient().quantity(), barrel);

        kettle.load(water(4)).unwrap();
        let next = brew(&mut kettle);
        assert_eq!(next.quantity(), 4);
    }

    #[test]
    fn names_are_merged_and_sorted() {
        let std = Temperature::new(0, 20);
        let mut kettle = Kettle::with_batch([
            ingredient("Sage", PhysicalState::Powder, std, 6),
            ingredient("Honey", PhysicalState::Liquid, std, 8),
            ingredient("Sage", PhysicalState::Powder, std, 6),
        ]);
        let mixture = brew(&mut kettle);
        assert_eq!(mixture.kind().simple_name(), "Honey mixed with Sage");
    }

    #[test]
    fn closest_to_water_decides_state_and_standard_temperature() {
        // Salt sits 5 away from water, oil 30 away.
        let mut kettle = Kettle::with_batch([
            ingredient("Oil", PhysicalState::Liquid, Temperature::new(0, 50), 16),
            ingredient("Salt", PhysicalState::Powder, Temperature::new(0, 15), 12),
        ]);
        let mixture = brew(&mut kettle);

        assert_eq!(mixture.state(), PhysicalState::Powder);
        assert_eq!(mixture.kind().standard_temperature(), Temperature::new(0, 15));
        // 16 drops are 2 spoons, or 12 pinches.
        assert_eq!(mixture.quantity(), 24);
    }

    #[test]
    fn liquid_wins_ties_and_hottest_standard_is_kept() {
        let mut kettle = Kettle::with_batch([
            ingredient("Sugar", PhysicalState::Powder, Temperature::new(0, 25), 6),
            ingredient("Milk", PhysicalState::Liquid, Temperature::new(0, 15), 8),
        ]);
        let mixture = brew(&mut kettle);

        assert_eq!(mixture.state(), PhysicalState::Liquid);
        assert_eq!(mixture.kind().standard_temperature(), Temperature::new(0, 25));
        // One spoon of each.
        assert_eq!(mixture.quantity(), 16);
    }

    #[test]
    fn temperature_is_weighted_by_spoons() {
        let std = Temperature::WATER;
        let tea = IngredientType::new(["Tea"], PhysicalState::Liquid, std);
        let ice = IngredientType::new(["Ice"], PhysicalState::Powder, std);
        let hot = AlchemicIngredient::new(tea, 8).with_temperature(Temperature::new(0, 100));
        let cold = AlchemicIngredient::new(ice, 18).with_temperature(Temperature::new(20, 0));

        // One spoon at +100 and three spoons at -20 average to +10.
        let mixture = mix(&[hot, cold]).unwrap();
        assert_eq!(mixture.temperature(), Temperature::new(0, 10));
        assert_eq!(mixture.full_name(), "Cooled Ice mixed with Tea");
    }

    #[test]
    fn negative_average_is_pure_coldness() {
        let std = Temperature::ZERO;
        let kind = IngredientType::new(["Frost"], PhysicalState::Liquid, std);
        let a = AlchemicIngredient::new(kind.clone(), 8).with_temperature(Temperature::new(9, 0));
        let b = AlchemicIngredient::new(kind, 16).with_temperature(Temperature::new(0, 1));

        // (-9 * 1 + 1 * 2) / 3 truncates to -2.
        let mixture = mix(&[a, b]).unwrap();
        assert_eq!(mixture.temperature(), Temperature::new(2, 0));
    }

    #[test]
    fn zero_quantities_settle_at_standard_temperature() {
        let kind = IngredientType::new(["Dust"], PhysicalState::Powder, Temperature::new(4, 0));
        let a = AlchemicIngredient::new(kind, 0).with_temperature(Temperature::new(0, 70));

        let mixture = mix(&[a]).unwrap();
        assert_eq!(mixture.quantity(), 0);
        assert_eq!(mixture.temperature(), Temperature::new(4, 0));
    }

    #[test]
    fn mix_of_nothing_is_none() {
        assert!(mix(&[]).is_none());
    }

    #[test]
    fn unloads_in_order() {
        let mut kettle = Kettle::with_batch([water(3)]);
        kettle.process().unwrap();
        assert_eq!(kettle.processed().count(), 1);

        assert_eq!(kettle.unload().unwrap().unwrap().ingredient().quantity(), 3);
        assert!(kettle.unload().unwrap().is_none());
    }
}
