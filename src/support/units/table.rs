use std::fmt;

use PhysicalState::{Liquid, Powder};

/// The physical state of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalState {
    Liquid,
    Powder,
}

impl PhysicalState {
    /// Returns the other state.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Liquid => Self::Powder,
            Self::Powder => Self::Liquid,
        }
    }
}

impl fmt::Display for PhysicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Liquid => "liquid",
            Self::Powder => "powder",
        })
    }
}

/// A measurement unit of one physical state.
///
/// Units are rows of a constant table. Within a state, indices start at 1
/// for the smallest unit and increase by one per row; `capacity` is how many
/// of the previous unit fit into this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    state: PhysicalState,
    index: usize,
    name: &'static str,
    capacity: u64,
    container: bool,
}

const fn row(
    state: PhysicalState,
    index: usize,
    name: &'static str,
    capacity: u64,
    container: bool,
) -> Unit {
    Unit {
        state,
        index,
        name,
        capacity,
        container,
    }
}

impl Unit {
    pub const DROP: Self = row(Liquid, 1, "drop", 1, false);
    pub const LIQUID_SPOON: Self = row(Liquid, 2, "spoon", 8, true);
    pub const VIAL: Self = row(Liquid, 3, "vial", 5, true);
    pub const BOTTLE: Self = row(Liquid, 4, "bottle", 3, true);
    pub const JUG: Self = row(Liquid, 5, "jug", 7, true);
    pub const BARREL: Self = row(Liquid, 6, "barrel", 12, true);
    pub const LIQUID_STOREROOM: Self = row(Liquid, 7, "storeroom", 5, false);

    pub const PINCH: Self = row(Powder, 1, "pinch", 1, false);
    pub const POWDER_SPOON: Self = row(Powder, 2, "spoon", 6, true);
    pub const SACHET: Self = row(Powder, 3, "sachet", 7, true);
    pub const BOX: Self = row(Powder, 4, "box", 6, true);
    pub const SACK: Self = row(Powder, 5, "sack", 3, true);
    pub const CHEST: Self = row(Powder, 6, "chest", 10, true);
    pub const POWDER_STOREROOM: Self = row(Powder, 7, "storeroom", 5, false);

    /// Returns every unit of `state`, smallest first.
    #[must_use]
    pub fn units_of(state: PhysicalState) -> &'static [Unit] {
        match state {
            Liquid => &LIQUID_UNITS,
            Powder => &POWDER_UNITS,
        }
    }

    /// Returns the units of `state` that can be handed out as containers.
    pub fn containers_of(state: PhysicalState) -> impl Iterator<Item = Unit> {
        Self::units_of(state).iter().copied().filter(Unit::is_container)
    }

    /// Returns the smallest unit of `state` (drop or pinch).
    #[must_use]
    pub fn smallest(state: PhysicalState) -> Self {
        Self::units_of(state)[0]
    }

    /// Returns the spoon of `state`.
    #[must_use]
    pub fn spoon(state: PhysicalState) -> Self {
        match state {
            Liquid => Self::LIQUID_SPOON,
            Powder => Self::POWDER_SPOON,
        }
    }

    /// Returns the storeroom of `state`.
    #[must_use]
    pub fn storeroom(state: PhysicalState) -> Self {
        match state {
            Liquid => Self::LIQUID_STOREROOM,
            Powder => Self::POWDER_STOREROOM,
        }
    }

    /// Returns the container of `state` with the largest absolute capacity.
    #[must_use]
    pub fn largest_container(state: PhysicalState) -> Self {
        match state {
            Liquid => Self::BARREL,
            Powder => Self::CHEST,
        }
    }

    #[must_use]
    pub const fn state(&self) -> PhysicalState {
        self.state
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Capacity relative to the previous unit of the same state.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.container
    }

    /// Returns how many of the smallest unit this unit holds.
    #[must_use]
    pub fn absolute_capacity(&self) -> u64 {
        Self::units_of(self.state)[..self.index]
            .iter()
            .map(Unit::capacity)
            .product()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.state)
    }
}

static LIQUID_UNITS: [Unit; 7] = [
    Unit::DROP,
    Unit::LIQUID_SPOON,
    Unit::VIAL,
    Unit::BOTTLE,
    Unit::JUG,
    Unit::BARREL,
    Unit::LIQUID_STOREROOM,
];

static POWDER_UNITS: [Unit; 7] = [
    Unit::PINCH,
    Unit::POWDER_SPOON,
    Unit::SACHET,
    Unit::BOX,
    Unit::SACK,
    Unit::CHEST,
    Unit::POWDER_STOREROOM,
];
