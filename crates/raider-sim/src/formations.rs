//! Formation catalog: enemy group templates gated by danger level.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use raider_core::constants::WORLD_WIDTH;
use raider_core::enums::EnemyKind;

/// Why a formation was rejected at load time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormationError {
    #[error("formation {name:?} pairs {ships} ship types with {offsets} offsets")]
    MismatchedLengths {
        name: String,
        ships: usize,
        offsets: usize,
    },
    #[error("formation {name:?} has no ships")]
    Empty { name: String },
    #[error("formation {name:?} has difficulty floor {floor} above ceiling {ceiling}")]
    InvertedBand {
        name: String,
        floor: u32,
        ceiling: u32,
    },
    #[error("formation {name:?} spread {spread} does not fit inside the world")]
    TooWide { name: String, spread: f32 },
}

/// A named group of ships spawned as one unit.
///
/// Only constructed through `Formation::new`, so every formation pairs
/// each ship type with exactly one offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formation {
    name: String,
    spread: f32,
    ship_types: Vec<EnemyKind>,
    offsets: Vec<Vec2>,
    difficulty_floor: u32,
    /// Inclusive. `None` is unbounded.
    difficulty_ceiling: Option<u32>,
}

impl Formation {
    pub fn new(
        name: impl Into<String>,
        spread: f32,
        ship_types: Vec<EnemyKind>,
        offsets: Vec<Vec2>,
        difficulty_floor: u32,
        difficulty_ceiling: Option<u32>,
    ) -> Result<Self, FormationError> {
        let name = name.into();
        if ship_types.len() != offsets.len() {
            return Err(FormationError::MismatchedLengths {
                name,
                ships: ship_types.len(),
                offsets: offsets.len(),
            });
        }
        if ship_types.is_empty() {
            return Err(FormationError::Empty { name });
        }
        if let Some(ceiling) = difficulty_ceiling {
            if ceiling < difficulty_floor {
                return Err(FormationError::InvertedBand {
                    name,
                    floor: difficulty_floor,
                    ceiling,
                });
            }
        }
        if !(0.0..=WORLD_WIDTH).contains(&spread) {
            return Err(FormationError::TooWide { name, spread });
        }
        Ok(Self {
            name,
            spread,
            ship_types,
            offsets,
            difficulty_floor,
            difficulty_ceiling,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Horizontal footprint.
    pub fn spread(&self) -> f32 {
        self.spread
    }

    pub fn difficulty_floor(&self) -> u32 {
        self.difficulty_floor
    }

    pub fn difficulty_ceiling(&self) -> Option<u32> {
        self.difficulty_ceiling
    }

    /// Whether `danger` falls inside this formation's band.
    pub fn contains(&self, danger: u32) -> bool {
        danger >= self.difficulty_floor && self.difficulty_ceiling.map_or(true, |c| danger <= c)
    }

    /// Ship types paired with their offsets from the formation origin.
    pub fn ships(&self) -> impl Iterator<Item = (EnemyKind, Vec2)> + '_ {
        self.ship_types
            .iter()
            .copied()
            .zip(self.offsets.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.ship_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ship_types.is_empty()
    }
}

/// Compiled-in formation row.
struct FormationEntry {
    name: &'static str,
    spread: f32,
    ships: &'static [(EnemyKind, f32, f32)],
    floor: u32,
    ceiling: Option<u32>,
}

use EnemyKind::{Ace, Cargo, Escort, Patrol, Zero};

const STANDARD_FORMATIONS: &[FormationEntry] = &[
    FormationEntry {
        name: "cargo ship",
        spread: 1.0,
        ships: &[(Cargo, 0.0, 0.0)],
        floor: 10,
        ceiling: Some(30),
    },
    FormationEntry {
        name: "scout",
        spread: 1.0,
        ships: &[(Patrol, 0.0, 0.0)],
        floor: 15,
        ceiling: Some(40),
    },
    FormationEntry {
        name: "convoy",
        spread: 1.0,
        ships: &[(Cargo, 0.0, 0.0), (Cargo, 0.0, 3.0), (Cargo, 0.0, 6.0)],
        floor: 25,
        ceiling: Some(50),
    },
    FormationEntry {
        name: "patrol group",
        spread: 5.0,
        ships: &[(Patrol, 0.0, 0.0), (Patrol, -2.0, 1.0), (Patrol, 2.0, 1.0)],
        floor: 35,
        ceiling: Some(75),
    },
    FormationEntry {
        name: "escorted convoy",
        spread: 3.0,
        ships: &[
            (Cargo, 0.0, 0.0),
            (Escort, 3.0, 0.0),
            (Cargo, 0.0, 3.0),
            (Cargo, 0.0, 6.0),
        ],
        floor: 45,
        ceiling: Some(100),
    },
    FormationEntry {
        name: "escort",
        spread: 1.0,
        ships: &[(Escort, 0.0, 0.0)],
        floor: 35,
        ceiling: None,
    },
    FormationEntry {
        name: "zero",
        spread: 1.0,
        ships: &[(Zero, 0.0, 0.0)],
        floor: 75,
        ceiling: None,
    },
    FormationEntry {
        name: "strike team",
        spread: 3.0,
        ships: &[(Zero, -1.0, 0.0), (Zero, 1.0, 0.0)],
        floor: 90,
        ceiling: None,
    },
    FormationEntry {
        name: "clean up",
        spread: 4.0,
        ships: &[(Escort, 0.0, 0.0), (Zero, -1.5, 0.0), (Zero, 1.5, 0.0)],
        floor: 125,
        ceiling: None,
    },
    FormationEntry {
        name: "it's a trap!",
        spread: 6.0,
        ships: &[
            (Cargo, 0.0, 0.0),
            (Cargo, 0.0, 2.0),
            (Cargo, 0.0, 4.0),
            (Zero, -2.5, 4.0),
            (Zero, -2.5, 6.0),
            (Zero, 2.5, 4.0),
            (Zero, 2.5, 6.0),
        ],
        floor: 150,
        ceiling: None,
    },
    FormationEntry {
        name: "ace",
        spread: 1.0,
        ships: &[(Ace, 0.0, 0.0)],
        floor: 125,
        ceiling: None,
    },
    FormationEntry {
        name: "death squad",
        spread: 5.0,
        ships: &[
            (Ace, 0.0, 5.0),
            (Escort, 0.0, 0.0),
            (Zero, -2.0, 7.0),
            (Zero, 2.0, 7.0),
        ],
        floor: 160,
        ceiling: None,
    },
];

/// Immutable set of formations the director picks from.
#[derive(Debug, Clone, Default)]
pub struct FormationCatalog {
    formations: Vec<Formation>,
}

impl FormationCatalog {
    pub fn new(formations: Vec<Formation>) -> Self {
        Self { formations }
    }

    /// The built-in catalog, from a cargo run at danger 10 up to the
    /// death squad at 160.
    pub fn standard() -> Result<Self, FormationError> {
        let formations = STANDARD_FORMATIONS
            .iter()
            .map(|entry| {
                let (ship_types, offsets) = entry
                    .ships
                    .iter()
                    .map(|&(kind, x, y)| (kind, Vec2::new(x, y)))
                    .unzip();
                Formation::new(
                    entry.name,
                    entry.spread,
                    ship_types,
                    offsets,
                    entry.floor,
                    entry.ceiling,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(formations))
    }

    /// Uniform pick among the formations whose band contains `danger`.
    pub fn select<R: Rng + ?Sized>(&self, danger: u32, rng: &mut R) -> Option<&Formation> {
        let candidates: Vec<&Formation> = self
            .formations
            .iter()
            .filter(|f| f.contains(danger))
            .collect();
        candidates.choose(rng).copied()
    }

    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    pub fn len(&self) -> usize {
        self.formations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }
}
