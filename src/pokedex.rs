use crate::set::PokemonSet;
use crate::stats::Stats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// PP given to a move the movedex does not know.
pub const DEFAULT_PP: u8 = 5;

/// The species record this core expects from a pokedex. Alias and fuzzy
/// name resolution live with whoever implements [`Pokedex`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub base_stats: Stats,
    pub ability: String,
    #[serde(default)]
    pub hidden_ability: Option<String>,
    pub growth_rate: String,
    /// Chance of being female, `None` for genderless lines.
    #[serde(default)]
    pub gender_ratio: Option<f32>,
    #[serde(default)]
    pub forms: Vec<String>,
}

pub trait Pokedex {
    fn species(&self, name: &str) -> Option<&Species>;
}

impl Pokedex for HashMap<String, Species> {
    fn species(&self, name: &str) -> Option<&Species> {
        self.get(&name.to_lowercase())
    }
}

pub trait Movedex {
    fn power_points(&self, id: &str) -> Option<u8>;
}

impl Movedex for HashMap<String, u8> {
    fn power_points(&self, id: &str) -> Option<u8> {
        self.get(id).copied()
    }
}

/// A learned move with its pp counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub id: String,
    pub pp: u8,
    pub max_pp: u8,
}

impl PokemonSet {
    /// Materialize the parsed move ids into slots at full pp. Moves the
    /// dex does not know still get a slot, at [`DEFAULT_PP`].
    pub fn moveset<M: Movedex>(&self, movedex: &M) -> Vec<MoveSlot> {
        self.moves
            .iter()
            .map(|id| {
                let pp = movedex.power_points(id).unwrap_or(DEFAULT_PP);

                MoveSlot {
                    id: id.clone(),
                    pp,
                    max_pp: pp,
                }
            })
            .collect()
    }
}
