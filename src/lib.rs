//! Parsing and stat derivation for showdown style pokemon sets.
//!
//! A raw paste goes through [`normalize`] into blocks, each block through
//! [`PokemonSet::parse`] (or the whole message through [`parse_message`]),
//! and a parsed set plus a species' base stats through [`derive_stats`].
//! Everything is pure and synchronous, lookups (species, moves, natures)
//! are handed in by the caller.

#[macro_use]
extern crate log;

mod derive;
mod error;
mod ident;
mod nature;
mod normalize;
mod pokedex;
mod set;
mod stats;

pub type Result<T> = std::result::Result<T, ParseError>;

pub use crate::derive::{derive_stats, BattleStats, BossScaling};
pub use crate::error::ParseError;
pub use crate::ident::{canonicalize, display_name};
pub use crate::nature::{Nature, NatureEffect};
pub use crate::normalize::normalize;
pub use crate::pokedex::{MoveSlot, Movedex, Pokedex, Species, DEFAULT_PP};
pub use crate::set::{
    parse_message, Gender, PokemonSet, DEFAULT_BALL, DEFAULT_LEVEL, DEFAULT_MOVE, DEFAULT_NATURE,
};
pub use crate::stats::{hp_cal, parse_stat_list, stat_cal, NatureModify, Stat, Stats};
