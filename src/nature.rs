use crate::stats::{NatureModify, Stat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 25 natures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Hardy,
    Docile,
    Serious,
    Bashful,
    Quirky, // no stats modify
    Lonely,
    Brave,
    Adamant,
    Naughty, // +Attack
    Bold,
    Relaxed,
    Impish,
    Lax, // +Def
    Timid,
    Hasty,
    Jolly,
    Naive, // +Speed
    Modest,
    Mild,
    Quiet,
    Rash, // +SpAtk
    Calm,
    Gentle,
    Sassy,
    Careful, // +SpDef
}

/// The +10%/-10% bias of a nature. Both sides are `None` for the five
/// neutral natures. This is the value the derivation engine consumes, so
/// tests can feed it arbitrary pairs without going through [`Nature`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureEffect {
    pub increased: Option<Stat>,
    pub decreased: Option<Stat>,
}

impl NatureEffect {
    pub fn modify(&self, stat: Stat) -> NatureModify {
        if self.increased == Some(stat) {
            NatureModify::Positive
        } else if self.decreased == Some(stat) {
            NatureModify::Negative
        } else {
            NatureModify::Neutral
        }
    }
}

impl Nature {
    pub fn iter() -> impl Iterator<Item = Nature> {
        const ALL: [Nature; 25] = [
            Nature::Hardy,
            Nature::Docile,
            Nature::Serious,
            Nature::Bashful,
            Nature::Quirky,
            Nature::Lonely,
            Nature::Brave,
            Nature::Adamant,
            Nature::Naughty,
            Nature::Bold,
            Nature::Relaxed,
            Nature::Impish,
            Nature::Lax,
            Nature::Timid,
            Nature::Hasty,
            Nature::Jolly,
            Nature::Naive,
            Nature::Modest,
            Nature::Mild,
            Nature::Quiet,
            Nature::Rash,
            Nature::Calm,
            Nature::Gentle,
            Nature::Sassy,
            Nature::Careful,
        ];

        ALL.iter().copied()
    }

    pub fn increase(self) -> Option<Stat> {
        match self {
            Nature::Lonely | Nature::Brave | Nature::Adamant | Nature::Naughty => {
                Some(Stat::Attack)
            }
            Nature::Bold | Nature::Relaxed | Nature::Impish | Nature::Lax => Some(Stat::Defense),
            Nature::Modest | Nature::Mild | Nature::Quiet | Nature::Rash => Some(Stat::SpAttack),
            Nature::Calm | Nature::Gentle | Nature::Sassy | Nature::Careful => {
                Some(Stat::SpDefense)
            }
            Nature::Timid | Nature::Hasty | Nature::Jolly | Nature::Naive => Some(Stat::Speed),
            _ => None,
        }
    }

    pub fn decrease(self) -> Option<Stat> {
        match self {
            Nature::Bold | Nature::Timid | Nature::Modest | Nature::Calm => Some(Stat::Attack),
            Nature::Lonely | Nature::Hasty | Nature::Mild | Nature::Gentle => Some(Stat::Defense),
            Nature::Adamant | Nature::Impish | Nature::Jolly | Nature::Careful => {
                Some(Stat::SpAttack)
            }
            Nature::Naughty | Nature::Lax | Nature::Naive | Nature::Rash => Some(Stat::SpDefense),
            Nature::Brave | Nature::Relaxed | Nature::Quiet | Nature::Sassy => Some(Stat::Speed),
            _ => None,
        }
    }

    pub fn effect(self) -> NatureEffect {
        NatureEffect {
            increased: self.increase(),
            decreased: self.decrease(),
        }
    }
}

impl Default for Nature {
    fn default() -> Self {
        Nature::Hardy
    }
}

impl FromStr for Nature {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nature = match s.trim().to_lowercase().as_str() {
            "hardy" => Nature::Hardy,
            "docile" => Nature::Docile,
            "serious" => Nature::Serious,
            "bashful" => Nature::Bashful,
            "quirky" => Nature::Quirky,
            "lonely" => Nature::Lonely,
            "brave" => Nature::Brave,
            "adamant" => Nature::Adamant,
            "naughty" => Nature::Naughty,
            "bold" => Nature::Bold,
            "relaxed" => Nature::Relaxed,
            "impish" => Nature::Impish,
            "lax" => Nature::Lax,
            "timid" => Nature::Timid,
            "hasty" => Nature::Hasty,
            "jolly" => Nature::Jolly,
            "naive" => Nature::Naive,
            "modest" => Nature::Modest,
            "mild" => Nature::Mild,
            "quiet" => Nature::Quiet,
            "rash" => Nature::Rash,
            "calm" => Nature::Calm,
            "gentle" => Nature::Gentle,
            "sassy" => Nature::Sassy,
            "careful" => Nature::Careful,
            _ => return Err(()),
        };

        Ok(nature)
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
