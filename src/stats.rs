use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six stat slots every pokemon has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];

    /// The short label used in EV/IV spreads.
    pub fn abbr(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Atk",
            Stat::Defense => "Def",
            Stat::SpAttack => "SpA",
            Stat::SpDefense => "SpD",
            Stat::Speed => "Spe",
        }
    }
}

impl FromStr for Stat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stat = match s.trim().to_lowercase().as_str() {
            "hp" => Stat::Hp,
            "atk" | "attack" => Stat::Attack,
            "def" | "defense" => Stat::Defense,
            "spa" | "sp. atk" | "special attack" => Stat::SpAttack,
            "spd" | "sp. def" | "special defense" => Stat::SpDefense,
            "spe" | "speed" => Stat::Speed,
            _ => return Err(()),
        };

        Ok(stat)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpAttack => "Sp. Attack",
            Stat::SpDefense => "Sp. Defense",
            Stat::Speed => "Speed",
        };

        write!(f, "{}", name)
    }
}

/// A block of six stat values. Used for base stats, IVs and EVs alike.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub sp_atk: u8,
    pub sp_def: u8,
    pub speed: u8,
}

impl Stats {
    /// All six slots set to the same value.
    pub fn uniform(value: u8) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            sp_atk: value,
            sp_def: value,
            speed: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.atk,
            Stat::Defense => self.def,
            Stat::SpAttack => self.sp_atk,
            Stat::SpDefense => self.sp_def,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.atk = value,
            Stat::Defense => self.def = value,
            Stat::SpAttack => self.sp_atk = value,
            Stat::SpDefense => self.sp_def = value,
            Stat::Speed => self.speed = value,
        }
    }

    pub fn total(&self) -> u16 {
        Stat::ALL.iter().map(|&s| self.get(s) as u16).sum()
    }

    /// Render the slots that differ from `default` as a showdown spread,
    /// `252 SpA / 4 SpD / 252 Spe` style. Empty string when nothing does.
    pub fn spread(&self, default: u8) -> String {
        Stat::ALL
            .iter()
            .filter(|&&s| self.get(s) != default)
            .map(|&s| format!("{} {}", self.get(s), s.abbr()))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Parse a showdown style `252 Atk / 4 Def / 252 Spe` list. Every slot
/// starts at `default`, segments that do not look like `<number> <label>`
/// or use an unknown label are skipped, later duplicates win.
pub fn parse_stat_list(text: &str, default: u8) -> Stats {
    lazy_static! {
        static ref ENTRY: Regex = Regex::new(r"^(\d+)\s+(.+)$").unwrap();
    }

    let mut stats = Stats::uniform(default);

    for segment in text.split('/') {
        let caps = match ENTRY.captures(segment.trim()) {
            Some(caps) => caps,
            None => continue,
        };

        let value = match caps[1].parse::<u8>() {
            Ok(value) => value,
            Err(_) => continue,
        };

        if let Ok(stat) = caps[2].parse::<Stat>() {
            stats.set(stat, value);
        }
    }

    stats
}

pub enum NatureModify {
    Positive,
    Neutral,
    Negative,
}

impl Default for NatureModify {
    fn default() -> Self {
        Self::Neutral
    }
}

fn stat_core(base: u8, iv: u8, ev: u8, level: u8) -> u32 {
    let basic = (2 * base as u32) + iv as u32 + (ev / 4) as u32;
    basic * level as u32 / 100
}

/// ``(2*Base + IV + EV/4) * Level / 100 + Level + 10``
///
/// The HP is calculating different from other stats
pub fn hp_cal(base: u8, iv: u8, ev: u8, level: u8) -> u32 {
    stat_core(base, iv, ev, level) + level as u32 + 10
}

/// ``((2*Base + IV + EV/4) * Level / 100 + 5) * Nature``
///
/// The nature multiplier runs in integers (x11/10 and x9/10), the game
/// formula truncates at every step and floats would drift off it.
pub fn stat_cal(base: u8, iv: u8, ev: u8, level: u8, nature: NatureModify) -> u32 {
    let total = stat_core(base, iv, ev, level) + 5;
    match nature {
        NatureModify::Positive => total * 11 / 10,
        NatureModify::Negative => total * 9 / 10,
        NatureModify::Neutral => total,
    }
}
