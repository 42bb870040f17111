use crate::error::ParseError;
use crate::ident::{canonicalize, display_name};
use crate::nature::Nature;
use crate::normalize::{normalize, restore_breaks};
use crate::stats::{parse_stat_list, Stats};
use crate::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LEVEL: u8 = 5;
pub const DEFAULT_MOVE: &str = "tackle";
pub const DEFAULT_BALL: &str = "poke_ball";
pub const DEFAULT_NATURE: &str = "hardy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// One parsed showdown style set.
///
/// The species is kept as the raw token the user typed, resolving it
/// against a pokedex (aliases, forms) is the caller's business. Items,
/// abilities, balls, tera types and moves are canonical ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSet {
    pub species: String,
    pub nickname: Option<String>,
    pub gender: Option<Gender>,
    pub item: Option<String>,
    pub pokeball: String,
    pub ability: Option<String>,
    pub level: u8,
    pub shiny: bool,
    pub nature: String,
    pub ivs: Stats,
    pub evs: Stats,
    pub moves: Vec<String>,
    pub tera_type: Option<String>,
}

impl Default for PokemonSet {
    fn default() -> Self {
        Self {
            species: String::new(),
            nickname: None,
            gender: None,
            item: None,
            pokeball: DEFAULT_BALL.to_owned(),
            ability: None,
            level: DEFAULT_LEVEL,
            shiny: false,
            nature: DEFAULT_NATURE.to_owned(),
            ivs: Stats::uniform(31),
            evs: Stats::uniform(0),
            moves: Vec::new(),
            tera_type: None,
        }
    }
}

/// Parse a whole message, one set per blank line separated block, in
/// input order. The first broken block fails the whole call.
pub fn parse_message(raw: &str) -> Result<Vec<PokemonSet>> {
    let blocks = normalize(raw);

    if blocks.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    blocks.iter().map(|block| PokemonSet::parse(block)).collect()
}

impl PokemonSet {
    /// Parse a single set block. Unknown lines and malformed optional
    /// fields fall back to their defaults, only a missing species or a
    /// broken `Level:` line is an error.
    pub fn parse(block: &str) -> Result<Self> {
        let block = restore_breaks(block);
        let mut lines = block.lines();

        let mut set = Self::default();

        match lines.next() {
            Some(first) => set.parse_first_line(first.trim()),
            None => return Err(ParseError::MissingSpecies),
        }

        if set.species.is_empty() {
            return Err(ParseError::MissingSpecies);
        }

        for line in lines {
            set.parse_line(line.trim())?;
        }

        if set.moves.is_empty() {
            debug!("no moves in the set for {}, using {}", set.species, DEFAULT_MOVE);
            set.moves.push(DEFAULT_MOVE.to_owned());
        }

        Ok(set)
    }

    /// `Nickname (Species) (G) @ Item`, every part but the species
    /// optional.
    fn parse_first_line(&mut self, line: &str) {
        lazy_static! {
            static ref GENDER: Regex = Regex::new(r"(?i)\((m|f)\)$").unwrap();
            static ref NICKNAME: Regex = Regex::new(r"^(\S.*?)\s*\(([^()]+)\)$").unwrap();
        }

        let (left, item) = match line.split_once('@') {
            Some((left, right)) => {
                // A set glued onto one line leaks its first field into the
                // item part, cut everything from the stray colon away.
                let right = match right.find(':') {
                    Some(at) => &right[..at],
                    None => right,
                };

                (left.trim(), canonicalize(right))
            }
            None => (line.trim(), None),
        };

        self.item = item;

        let left = match GENDER.captures(left) {
            Some(caps) => {
                self.gender = if caps[1].eq_ignore_ascii_case("m") {
                    Some(Gender::Male)
                } else {
                    Some(Gender::Female)
                };

                left[..caps.get(0).unwrap().start()].trim_end()
            }
            None => left,
        };

        match NICKNAME.captures(left) {
            Some(caps) => {
                self.nickname = Some(caps[1].trim().to_owned());
                self.species = caps[2].trim().to_owned();
            }
            None => self.species = left.to_owned(),
        }
    }

    /// One rule per field, first match wins, anything else is ignored.
    fn parse_line(&mut self, line: &str) -> Result<()> {
        if let Some(rest) = line.strip_prefix("Ability:") {
            self.ability = canonicalize(rest);
        } else if let Some(rest) = line.strip_prefix("Level:") {
            let rest = rest.trim();
            self.level = rest
                .parse::<u8>()
                .ok()
                .filter(|&level| level > 0)
                .ok_or_else(|| ParseError::InvalidLevel(rest.to_owned()))?;
        } else if let Some(rest) =
            strip_prefix_ci(line, "Pokeball:").or_else(|| strip_prefix_ci(line, "Ball:"))
        {
            if let Some(ball) = canonicalize(rest) {
                self.pokeball = ball;
            }
        } else if let Some(rest) = strip_prefix_ci(line, "Shiny:") {
            self.shiny = matches!(rest.trim().to_lowercase().as_str(), "yes" | "true" | "1");
        } else if let Some(rest) = line.strip_prefix("Tera Type:") {
            self.tera_type = canonicalize(rest);
        } else if let Some(rest) = line.strip_prefix("EVs:") {
            self.evs = parse_stat_list(rest, 0);
        } else if let Some(rest) = line.strip_prefix("IVs:") {
            self.ivs = parse_stat_list(rest, 31);
        } else if line.contains("Nature") {
            // Runs before the move rule, so a `- Nature Power` bullet
            // lands here. Known quirk of the grammar.
            let nature = line.replace("Nature", "");
            let nature = nature.trim();

            if !nature.is_empty() {
                self.nature = nature.to_lowercase();
            }
        } else if let Some(rest) = line.strip_prefix('-') {
            if let Some(id) = canonicalize(rest) {
                self.moves.push(id);
            }
        } else if !line.is_empty() {
            debug!("ignoring line `{}`", line);
        }

        Ok(())
    }
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    match line.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&line[prefix.len()..]),
        _ => None,
    }
}

impl fmt::Display for PokemonSet {
    /// Renders the set back out in the canonical showdown layout.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.nickname {
            Some(nickname) => write!(f, "{} ({})", nickname, self.species)?,
            None => write!(f, "{}", self.species)?,
        }

        match self.gender {
            Some(Gender::Male) => write!(f, " (M)")?,
            Some(Gender::Female) => write!(f, " (F)")?,
            None => {}
        }

        if let Some(item) = &self.item {
            write!(f, " @ {}", display_name(item))?;
        }

        writeln!(f)?;

        if let Some(ability) = &self.ability {
            writeln!(f, "Ability: {}", display_name(ability))?;
        }

        writeln!(f, "Level: {}", self.level)?;

        if self.shiny {
            writeln!(f, "Shiny: Yes")?;
        }

        if self.pokeball != DEFAULT_BALL {
            writeln!(f, "Pokeball: {}", display_name(&self.pokeball))?;
        }

        if let Some(tera) = &self.tera_type {
            writeln!(f, "Tera Type: {}", display_name(tera))?;
        }

        let evs = self.evs.spread(0);
        if !evs.is_empty() {
            writeln!(f, "EVs: {}", evs)?;
        }

        let nature = match self.nature.parse::<Nature>() {
            Ok(nature) => nature.to_string(),
            Err(_) => display_name(&self.nature),
        };
        writeln!(f, "{} Nature", nature)?;

        let ivs = self.ivs.spread(31);
        if !ivs.is_empty() {
            writeln!(f, "IVs: {}", ivs)?;
        }

        for id in &self.moves {
            writeln!(f, "- {}", display_name(id))?;
        }

        Ok(())
    }
}
