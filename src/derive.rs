use crate::nature::NatureEffect;
use crate::stats::{hp_cal, stat_cal, Stat, Stats};
use serde::{Deserialize, Serialize};

/// Final battle stats of a single pokemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStats {
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub sp_atk: u32,
    pub sp_def: u32,
    pub speed: u32,
}

/// Extra multipliers for boss encounters. Anything below 1.0 is lifted
/// to 1.0, a boss never comes out weaker than the regular mon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossScaling {
    pub hp_multiplier: f64,
    pub stat_multiplier: f64,
}

/// Compute the battle stats from base stats, IVs, EVs, level and nature,
/// then layer the boss multipliers on top. Nature first, scaling after,
/// the order is observable in the truncation. Speed is never boss scaled.
pub fn derive_stats(
    base: &Stats,
    ivs: &Stats,
    evs: &Stats,
    level: u8,
    nature: NatureEffect,
    scaling: Option<BossScaling>,
) -> BattleStats {
    let cal = |stat: Stat| {
        stat_cal(
            base.get(stat),
            ivs.get(stat),
            evs.get(stat),
            level,
            nature.modify(stat),
        )
    };

    let mut stats = BattleStats {
        max_hp: hp_cal(base.hp, ivs.hp, evs.hp, level),
        atk: cal(Stat::Attack),
        def: cal(Stat::Defense),
        sp_atk: cal(Stat::SpAttack),
        sp_def: cal(Stat::SpDefense),
        speed: cal(Stat::Speed),
    };

    if let Some(scaling) = scaling {
        let hp = scaling.hp_multiplier.max(1.0);
        let other = scaling.stat_multiplier.max(1.0);

        stats.max_hp = (stats.max_hp as f64 * hp) as u32;
        stats.atk = (stats.atk as f64 * other) as u32;
        stats.def = (stats.def as f64 * other) as u32;
        stats.sp_atk = (stats.sp_atk as f64 * other) as u32;
        stats.sp_def = (stats.sp_def as f64 * other) as u32;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nature::Nature;

    // Pikachu
    const BASE: Stats = Stats {
        hp: 35,
        atk: 55,
        def: 40,
        sp_atk: 50,
        sp_def: 50,
        speed: 90,
    };

    #[test]
    fn level_fifty_neutral() {
        let stats = derive_stats(
            &BASE,
            &Stats::uniform(31),
            &Stats::uniform(0),
            50,
            NatureEffect::default(),
            None,
        );

        assert_eq!(
            stats,
            BattleStats {
                max_hp: 110,
                atk: 75,
                def: 60,
                sp_atk: 70,
                sp_def: 70,
                speed: 110,
            }
        );
    }

    #[test]
    fn nature_bias_applies_to_the_right_stats() {
        let stats = derive_stats(
            &BASE,
            &Stats::uniform(31),
            &Stats::uniform(0),
            50,
            Nature::Modest.effect(),
            None,
        );

        assert_eq!(stats.sp_atk, 77); // 70 * 1.1
        assert_eq!(stats.atk, 67); // 75 * 0.9, truncated
        assert_eq!(stats.speed, 110);
        assert_eq!(stats.max_hp, 110); // hp never takes a nature
    }

    #[test]
    fn nature_applies_before_scaling() {
        let mut evs = Stats::uniform(0);
        evs.sp_atk = 252;

        let ivs = Stats::uniform(31);
        let plain = derive_stats(&BASE, &ivs, &evs, 50, Nature::Modest.effect(), None);
        assert_eq!(plain.sp_atk, 112); // ((100+31+63)*50/100 + 5) * 1.1

        let scaled = derive_stats(
            &BASE,
            &ivs,
            &evs,
            50,
            Nature::Modest.effect(),
            Some(BossScaling {
                hp_multiplier: 5.0,
                stat_multiplier: 2.0,
            }),
        );

        assert_eq!(scaled.max_hp, plain.max_hp * 5);
        assert_eq!(scaled.atk, plain.atk * 2);
        assert_eq!(scaled.def, plain.def * 2);
        assert_eq!(scaled.sp_atk, plain.sp_atk * 2);
        assert_eq!(scaled.sp_def, plain.sp_def * 2);
        assert_eq!(scaled.speed, plain.speed); // never scaled
    }

    #[test]
    fn scaling_clamps_at_one() {
        let ivs = Stats::uniform(31);
        let evs = Stats::uniform(0);
        let plain = derive_stats(&BASE, &ivs, &evs, 50, NatureEffect::default(), None);
        let shrunk = derive_stats(
            &BASE,
            &ivs,
            &evs,
            50,
            NatureEffect::default(),
            Some(BossScaling {
                hp_multiplier: 0.5,
                stat_multiplier: 0.1,
            }),
        );

        assert_eq!(shrunk, plain);
    }

    #[test]
    fn fractional_scaling_truncates() {
        let ivs = Stats::uniform(31);
        let evs = Stats::uniform(0);
        let scaled = derive_stats(
            &BASE,
            &ivs,
            &evs,
            50,
            NatureEffect::default(),
            Some(BossScaling {
                hp_multiplier: 1.5,
                stat_multiplier: 1.5,
            }),
        );

        assert_eq!(scaled.max_hp, 165); // 110 * 1.5
        assert_eq!(scaled.atk, 112); // 75 * 1.5 = 112.5
        assert_eq!(scaled.speed, 110);
    }

    #[test]
    fn neutral_derivation_is_monotonic_in_level() {
        let ivs = Stats::uniform(31);
        let evs = Stats::uniform(0);
        let mut previous = derive_stats(&BASE, &ivs, &evs, 1, NatureEffect::default(), None);

        for level in 2..=100 {
            let current = derive_stats(&BASE, &ivs, &evs, level, NatureEffect::default(), None);
            assert!(current.max_hp >= previous.max_hp, "hp dipped at {}", level);
            assert!(current.atk >= previous.atk, "atk dipped at {}", level);
            assert!(current.speed >= previous.speed, "speed dipped at {}", level);
            previous = current;
        }
    }

    #[test]
    fn injected_effect_without_the_catalog() {
        let effect = NatureEffect {
            increased: Some(Stat::Speed),
            decreased: None,
        };
        let stats = derive_stats(
            &BASE,
            &Stats::uniform(31),
            &Stats::uniform(0),
            50,
            effect,
            None,
        );

        assert_eq!(stats.speed, 121);
        assert_eq!(stats.atk, 75);
    }
}
