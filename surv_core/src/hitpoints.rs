//! Maximum hitpoint aggregation
//!
//! Sums flat lifepoint bonuses from the loadout sources (armor, prayer,
//! aura) on top of the constitution-level base, then adds the bonfire
//! boost as a fixed percentage of the non-aura subtotal.

use crate::data::{ArmorPiece, Aura, AuraModifierKind, Prayer, PrayerEffect};
use serde::{Deserialize, Serialize};

/// Bonfire boost as a fraction of base + armor + prayer lifepoints
pub const BONFIRE_PERCENT: f64 = 0.05;

/// Base lifepoints granted by a constitution level
///
/// `1000 + (level - 10) * 100`, so level 10 is the 1000 floor and
/// level 99 yields 9900.
pub fn calculate_base_hp(constitution_level: u32) -> f64 {
    1000.0 + (constitution_level as f64 - 10.0) * 100.0
}

/// Loadout sources feeding the hitpoint aggregation
#[derive(Debug, Clone, Copy)]
pub struct HitpointInput<'a> {
    pub constitution_level: u32,
    pub armor_pieces: &'a [&'a ArmorPiece],
    pub prayer: Option<&'a Prayer>,
    pub aura: Option<&'a Aura>,
}

/// Per-source lifepoint totals; `total_max` is the sum of the parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitpointBreakdown {
    pub base_hp: f64,
    pub armor_bonus: f64,
    pub prayer_bonus: f64,
    pub aura_bonus: f64,
    pub bonfire_bonus: f64,
    pub total_max: f64,
}

/// Flat lifepoint bonus from a prayer's effects
pub fn prayer_lifepoint_bonus(prayer: &Prayer) -> f64 {
    prayer
        .effects
        .iter()
        .filter_map(|effect| match effect {
            PrayerEffect::LifepointBonus { value } => Some(*value),
            _ => None,
        })
        .sum()
}

/// Flat lifepoint bonus from an aura's defence modifiers
pub fn aura_lifepoint_bonus(aura: &Aura) -> f64 {
    aura.modifiers
        .iter()
        .filter(|modifier| modifier.kind == AuraModifierKind::Defence)
        .map(|modifier| modifier.value)
        .sum()
}

/// Aggregate maximum hitpoints from all loadout sources
///
/// Absent selections contribute zero; every bonus source is a plain
/// sum, so supply order within a source never changes the result.
pub fn calculate_hitpoints(input: &HitpointInput) -> HitpointBreakdown {
    let base_hp = calculate_base_hp(input.constitution_level);

    let armor_bonus: f64 = input
        .armor_pieces
        .iter()
        .map(|piece| piece.lifepoints_bonus)
        .sum();

    let prayer_bonus = input.prayer.map(prayer_lifepoint_bonus).unwrap_or(0.0);
    let aura_bonus = input.aura.map(aura_lifepoint_bonus).unwrap_or(0.0);

    // The bonfire boost scales off the subtotal before aura bonuses
    let bonfire_bonus = ((base_hp + armor_bonus + prayer_bonus) * BONFIRE_PERCENT).round();
    let total_max = base_hp + armor_bonus + prayer_bonus + aura_bonus + bonfire_bonus;

    HitpointBreakdown {
        base_hp,
        armor_bonus,
        prayer_bonus,
        aura_bonus,
        bonfire_bonus,
        total_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AuraModifier, PrayerCategory};
    use crate::types::{ArmorType, ProtectionStyle};

    fn armor_piece(lifepoints_bonus: f64) -> ArmorPiece {
        ArmorPiece {
            id: 1,
            name: "Test plate".to_string(),
            tier: 90,
            slot: "Torso".to_string(),
            combat_style: None,
            armor_type: ArmorType::Tank,
            armor_value: 400.0,
            damage_bonus: 0.0,
            lifepoints_bonus,
            prayer_bonus: 0.0,
            requirement_defence: 90,
            equip_slot: "body".to_string(),
        }
    }

    fn prayer_with_lifepoints(value: f64) -> Prayer {
        Prayer {
            id: "fortitude".to_string(),
            name: "Fortitude".to_string(),
            category: PrayerCategory::Standard,
            drain_rate: 10.0,
            description: String::new(),
            effects: vec![
                PrayerEffect::LifepointBonus { value },
                PrayerEffect::DamageReduction {
                    value: 0.05,
                    style: ProtectionStyle::All,
                },
            ],
        }
    }

    fn aura_with_defence(value: f64) -> Aura {
        Aura {
            id: "vampyrism".to_string(),
            name: "Vampyrism".to_string(),
            description: String::new(),
            modifiers: vec![
                AuraModifier {
                    kind: AuraModifierKind::Defence,
                    value,
                },
                AuraModifier {
                    kind: AuraModifierKind::Healing,
                    value: 0.05,
                },
            ],
        }
    }

    #[test]
    fn test_base_hp_levels() {
        assert_eq!(calculate_base_hp(10), 1000.0);
        assert_eq!(calculate_base_hp(99), 9900.0);
        assert_eq!(calculate_base_hp(120), 12000.0);
    }

    #[test]
    fn test_empty_loadout_is_base_plus_bonfire() {
        let input = HitpointInput {
            constitution_level: 99,
            armor_pieces: &[],
            prayer: None,
            aura: None,
        };
        let breakdown = calculate_hitpoints(&input);
        assert_eq!(breakdown.base_hp, 9900.0);
        assert_eq!(breakdown.armor_bonus, 0.0);
        assert_eq!(breakdown.bonfire_bonus, 495.0);
        assert_eq!(breakdown.total_max, 10395.0);
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let pieces = [armor_piece(250.0), armor_piece(100.0)];
        let refs: Vec<&ArmorPiece> = pieces.iter().collect();
        let prayer = prayer_with_lifepoints(500.0);
        let aura = aura_with_defence(120.0);

        let input = HitpointInput {
            constitution_level: 99,
            armor_pieces: &refs,
            prayer: Some(&prayer),
            aura: Some(&aura),
        };
        let breakdown = calculate_hitpoints(&input);

        assert_eq!(breakdown.armor_bonus, 350.0);
        assert_eq!(breakdown.prayer_bonus, 500.0);
        assert_eq!(breakdown.aura_bonus, 120.0);
        // bonfire = round((9900 + 350 + 500) * 0.05) = round(537.5)
        assert_eq!(breakdown.bonfire_bonus, 538.0);
        assert_eq!(
            breakdown.total_max,
            breakdown.base_hp
                + breakdown.armor_bonus
                + breakdown.prayer_bonus
                + breakdown.aura_bonus
                + breakdown.bonfire_bonus
        );
    }

    #[test]
    fn test_aura_excluded_from_bonfire_base() {
        let aura = aura_with_defence(1000.0);
        let with_aura = calculate_hitpoints(&HitpointInput {
            constitution_level: 99,
            armor_pieces: &[],
            prayer: None,
            aura: Some(&aura),
        });
        let without_aura = calculate_hitpoints(&HitpointInput {
            constitution_level: 99,
            armor_pieces: &[],
            prayer: None,
            aura: None,
        });
        assert_eq!(with_aura.bonfire_bonus, without_aura.bonfire_bonus);
        assert_eq!(with_aura.total_max, without_aura.total_max + 1000.0);
    }

    #[test]
    fn test_armor_order_invariant() {
        let pieces = [armor_piece(250.0), armor_piece(100.0), armor_piece(75.0)];
        let forward: Vec<&ArmorPiece> = pieces.iter().collect();
        let reversed: Vec<&ArmorPiece> = pieces.iter().rev().collect();

        let base = HitpointInput {
            constitution_level: 80,
            armor_pieces: &forward,
            prayer: None,
            aura: None,
        };
        let swapped = HitpointInput {
            armor_pieces: &reversed,
            ..base
        };
        assert_eq!(
            calculate_hitpoints(&base).total_max,
            calculate_hitpoints(&swapped).total_max
        );
    }

    #[test]
    fn test_non_lifepoint_effects_ignored() {
        let prayer = Prayer {
            effects: vec![PrayerEffect::DefenceModifier { value: 0.1 }],
            ..prayer_with_lifepoints(0.0)
        };
        assert_eq!(prayer_lifepoint_bonus(&prayer), 0.0);
    }
}
