//! Damage mitigation pipeline
//!
//! Applies the fixed reduction sequence to a boss mechanic's base
//! damage: enrage scaling, then armor, prayer, aura, and familiar in
//! that order. Each step is multiplicative, so the trace is
//! monotonically non-increasing under every additional positive
//! reduction (the aura step is a penalty and may raise it).

use crate::data::{
    ArmorPiece, Aura, AuraModifierKind, BossMechanic, Familiar, FamiliarEffect, Prayer,
    PrayerEffect,
};
use crate::types::{ArmorType, AttackType};
use serde::{Deserialize, Serialize};

/// Flat reduction when any equipped piece is tank armor
pub const TANK_ARMOR_REDUCTION: f64 = 0.12;
/// Baseline reduction applied even without tank armor
pub const BASE_ARMOR_REDUCTION: f64 = 0.05;

/// Stage of the mitigation pipeline, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MitigationStage {
    Base,
    Armor,
    Prayer,
    Aura,
    Familiar,
}

impl MitigationStage {
    pub fn label(self) -> &'static str {
        match self {
            MitigationStage::Base => "Base",
            MitigationStage::Armor => "Armor",
            MitigationStage::Prayer => "Prayer",
            MitigationStage::Aura => "Aura",
            MitigationStage::Familiar => "Familiar",
        }
    }
}

/// Damage remaining after a pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDamage {
    pub stage: MitigationStage,
    pub damage: f64,
}

/// Full trace of one mechanic through the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationBreakdown {
    pub mechanic_id: String,
    pub final_damage: f64,
    pub stages: Vec<StageDamage>,
}

/// Loadout sources feeding the mitigation pipeline
#[derive(Debug, Clone, Copy)]
pub struct MitigationInput<'a> {
    pub mechanic: &'a BossMechanic,
    /// Enrage percentage points (100 = 100%)
    pub enrage: u32,
    pub armor_pieces: &'a [&'a ArmorPiece],
    pub prayer: Option<&'a Prayer>,
    pub aura: Option<&'a Aura>,
    pub familiar: Option<&'a Familiar>,
}

/// Enrage scales base damage by 0.1% per point
pub fn enrage_multiplier(enrage: u32) -> f64 {
    1.0 + enrage as f64 / 1000.0
}

/// Armor step reduction: tank armor anywhere in the loadout upgrades
/// the baseline
pub fn armor_reduction(armor_pieces: &[&ArmorPiece]) -> f64 {
    if armor_pieces
        .iter()
        .any(|piece| piece.armor_type == ArmorType::Tank)
    {
        TANK_ARMOR_REDUCTION
    } else {
        BASE_ARMOR_REDUCTION
    }
}

/// First damage-reduction effect covering the mechanic's attack type
pub fn prayer_reduction(prayer: &Prayer, attack: AttackType) -> f64 {
    prayer
        .effects
        .iter()
        .find_map(|effect| match effect {
            PrayerEffect::DamageReduction { value, style } if style.covers(attack) => Some(*value),
            _ => None,
        })
        .unwrap_or(0.0)
}

/// Summed damage-taken penalty from an aura (0 when none apply)
pub fn aura_damage_penalty(aura: &Aura) -> f64 {
    aura.modifiers
        .iter()
        .filter(|modifier| modifier.kind == AuraModifierKind::DamageTaken)
        .map(|modifier| modifier.value)
        .sum()
}

/// First damage-taken multiplier granted by a familiar
pub fn familiar_reduction(familiar: &Familiar) -> f64 {
    familiar
        .effects
        .iter()
        .find_map(|effect| match effect {
            FamiliarEffect::DamageTakenMultiplier { value } => Some(*value),
            _ => None,
        })
        .unwrap_or(0.0)
}

/// Run one mechanic through the full pipeline
pub fn calculate_mitigated_damage(input: &MitigationInput) -> MitigationBreakdown {
    let base = input.mechanic.base_damage * enrage_multiplier(input.enrage);

    // Step 1: armor
    let after_armor = base * (1.0 - armor_reduction(input.armor_pieces));

    // Step 2: prayer, matched against the mechanic's attack type
    let prayer_value = input
        .prayer
        .map(|prayer| prayer_reduction(prayer, input.mechanic.attack_type))
        .unwrap_or(0.0);
    let after_prayer = after_armor * (1.0 - prayer_value);

    // Step 3: aura penalty scales damage up
    let aura_penalty = input.aura.map(aura_damage_penalty).unwrap_or(0.0);
    let after_aura = after_prayer * (1.0 + aura_penalty);

    // Step 4: familiar absorption
    let familiar_value = input.familiar.map(familiar_reduction).unwrap_or(0.0);
    let final_damage = after_aura * (1.0 - familiar_value);

    MitigationBreakdown {
        mechanic_id: input.mechanic.id.clone(),
        final_damage,
        stages: vec![
            StageDamage {
                stage: MitigationStage::Base,
                damage: base,
            },
            StageDamage {
                stage: MitigationStage::Armor,
                damage: after_armor,
            },
            StageDamage {
                stage: MitigationStage::Prayer,
                damage: after_prayer,
            },
            StageDamage {
                stage: MitigationStage::Aura,
                damage: after_aura,
            },
            StageDamage {
                stage: MitigationStage::Familiar,
                damage: final_damage,
            },
        ],
    }
}
