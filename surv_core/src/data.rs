//! Wire models for the two game-data sources
//!
//! Field names and tag values match the JSON served by the item wiki
//! search endpoint and the community dataset files.

use crate::types::{ArmorType, AttackType, CombatStyle, ProtectionStyle};
use serde::{Deserialize, Serialize};

/// A single piece of armor returned by the wiki item search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorPiece {
    pub id: u64,
    pub name: String,
    pub tier: u32,
    /// Free-text slot name as the wiki reports it
    pub slot: String,
    /// Stamped with the requested style after fetching; the wiki
    /// response itself omits it
    #[serde(default)]
    pub combat_style: Option<CombatStyle>,
    pub armor_type: ArmorType,
    pub armor_value: f64,
    #[serde(default)]
    pub damage_bonus: f64,
    #[serde(default)]
    pub lifepoints_bonus: f64,
    #[serde(default)]
    pub prayer_bonus: f64,
    #[serde(default)]
    pub requirement_defence: u32,
    pub equip_slot: String,
}

/// Prayer book a prayer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerCategory {
    Standard,
    Ancient,
}

/// A single effect granted by an active prayer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PrayerEffect {
    /// Percentage damage reduction against a given style (as decimal)
    #[serde(rename_all = "camelCase")]
    DamageReduction { value: f64, style: ProtectionStyle },
    /// Flat lifepoint bonus while active
    LifepointBonus { value: f64 },
    /// Defence level modifier
    DefenceModifier { value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prayer {
    pub id: String,
    pub name: String,
    pub category: PrayerCategory,
    pub drain_rate: f64,
    pub description: String,
    pub effects: Vec<PrayerEffect>,
}

/// What an aura modifier affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuraModifierKind {
    /// Multiplier on damage taken; positive values are a penalty
    DamageTaken,
    Healing,
    Accuracy,
    /// Contributes flat lifepoints in the hitpoint aggregation
    Defence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuraModifier {
    #[serde(rename = "type")]
    pub kind: AuraModifierKind,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aura {
    pub id: String,
    pub name: String,
    pub description: String,
    pub modifiers: Vec<AuraModifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamiliarCategory {
    Dps,
    Healing,
    Utility,
    Tank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealingSource {
    Passive,
    Special,
}

/// A single effect granted by a summoned familiar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FamiliarEffect {
    /// Fraction of incoming damage removed at the end of the pipeline
    DamageTakenMultiplier { value: f64 },
    Healing { value: f64, source: HealingSource },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Familiar {
    pub id: String,
    pub name: String,
    pub category: FamiliarCategory,
    pub description: String,
    pub effects: Vec<FamiliarEffect>,
}

/// A note on how a mechanic changes past an enrage threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrageChange {
    pub threshold: u32,
    pub description: String,
}

/// One attack or special in a boss encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossMechanic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub attack_type: AttackType,
    pub hits: u32,
    pub base_damage: f64,
    #[serde(default)]
    pub damage_formula: Option<String>,
    pub can_be_avoided: bool,
    #[serde(default)]
    pub tips: Option<String>,
    #[serde(default)]
    pub enrage_changes: Vec<EnrageChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossMode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossEncounter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub enrage_cap: Option<u32>,
    pub modes: Vec<BossMode>,
    pub mechanics: Vec<BossMechanic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_piece_defaults_missing_bonuses() {
        let json = r#"{
            "id": 52296,
            "name": "Masterwork platebody",
            "tier": 90,
            "slot": "Torso",
            "armorType": "power",
            "armorValue": 384.0,
            "equipSlot": "body"
        }"#;
        let piece: ArmorPiece = serde_json::from_str(json).unwrap();
        assert_eq!(piece.lifepoints_bonus, 0.0);
        assert_eq!(piece.prayer_bonus, 0.0);
        assert!(piece.combat_style.is_none());
        assert_eq!(piece.armor_type, ArmorType::Power);
    }

    #[test]
    fn test_prayer_effect_tagged_union() {
        let json = r#"[
            { "type": "damageReduction", "value": 0.5, "style": "magic" },
            { "type": "lifepointBonus", "value": 500 },
            { "type": "defenceModifier", "value": 0.1 }
        ]"#;
        let effects: Vec<PrayerEffect> = serde_json::from_str(json).unwrap();
        assert_eq!(
            effects[0],
            PrayerEffect::DamageReduction {
                value: 0.5,
                style: ProtectionStyle::Magic
            }
        );
        assert_eq!(effects[1], PrayerEffect::LifepointBonus { value: 500.0 });
    }

    #[test]
    fn test_familiar_effect_tagged_union() {
        let json = r#"{
            "id": "steel-titan",
            "name": "Steel titan",
            "category": "tank",
            "description": "Absorbs a share of incoming damage.",
            "effects": [
                { "type": "damageTakenMultiplier", "value": 0.1 },
                { "type": "healing", "value": 200, "source": "special" }
            ]
        }"#;
        let familiar: Familiar = serde_json::from_str(json).unwrap();
        assert_eq!(familiar.effects.len(), 2);
        assert_eq!(
            familiar.effects[0],
            FamiliarEffect::DamageTakenMultiplier { value: 0.1 }
        );
    }

    #[test]
    fn test_boss_encounter_optional_fields() {
        let json = r#"{
            "id": "telos",
            "name": "Telos, the Warden",
            "enrageCap": 4000,
            "modes": [{ "id": "normal", "name": "Normal" }],
            "mechanics": [{
                "id": "font-blast",
                "name": "Font blast",
                "description": "Channelled beam from the font.",
                "attackType": "magic",
                "hits": 1,
                "baseDamage": 5400,
                "canBeAvoided": true
            }]
        }"#;
        let boss: BossEncounter = serde_json::from_str(json).unwrap();
        assert_eq!(boss.enrage_cap, Some(4000));
        assert!(boss.mechanics[0].enrage_changes.is_empty());
        assert!(boss.modes[0].description.is_none());
        assert_eq!(boss.mechanics[0].attack_type, AttackType::Magic);
    }
}
