//! Resolves saved selections against fetched game data
//!
//! The configuration stores ids; this layer joins them to the typed
//! records the calculators consume. Ids that no longer resolve are
//! dropped silently, mirroring a selection of removed content.

use crate::api::{ApiClient, ApiError};
use crate::config::UserConfig;
use crate::data::{ArmorPiece, Aura, BossEncounter, BossMode, Familiar, Prayer};
use crate::hitpoints::{calculate_hitpoints, HitpointBreakdown, HitpointInput};
use crate::mitigation::{calculate_mitigated_damage, MitigationBreakdown, MitigationInput};
use crate::types::CombatStyle;
use tracing::warn;

/// Everything the calculators can draw on, fetched in one pass
#[derive(Debug, Clone)]
pub struct GameData {
    pub armor: Vec<ArmorPiece>,
    pub prayers: Vec<Prayer>,
    pub auras: Vec<Aura>,
    pub familiars: Vec<Familiar>,
    pub bosses: Vec<BossEncounter>,
}

impl GameData {
    /// Fetch the armor listing for one style plus all supporting data
    pub async fn load(client: &ApiClient, style: CombatStyle) -> Result<Self, ApiError> {
        Ok(GameData {
            armor: client.fetch_armor(style).await?,
            prayers: client.fetch_prayers().await?,
            auras: client.fetch_auras().await?,
            familiars: client.fetch_familiars().await?,
            bosses: client.fetch_bosses().await?,
        })
    }
}

/// A fully resolved loadout, borrowing from the fetched data
#[derive(Debug, Clone)]
pub struct Loadout<'a> {
    pub constitution_level: u32,
    pub armor_pieces: Vec<&'a ArmorPiece>,
    pub prayer: Option<&'a Prayer>,
    pub aura: Option<&'a Aura>,
    pub familiar: Option<&'a Familiar>,
    pub boss: Option<&'a BossEncounter>,
    pub mode: Option<&'a BossMode>,
    /// Enrage after clamping to the selected boss's cap
    pub enrage: u32,
}

impl<'a> Loadout<'a> {
    /// Join a configuration's ids against the fetched data
    pub fn resolve(config: &UserConfig, data: &'a GameData) -> Loadout<'a> {
        let armor_pieces: Vec<&ArmorPiece> = config
            .armor
            .iter()
            .filter_map(|(slot, id)| {
                let found = data.armor.iter().find(|piece| piece.id == *id);
                if found.is_none() {
                    warn!(%slot, id, "saved armor piece no longer resolves");
                }
                found
            })
            .collect();

        let prayer = config
            .active_prayer
            .as_deref()
            .and_then(|id| data.prayers.iter().find(|p| p.id == id));
        let aura = config
            .active_aura
            .as_deref()
            .and_then(|id| data.auras.iter().find(|a| a.id == id));
        let familiar = config
            .familiar
            .as_deref()
            .and_then(|id| data.familiars.iter().find(|f| f.id == id));
        let boss = config
            .boss
            .as_deref()
            .and_then(|id| data.bosses.iter().find(|b| b.id == id));
        let mode = boss.and_then(|boss| {
            config
                .boss_mode
                .as_deref()
                .and_then(|id| boss.modes.iter().find(|m| m.id == id))
        });

        let enrage = match boss.and_then(|b| b.enrage_cap) {
            Some(cap) => config.enrage.min(cap),
            None => config.enrage,
        };

        Loadout {
            constitution_level: config.constitution_level,
            armor_pieces,
            prayer,
            aura,
            familiar,
            boss,
            mode,
            enrage,
        }
    }

    /// Maximum hitpoints for this loadout
    pub fn hitpoints(&self) -> HitpointBreakdown {
        calculate_hitpoints(&HitpointInput {
            constitution_level: self.constitution_level,
            armor_pieces: &self.armor_pieces,
            prayer: self.prayer,
            aura: self.aura,
        })
    }

    /// Post-mitigation damage for one of the selected boss's mechanics
    pub fn mitigation(&self, mechanic: &crate::data::BossMechanic) -> MitigationBreakdown {
        calculate_mitigated_damage(&MitigationInput {
            mechanic,
            enrage: self.enrage,
            armor_pieces: &self.armor_pieces,
            prayer: self.prayer,
            aura: self.aura,
            familiar: self.familiar,
        })
    }

    /// Mitigation for every mechanic of the selected boss
    pub fn boss_mitigation(&self) -> Vec<MitigationBreakdown> {
        self.boss
            .map(|boss| {
                boss.mechanics
                    .iter()
                    .map(|mechanic| self.mitigation(mechanic))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BossMechanic, PrayerCategory};
    use crate::types::{ArmorSlot, ArmorType, AttackType};

    fn sample_data() -> GameData {
        GameData {
            armor: vec![ArmorPiece {
                id: 52296,
                name: "Masterwork platebody".to_string(),
                tier: 90,
                slot: "Torso".to_string(),
                combat_style: Some(CombatStyle::Melee),
                armor_type: ArmorType::Tank,
                armor_value: 400.0,
                damage_bonus: 0.0,
                lifepoints_bonus: 300.0,
                prayer_bonus: 0.0,
                requirement_defence: 90,
                equip_slot: "body".to_string(),
            }],
            prayers: vec![Prayer {
                id: "deflect-magic".to_string(),
                name: "Deflect Magic".to_string(),
                category: PrayerCategory::Ancient,
                drain_rate: 20.0,
                description: String::new(),
                effects: Vec::new(),
            }],
            auras: Vec::new(),
            familiars: Vec::new(),
            bosses: vec![BossEncounter {
                id: "telos".to_string(),
                name: "Telos".to_string(),
                enrage_cap: Some(999),
                modes: vec![BossMode {
                    id: "normal".to_string(),
                    name: "Normal".to_string(),
                    description: None,
                }],
                mechanics: vec![BossMechanic {
                    id: "font-blast".to_string(),
                    name: "Font blast".to_string(),
                    description: String::new(),
                    attack_type: AttackType::Magic,
                    hits: 1,
                    base_damage: 5400.0,
                    damage_formula: None,
                    can_be_avoided: true,
                    tips: None,
                    enrage_changes: Vec::new(),
                }],
            }],
        }
    }

    #[test]
    fn test_resolves_known_ids() {
        let data = sample_data();
        let mut config = UserConfig {
            active_prayer: Some("deflect-magic".to_string()),
            boss: Some("telos".to_string()),
            boss_mode: Some("normal".to_string()),
            ..UserConfig::default()
        };
        config.armor.insert(ArmorSlot::Body, 52296);

        let loadout = Loadout::resolve(&config, &data);
        assert_eq!(loadout.armor_pieces.len(), 1);
        assert!(loadout.prayer.is_some());
        assert!(loadout.boss.is_some());
        assert!(loadout.mode.is_some());
    }

    #[test]
    fn test_unknown_ids_dropped() {
        let data = sample_data();
        let mut config = UserConfig {
            active_prayer: Some("no-such-prayer".to_string()),
            boss: Some("no-such-boss".to_string()),
            ..UserConfig::default()
        };
        config.armor.insert(ArmorSlot::Head, 1);

        let loadout = Loadout::resolve(&config, &data);
        assert!(loadout.armor_pieces.is_empty());
        assert!(loadout.prayer.is_none());
        assert!(loadout.boss.is_none());
        assert!(loadout.boss_mitigation().is_empty());
    }

    #[test]
    fn test_enrage_clamped_to_boss_cap() {
        let data = sample_data();
        let config = UserConfig {
            boss: Some("telos".to_string()),
            enrage: 4000,
            ..UserConfig::default()
        };
        let loadout = Loadout::resolve(&config, &data);
        assert_eq!(loadout.enrage, 999);
    }

    #[test]
    fn test_enrage_unclamped_without_boss() {
        let data = sample_data();
        let config = UserConfig {
            enrage: 4000,
            ..UserConfig::default()
        };
        let loadout = Loadout::resolve(&config, &data);
        assert_eq!(loadout.enrage, 4000);
    }

    #[test]
    fn test_boss_mitigation_covers_all_mechanics() {
        let data = sample_data();
        let config = UserConfig {
            boss: Some("telos".to_string()),
            ..UserConfig::default()
        };
        let loadout = Loadout::resolve(&config, &data);
        let breakdowns = loadout.boss_mitigation();
        assert_eq!(breakdowns.len(), 1);
        assert_eq!(breakdowns[0].mechanic_id, "font-blast");
    }
}
