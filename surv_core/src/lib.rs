//! surv_core - Boss survivability calculation library
//!
//! This library provides:
//! - HitpointBreakdown: aggregated maximum lifepoints from loadout sources
//! - MitigationBreakdown: per-mechanic damage through the reduction pipeline
//! - ApiClient: cached HTTP access to the item wiki and community dataset
//! - UserConfig: loadout preferences persisted as TOML

pub mod api;
pub mod cache;
pub mod config;
pub mod data;
pub mod hitpoints;
pub mod loadout;
pub mod mitigation;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use api::{ApiClient, ApiError, Endpoint, SourceCheck};
pub use cache::TtlCache;
pub use config::{ConfigError, UserConfig};
pub use data::{
    ArmorPiece, Aura, AuraModifier, AuraModifierKind, BossEncounter, BossMechanic, BossMode,
    EnrageChange, Familiar, FamiliarEffect, Prayer, PrayerEffect,
};
pub use hitpoints::{calculate_base_hp, calculate_hitpoints, HitpointBreakdown, HitpointInput};
pub use loadout::{GameData, Loadout};
pub use mitigation::{
    calculate_mitigated_damage, MitigationBreakdown, MitigationInput, MitigationStage,
};
pub use types::{ArmorSlot, ArmorType, AttackType, CombatStyle, ProtectionStyle};
