//! Prelude module for convenient imports
//!
//! ```rust
//! use surv_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ArmorSlot, ArmorType, AttackType, CombatStyle, ProtectionStyle};

// Data model
pub use crate::data::{
    ArmorPiece, Aura, BossEncounter, BossMechanic, BossMode, Familiar, Prayer,
};

// Calculations
pub use crate::hitpoints::{calculate_hitpoints, HitpointBreakdown, HitpointInput};
pub use crate::mitigation::{
    calculate_mitigated_damage, MitigationBreakdown, MitigationInput, MitigationStage,
};

// Data access
pub use crate::api::{ApiClient, ApiError};
pub use crate::loadout::{GameData, Loadout};

// Configuration
pub use crate::config::UserConfig;
