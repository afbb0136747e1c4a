//! Core types shared across the survivability calculator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player combat style, also the armor category on the item wiki API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatStyle {
    Melee,
    Ranged,
    Magic,
    Necromancy,
}

impl CombatStyle {
    /// Get all combat styles
    pub fn all() -> &'static [CombatStyle] {
        &[
            CombatStyle::Melee,
            CombatStyle::Ranged,
            CombatStyle::Magic,
            CombatStyle::Necromancy,
        ]
    }

    /// The lowercase wire name, also the wiki search category
    pub fn as_str(self) -> &'static str {
        match self {
            CombatStyle::Melee => "melee",
            CombatStyle::Ranged => "ranged",
            CombatStyle::Magic => "magic",
            CombatStyle::Necromancy => "necromancy",
        }
    }
}

impl fmt::Display for CombatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CombatStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "melee" => Ok(CombatStyle::Melee),
            "ranged" => Ok(CombatStyle::Ranged),
            "magic" => Ok(CombatStyle::Magic),
            "necromancy" => Ok(CombatStyle::Necromancy),
            other => Err(format!("unknown combat style: {other}")),
        }
    }
}

/// Attack type of a boss mechanic
///
/// `Typeless` damage ignores style-specific protections; only an
/// all-style protection covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Melee,
    Ranged,
    Magic,
    Necromancy,
    Typeless,
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttackType::Melee => "melee",
            AttackType::Ranged => "ranged",
            AttackType::Magic => "magic",
            AttackType::Necromancy => "necromancy",
            AttackType::Typeless => "typeless",
        };
        f.write_str(name)
    }
}

/// Style a protection prayer effect applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectionStyle {
    Melee,
    Ranged,
    Magic,
    Necromancy,
    All,
}

impl ProtectionStyle {
    /// Whether this protection covers the given attack type
    pub fn covers(self, attack: AttackType) -> bool {
        match self {
            ProtectionStyle::All => true,
            ProtectionStyle::Melee => attack == AttackType::Melee,
            ProtectionStyle::Ranged => attack == AttackType::Ranged,
            ProtectionStyle::Magic => attack == AttackType::Magic,
            ProtectionStyle::Necromancy => attack == AttackType::Necromancy,
        }
    }
}

/// Equipment slot an armor piece occupies in a loadout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ArmorSlot {
    Head,
    Body,
    Legs,
    Hands,
    Feet,
    Cape,
    Ring,
    Amulet,
    Pocket,
}

impl ArmorSlot {
    /// Get all armor slots
    pub fn all() -> &'static [ArmorSlot] {
        &[
            ArmorSlot::Head,
            ArmorSlot::Body,
            ArmorSlot::Legs,
            ArmorSlot::Hands,
            ArmorSlot::Feet,
            ArmorSlot::Cape,
            ArmorSlot::Ring,
            ArmorSlot::Amulet,
            ArmorSlot::Pocket,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArmorSlot::Head => "head",
            ArmorSlot::Body => "body",
            ArmorSlot::Legs => "legs",
            ArmorSlot::Hands => "hands",
            ArmorSlot::Feet => "feet",
            ArmorSlot::Cape => "cape",
            ArmorSlot::Ring => "ring",
            ArmorSlot::Amulet => "amulet",
            ArmorSlot::Pocket => "pocket",
        }
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tank armor carries the larger flat damage reduction in the
/// mitigation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorType {
    Power,
    Tank,
}
