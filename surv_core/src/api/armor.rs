//! Armor listings from the item wiki search endpoint

use super::{ApiClient, ApiError, ARMOR_TTL};
use crate::data::ArmorPiece;
use crate::types::CombatStyle;

impl ApiClient {
    /// Search URL for one combat style's armor category
    ///
    /// Built deterministically so it doubles as the cache key.
    pub(super) fn armor_url(&self, style: CombatStyle) -> String {
        format!(
            "{}?type=armour&json=1&limit=200&category={}",
            self.wiki_root(),
            style.as_str()
        )
    }

    /// Fetch the armor listing for a combat style
    ///
    /// The wiki response does not carry the style, so each returned
    /// piece is stamped with the one requested.
    pub async fn fetch_armor(&self, style: CombatStyle) -> Result<Vec<ArmorPiece>, ApiError> {
        let url = self.armor_url(style);
        let mut pieces: Vec<ArmorPiece> = self.get_json(&url, ARMOR_TTL).await?;
        for piece in &mut pieces {
            piece.combat_style = Some(style);
        }
        Ok(pieces)
    }
}
