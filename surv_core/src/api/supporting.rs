//! Prayers, auras, familiars and bosses from the community dataset

use super::{ApiClient, ApiError, BOSS_TTL, SUPPORTING_TTL};
use crate::data::{Aura, BossEncounter, Familiar, Prayer};

impl ApiClient {
    pub async fn fetch_prayers(&self) -> Result<Vec<Prayer>, ApiError> {
        let url = format!("{}/prayers.json", self.data_root());
        self.get_json(&url, SUPPORTING_TTL).await
    }

    pub async fn fetch_auras(&self) -> Result<Vec<Aura>, ApiError> {
        let url = format!("{}/auras.json", self.data_root());
        self.get_json(&url, SUPPORTING_TTL).await
    }

    pub async fn fetch_familiars(&self) -> Result<Vec<Familiar>, ApiError> {
        let url = format!("{}/familiars.json", self.data_root());
        self.get_json(&url, SUPPORTING_TTL).await
    }

    pub async fn fetch_bosses(&self) -> Result<Vec<BossEncounter>, ApiError> {
        let url = format!("{}/bosses.json", self.data_root());
        self.get_json(&url, BOSS_TTL).await
    }
}
