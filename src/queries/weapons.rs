//! Weapon and weapon-skin queries.

use std::sync::Arc;

use crate::cache::QueryKey;
use crate::client::Endpoint;
use crate::error::Result;
use crate::models::{Weapon, WeaponSkin};
use crate::schema;

use super::fetch_list;

/// Query interface for weapons and their skin line.
pub struct WeaponQuery<'a> {
    sdk: &'a crate::ValorantSdk,
}

impl<'a> WeaponQuery<'a> {
    pub fn new(sdk: &'a crate::ValorantSdk) -> Self {
        Self { sdk }
    }

    /// The weapon list, in upstream order. General freshness tier.
    pub async fn list(&self) -> Result<Arc<Vec<Weapon>>> {
        fetch_list(self.sdk, QueryKey::Weapons, Endpoint::Weapons, &schema::WEAPON).await
    }

    /// The flat skin list from `/weapons/skins`. Skins change rarely and sit
    /// in the cosmetic freshness tier.
    pub async fn skins(&self) -> Result<Arc<Vec<WeaponSkin>>> {
        fetch_list(
            self.sdk,
            QueryKey::Skins,
            Endpoint::WeaponSkins,
            &schema::WEAPON_SKIN,
        )
        .await
    }
}
