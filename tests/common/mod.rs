//! Shared test fixtures for the Valorant SDK integration tests.
//!
//! Provides a wiremock upstream plus small sample payloads (one agent, one
//! map, one weapon, a handful of cosmetics) wrapped in the `{status, data}`
//! envelope the real API returns.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use valorant_sdk::ValorantSdk;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an SDK pointed at the mock upstream, locale `pt-BR`, short timeout.
pub fn sdk_at(server: &MockServer) -> ValorantSdk {
    ValorantSdk::builder()
        .base_url(server.uri())
        .language("pt-BR")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

/// Wrap `data` in the upstream response envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "status": 200, "data": data })
}

/// Mount a 200 response for `endpoint_path` (no leading slash).
pub async fn mount_ok(server: &MockServer, endpoint_path: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(data)))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Sample payloads
// ---------------------------------------------------------------------------

pub fn jett() -> Value {
    json!({
        "uuid": "add6443a-41bd-e414-f6ad-e58d267f4e95",
        "displayName": "Jett",
        "description": "Representing her home country of South Korea...",
        "developerName": "Wushu",
        "characterTags": null,
        "displayIcon": "https://media.valorant-api.com/agents/jett/displayicon.png",
        "displayIconSmall": "https://media.valorant-api.com/agents/jett/displayiconsmall.png",
        "bustPortrait": null,
        "fullPortrait": null,
        "fullPortraitV2": null,
        "killfeedPortrait": "https://media.valorant-api.com/agents/jett/killfeedportrait.png",
        "background": null,
        "backgroundGradientColors": ["7dc1dbff", "2c66a7ff"],
        "assetPath": "ShooterGame/Content/Characters/Wushu/Wushu_PrimaryAsset",
        "isFullPortraitRightFacing": false,
        "isPlayableCharacter": true,
        "isAvailableForTest": false,
        "isBaseContent": true,
        "role": {
            "uuid": "dbe8757e-9e92-4ed4-b39f-9dfc589691d4",
            "displayName": "Duelista",
            "description": "Duelists are self-sufficient fraggers.",
            "displayIcon": "https://media.valorant-api.com/agentroles/duelist/displayicon.png",
            "assetPath": "ShooterGame/Content/Characters/_Core/Roles/Assault_PrimaryDataAsset"
        },
        "abilities": [
            {
                "slot": "Ability1",
                "displayName": "Corrente de Vento",
                "description": "Dash a short distance.",
                "displayIcon": "https://media.valorant-api.com/agents/jett/abilities/ability1/displayicon.png"
            },
            {
                "slot": "Ability2",
                "displayName": "Brisa de Impulso",
                "description": "Propel upward.",
                "displayIcon": null
            }
        ],
        "voiceLine": null
    })
}

pub fn sova() -> Value {
    json!({
        "uuid": "320b2a48-4d9b-a075-30f1-1f93a9b638fa",
        "displayName": "Sova",
        "description": "Born from the eternal winter of Russia's tundra...",
        "displayIconSmall": "https://media.valorant-api.com/agents/sova/displayiconsmall.png",
        "killfeedPortrait": "https://media.valorant-api.com/agents/sova/killfeedportrait.png",
        "assetPath": "ShooterGame/Content/Characters/Hunter/Hunter_PrimaryAsset",
        "isPlayableCharacter": true,
        "role": null,
        "abilities": [],
        "voiceLine": null
    })
}

pub fn ascent() -> Value {
    json!({
        "uuid": "7eaecc1b-4337-bbf6-6ab9-04b8f06b3319",
        "displayName": "Ascent",
        "coordinates": "45°26'BF'N,12°20'Q'E",
        "displayIcon": "https://media.valorant-api.com/maps/ascent/displayicon.png",
        "listViewIcon": "https://media.valorant-api.com/maps/ascent/listviewicon.png",
        "splash": "https://media.valorant-api.com/maps/ascent/splash.png",
        "assetPath": "ShooterGame/Content/Maps/Ascent/Ascent_PrimaryAsset",
        "mapUrl": "/Game/Maps/Ascent/Ascent",
        "xMultiplier": 0.00007,
        "yMultiplier": -0.00007,
        "xScalarToAdd": 0.813895,
        "yScalarToAdd": 0.573242,
        "callouts": [
            {
                "regionName": "Alley",
                "superRegionName": "A",
                "location": { "x": -2301.0, "y": -6428.0 }
            },
            {
                "regionName": "Garden",
                "superRegionName": "A",
                "location": { "x": -4843.0, "y": -6521.0 }
            }
        ]
    })
}

pub fn vandal() -> Value {
    json!({
        "uuid": "9c82e19d-4575-0200-1a81-3eacf00cf872",
        "displayName": "Vandal",
        "category": "EEquippableCategory::Rifle",
        "displayIcon": "https://media.valorant-api.com/weapons/vandal/displayicon.png",
        "killStreamIcon": "https://media.valorant-api.com/weapons/vandal/killstreamicon.png",
        "assetPath": "ShooterGame/Content/Equippables/Guns/Rifles/AK47/AK47_PrimaryAsset",
        "weaponStats": {
            "fireRate": 9.75,
            "magazineSize": 25,
            "runSpeedMultiplier": 0.76,
            "equipTimeSeconds": 1.0,
            "reloadTimeSeconds": 2.5,
            "firstBulletAccuracy": 0.25,
            "shotgunPelletCount": 1,
            "wallPenetration": "EWallPenetrationDisplayType::Medium",
            "feature": null,
            "fireMode": null,
            "altFireType": "EWeaponAltFireDisplayType::ADS",
            "adsStats": {
                "zoomMultiplier": 1.25,
                "fireRate": 9.15,
                "runSpeedMultiplier": 0.76,
                "burstCount": 1,
                "firstBulletAccuracy": 0.157
            },
            "altShotgunStats": null,
            "airBurstStats": null,
            "damageRanges": [
                {
                    "rangeStartMeters": 0.0,
                    "rangeEndMeters": 50.0,
                    "headDamage": 160.0,
                    "bodyDamage": 40.0,
                    "legDamage": 34.0
                }
            ]
        },
        "shopData": {
            "cost": 2900,
            "category": "Rifles",
            "categoryText": "Rifles",
            "gridPosition": { "row": 1, "column": 2 },
            "canBeTrashed": true,
            "image": null,
            "newImage": "https://media.valorant-api.com/weapons/vandal/shop/newimage.png",
            "newImage2": null,
            "assetPath": "ShooterGame/Content/Equippables/Guns/Rifles/AK47/AK47_ShopData"
        },
        "skins": [
            {
                "uuid": "dc1a9a00-4d5b-9d25-0e12-5ab64efeb53f",
                "displayName": "Vandal Padrão",
                "themeUuid": "5a629df4-4765-0214-bd40-fbb96542941f",
                "contentTierUuid": null,
                "displayIcon": "https://media.valorant-api.com/weaponskins/standard/displayicon.png",
                "wallpaper": null,
                "assetPath": "ShooterGame/Content/Equippables/Guns/Skins/Default",
                "chromas": [
                    {
                        "uuid": "8f9e0bb9-4cfe-d2cc-0e4b-92a4b0ba64cd",
                        "displayName": "Vandal Padrão",
                        "displayIcon": null,
                        "fullRender": "https://media.valorant-api.com/weaponskinchromas/standard/fullrender.png",
                        "swatch": null,
                        "streamedVideo": null,
                        "assetPath": "ShooterGame/Content/Chromas/Default"
                    }
                ],
                "levels": [
                    {
                        "uuid": "5e895b2b-4b02-a7a8-fc3c-bba5ad1a50a5",
                        "displayName": "Vandal Padrão",
                        "levelItem": null,
                        "displayIcon": null,
                        "streamedVideo": null,
                        "assetPath": "ShooterGame/Content/Levels/Default"
                    }
                ]
            }
        ]
    })
}

pub fn melee() -> Value {
    json!({
        "uuid": "2f59173c-4bed-b6c3-2191-dea9b58be9c7",
        "displayName": "Melee",
        "category": "EEquippableCategory::Melee",
        "killStreamIcon": "https://media.valorant-api.com/weapons/melee/killstreamicon.png",
        "assetPath": "ShooterGame/Content/Equippables/Melee/Melee_PrimaryAsset",
        "weaponStats": null,
        "shopData": null,
        "skins": []
    })
}

pub fn sample_sprays() -> Value {
    json!([
        {
            "uuid": "0a6db78c-48b9-a32d-c47a-82be597584c1",
            "displayName": "Nice to Meet You Spray",
            "category": null,
            "themeUuid": null,
            "displayIcon": "https://media.valorant-api.com/sprays/nice/displayicon.png",
            "fullIcon": null,
            "fullTransparentIcon": null,
            "animationPng": null,
            "animationGif": null,
            "assetPath": "ShooterGame/Content/Sprays/Wave",
            "levels": [
                {
                    "uuid": "7dca1481-452f-85b7-4d6e-38b3f5a1b0eb",
                    "sprayLevel": 1,
                    "displayName": "Nice to Meet You Spray",
                    "displayIcon": null,
                    "assetPath": "ShooterGame/Content/Sprays/Wave_Level1"
                }
            ],
            "isNullSpray": false
        }
    ])
}

pub fn sample_cards() -> Value {
    json!([
        {
            "uuid": "card-vct",
            "displayName": "VCT Champions 2023 Card",
            "displayIcon": "https://media.valorant-api.com/playercards/vct/displayicon.png",
            "largeArt": "https://media.valorant-api.com/playercards/vct/largeart.png"
        },
        {
            "uuid": "card-jett",
            "displayName": "Jett Appreciation Card",
            "largeArt": "https://media.valorant-api.com/playercards/jett/largeart.png"
        },
        {
            "uuid": "card-plain",
            "displayName": "Sunset Card",
            "largeArt": "https://media.valorant-api.com/playercards/sunset/largeart.png"
        }
    ])
}

pub fn sample_bundles() -> Value {
    json!([
        {
            "uuid": "bundle-1",
            "displayName": "Elderflame",
            "displayNameSubText": null,
            "description": "Elderflame collection",
            "extraDescription": null,
            "promoDescription": null,
            "useAdditionalContext": false,
            "displayIcon": "https://media.valorant-api.com/bundles/elderflame/displayicon.png",
            "displayIcon2": "https://media.valorant-api.com/bundles/elderflame/displayicon2.png",
            "verticalPromoImage": null,
            "assetPath": "ShooterGame/Content/Bundles/Elderflame"
        }
    ])
}

pub fn sample_seasons() -> Value {
    json!([
        {
            "uuid": "season-old",
            "assetObjectName": "Episode1_CompetitiveTierDataTable",
            "assetPath": "ShooterGame/Content/Ranked/Episode1",
            "tiers": [
                { "tier": 0, "tierName": "UNRANKED", "division": "ECompetitiveDivision::UNRANKED",
                  "divisionName": "UNRANKED", "color": "ffffffff", "backgroundColor": "00000000",
                  "smallIcon": null, "largeIcon": null,
                  "rankTriangleDownIcon": null, "rankTriangleUpIcon": null }
            ]
        },
        {
            "uuid": "season-current",
            "assetObjectName": "Episode5_CompetitiveTierDataTable",
            "assetPath": "ShooterGame/Content/Ranked/Episode5",
            "tiers": [
                { "tier": 0, "tierName": "UNRANKED", "division": "ECompetitiveDivision::UNRANKED",
                  "divisionName": "UNRANKED", "color": "ffffffff", "backgroundColor": "00000000",
                  "smallIcon": null, "largeIcon": null,
                  "rankTriangleDownIcon": null, "rankTriangleUpIcon": null },
                { "tier": 3, "tierName": "FERRO 1", "division": "ECompetitiveDivision::IRON",
                  "divisionName": "FERRO", "color": "4f514fff", "backgroundColor": "828282ff",
                  "smallIcon": "https://media.valorant-api.com/competitivetiers/iron1/smallicon.png",
                  "largeIcon": "https://media.valorant-api.com/competitivetiers/iron1/largeicon.png",
                  "rankTriangleDownIcon": null, "rankTriangleUpIcon": null },
                { "tier": 4, "tierName": "FERRO 2", "division": "ECompetitiveDivision::IRON",
                  "divisionName": "FERRO", "color": "4f514fff", "backgroundColor": "828282ff",
                  "smallIcon": "https://media.valorant-api.com/competitivetiers/iron2/smallicon.png",
                  "largeIcon": null,
                  "rankTriangleDownIcon": null, "rankTriangleUpIcon": null }
            ]
        }
    ])
}
