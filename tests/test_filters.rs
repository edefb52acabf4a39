//! View filter unit tests: search, category heuristics, weapon category
//! labels, and display-name deduplication. Pure functions, no upstream.

use serde_json::{from_value, json};
use valorant_sdk::filters::{
    self, CardCategory, CategoryKeywords, Named,
};
use valorant_sdk::models::{Agent, PlayerCard, Weapon};

fn card(uuid: &str, name: &str) -> PlayerCard {
    from_value(json!({ "uuid": uuid, "displayName": name })).unwrap()
}

fn agent(uuid: &str, name: &str) -> Agent {
    from_value(json!({ "uuid": uuid, "displayName": name })).unwrap()
}

fn weapon(name: &str, category: &str) -> Weapon {
    from_value(json!({ "uuid": name, "displayName": name, "category": category })).unwrap()
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn search_is_case_insensitive_substring() {
    let cards = vec![
        card("1", "VCT Champions 2023 Card"),
        card("2", "Sunset Card"),
        card("3", "Golden Hour"),
    ];

    let hits = filters::search_by_name(&cards, "CARD");
    assert_eq!(hits.len(), 2);

    let hits = filters::search_by_name(&cards, "sunset");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display_name(), "Sunset Card");

    let hits = filters::search_by_name(&cards, "");
    assert_eq!(hits.len(), 3);
}

// ---------------------------------------------------------------------------
// category heuristics
// ---------------------------------------------------------------------------

#[test]
fn esports_keywords_classify_cards() {
    let keywords = CategoryKeywords::default();
    assert!(filters::is_esports_themed("VCT Champions 2023", &keywords));
    assert!(filters::is_esports_themed("LOCK IN Brasil", &keywords));
    assert!(filters::is_esports_themed("Masters Tokyo", &keywords));
    assert!(!filters::is_esports_themed("Sunset Card", &keywords));
}

#[test]
fn agent_theme_matches_any_agent_name() {
    let agent_names = vec!["Jett".to_string(), "Sova".to_string()];
    assert!(filters::is_agent_themed("Jett Appreciation Card", &agent_names));
    assert!(filters::is_agent_themed("Team SOVA Forever", &agent_names));
    assert!(!filters::is_agent_themed("Sunset Card", &agent_names));
}

#[test]
fn standard_bucket_excludes_every_named_bucket() {
    let keywords = CategoryKeywords::default();
    let agent_names = vec!["Jett".to_string()];
    let cards = vec![
        card("1", "VCT Champions 2023 Card"),
        card("2", "Jett Appreciation Card"),
        card("3", "Sunset Card"),
        card("4", "Jett at Masters Card"),
    ];

    let standard = filters::filter_cards(&cards, CardCategory::Standard, &keywords, &agent_names);
    assert_eq!(standard.len(), 1);
    assert_eq!(standard[0].uuid, "3");

    // Membership in the fallback bucket implies non-membership everywhere else.
    for item in &standard {
        assert!(!filters::is_esports_themed(&item.display_name, &keywords));
        assert!(!filters::is_agent_themed(&item.display_name, &agent_names));
    }
}

#[test]
fn ambiguous_names_appear_in_multiple_named_buckets() {
    // "Jett at Masters Card" matches both heuristics; the categories are
    // evaluated independently, without a precedence order.
    let keywords = CategoryKeywords::default();
    let agent_names = vec!["Jett".to_string()];
    let cards = vec![card("4", "Jett at Masters Card")];

    let esports = filters::filter_cards(&cards, CardCategory::Esports, &keywords, &agent_names);
    let agent_themed =
        filters::filter_cards(&cards, CardCategory::AgentThemed, &keywords, &agent_names);
    assert_eq!(esports.len(), 1);
    assert_eq!(agent_themed.len(), 1);
}

#[test]
fn keyword_table_is_injectable() {
    let keywords = CategoryKeywords {
        esports: vec!["invitational".to_string()],
    };
    assert!(filters::is_esports_themed("Summer Invitational", &keywords));
    assert!(!filters::is_esports_themed("VCT Champions 2023", &keywords));
}

// ---------------------------------------------------------------------------
// weapon categories
// ---------------------------------------------------------------------------

#[test]
fn category_name_is_the_last_tag_segment() {
    assert_eq!(
        filters::weapon_category_name("EEquippableCategory::Rifle"),
        "Rifle"
    );
    assert_eq!(filters::weapon_category_name("Sidearm"), "Sidearm");
}

#[test]
fn weapon_categories_are_sorted_and_unique() {
    let weapons = vec![
        weapon("Vandal", "EEquippableCategory::Rifle"),
        weapon("Phantom", "EEquippableCategory::Rifle"),
        weapon("Classic", "EEquippableCategory::Sidearm"),
        weapon("Melee", "EEquippableCategory::Melee"),
    ];

    let categories = filters::weapon_categories(&weapons);
    assert_eq!(categories, ["Melee", "Rifle", "Sidearm"]);
}

// ---------------------------------------------------------------------------
// dedup
// ---------------------------------------------------------------------------

#[test]
fn dedup_keeps_first_order_and_last_record() {
    let agents = vec![
        agent("a1", "Jett"),
        agent("b1", "Sova"),
        agent("a2", "Jett"),
    ];

    let unique = filters::dedup_by_display_name(&agents);
    let summary: Vec<(&str, &str)> = unique
        .iter()
        .map(|a| (a.display_name.as_str(), a.uuid.as_str()))
        .collect();
    // Jett keeps its first position but the later record wins.
    assert_eq!(summary, [("Jett", "a2"), ("Sova", "b1")]);
}
