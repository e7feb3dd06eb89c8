//! Pure classification and wiki URL derivation

use anyhow::{bail, Result};
use indexmap::IndexMap;

use crate::catalog::Catalog;
use crate::types::AchievementKind;

pub const ENDINGS_PAGE: &str = "Endings";

/// Classify an achievement by keywords in its unlock text.
/// Order matters: "ending" wins over "defeated", which wins over "legendary".
pub fn classify(how_to_unlock: &str) -> AchievementKind {
    let lower = how_to_unlock.to_lowercase();
    if lower.contains("ending") {
        AchievementKind::Ending
    } else if lower.contains("defeated") {
        AchievementKind::Boss
    } else if lower.contains("legendary") {
        AchievementKind::LegendaryItems
    } else {
        AchievementKind::Misc
    }
}

/// Join a wiki base and page name: "https://wiki", "Fire+Giant" -> "https://wiki/Fire+Giant"
pub fn wiki_page_url(wiki_base: &str, page: &str) -> String {
    format!("{}/{}", wiki_base.trim_end_matches('/'), page)
}

/// Wiki page name for an achievement or boss: spaces become '+'
pub fn page_name(name: &str) -> String {
    name.replace(' ', "+")
}

/// Wiki page name for a legendary item.
/// Upgrade suffixes like " +2" are trimmed first ("Erdtree's Favor +2" -> "Erdtree's+Favor").
pub fn item_page_name(item: &str) -> String {
    page_name(item.trim_matches(|c: char| c == '+' || c == ' ' || c.is_ascii_digit()))
}

/// Legendary table key for an achievement ("Legendary Ashen Remains" -> "ashen remains")
pub fn legendary_category(achievement: &str) -> String {
    achievement.replace("Legendary ", "").to_lowercase()
}

/// A legendary item with its not-yet-validated wiki URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedItem {
    pub location: String,
    pub candidate_url: String,
}

/// Classified achievement with candidate URLs that still need validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAchievement {
    pub name: String,
    pub how_to_unlock: String,
    pub kind: AchievementKind,
    pub candidate_url: Option<String>,
    pub sub: Option<IndexMap<String, PlannedItem>>,
}

/// Classify a single catalog entry and derive its candidate URLs
pub fn plan_achievement(
    catalog: &Catalog,
    wiki_base: &str,
    name: &str,
    how_to_unlock: &str,
) -> Result<PlannedAchievement> {
    let kind = classify(how_to_unlock);

    let (candidate_url, sub) = match kind {
        AchievementKind::Ending => (Some(wiki_page_url(wiki_base, ENDINGS_PAGE)), None),
        AchievementKind::Boss => (Some(wiki_page_url(wiki_base, &page_name(name))), None),
        AchievementKind::LegendaryItems => {
            let category = legendary_category(name);
            let Some(items) = catalog.legendary_items(&category) else {
                bail!(
                    "No legendary table '{}' for achievement '{}'",
                    category,
                    name
                );
            };
            let sub = items
                .iter()
                .map(|(item, location)| {
                    (
                        item.to_string(),
                        PlannedItem {
                            location: location.to_string(),
                            candidate_url: wiki_page_url(wiki_base, &item_page_name(item)),
                        },
                    )
                })
                .collect();
            (None, Some(sub))
        }
        AchievementKind::Misc => (None, None),
    };

    Ok(PlannedAchievement {
        name: name.to_string(),
        how_to_unlock: how_to_unlock.to_string(),
        kind,
        candidate_url,
        sub,
    })
}

/// Plan every catalog entry, in catalog order
pub fn plan(catalog: &Catalog, wiki_base: &str) -> Result<Vec<PlannedAchievement>> {
    catalog
        .achievements
        .iter()
        .map(|(name, how)| plan_achievement(catalog, wiki_base, name, how))
        .collect()
}
