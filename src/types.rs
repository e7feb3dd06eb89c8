//! Achievement record types as written to achievements.json

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category of an achievement, derived from its unlock text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementKind {
    Boss,
    Ending,
    LegendaryItems,
    Misc,
}

impl AchievementKind {
    /// Order in which sections appear on the page
    pub const ALL: [AchievementKind; 4] = [
        AchievementKind::Boss,
        AchievementKind::Ending,
        AchievementKind::LegendaryItems,
        AchievementKind::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementKind::Boss => "BOSS",
            AchievementKind::Ending => "ENDING",
            AchievementKind::LegendaryItems => "LEGENDARY_ITEMS",
            AchievementKind::Misc => "MISC",
        }
    }

    /// Section heading used by the page renderer
    pub fn title(&self) -> &'static str {
        match self {
            AchievementKind::Boss => "Bosses",
            AchievementKind::Ending => "Endings",
            AchievementKind::LegendaryItems => "Legendary Items",
            AchievementKind::Misc => "Miscellaneous",
        }
    }
}

/// A single legendary collectible nested under a LEGENDARY_ITEMS achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendaryItem {
    #[serde(rename = "where")]
    pub location: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Complete record for one achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    #[serde(rename = "how-to-unlock")]
    pub how_to_unlock: String,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sub: Option<IndexMap<String, LegendaryItem>>,
}

/// Achievement name -> record, in catalog order
pub type Checklist = IndexMap<String, AchievementRecord>;
