use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::classify::{plan, wiki_page_url, PlannedAchievement};
use crate::config::Settings;
use crate::links::{HttpLinkChecker, LinkChecker, LinkStatus, OfflineChecker};
use crate::types::{AchievementKind, AchievementRecord, Checklist, LegendaryItem};

pub const DATA_FILE: &str = "achievements.json";

/// Counts of link validation outcomes for the run summary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkStats {
    pub kept: u32,
    pub unreachable: u32,
    pub failed: u32,
}

impl LinkStats {
    fn record(&mut self, status: &LinkStatus) {
        match status {
            LinkStatus::Reachable => self.kept += 1,
            LinkStatus::Unreachable(_) => self.unreachable += 1,
            LinkStatus::Failed(_) => self.failed += 1,
        }
    }
}

/// Check a candidate URL and keep it only if it's reachable
fn validate(checker: &dyn LinkChecker, url: String, stats: &mut LinkStats) -> Option<String> {
    let status = checker.check(&url);
    stats.record(&status);
    match &status {
        LinkStatus::Reachable => {}
        LinkStatus::Unreachable(code) => log::warn!("Wiki link returned {}: {}", code, url),
        LinkStatus::Failed(reason) => log::warn!("Could not fetch wiki link: {} ({})", url, reason),
    }
    status.into_url(url)
}

/// Turn a planned achievement into its final record, validating every candidate URL
fn finalize(
    planned: PlannedAchievement,
    checker: &dyn LinkChecker,
    stats: &mut LinkStats,
) -> AchievementRecord {
    let url = planned
        .candidate_url
        .and_then(|url| validate(checker, url, stats));

    let sub = planned.sub.map(|items| {
        items
            .into_iter()
            .map(|(name, item)| {
                let url = validate(checker, item.candidate_url, stats);
                (
                    name,
                    LegendaryItem {
                        location: item.location,
                        url,
                    },
                )
            })
            .collect()
    });

    AchievementRecord {
        how_to_unlock: planned.how_to_unlock,
        kind: planned.kind,
        url,
        sub,
    }
}

/// Build the full checklist: classify, validate links, then apply manual overrides
pub fn build_checklist(
    catalog: &Catalog,
    wiki_base: &str,
    checker: &dyn LinkChecker,
) -> Result<(Checklist, LinkStats)> {
    let planned = plan(catalog, wiki_base)?;
    let mut stats = LinkStats::default();
    let mut checklist = Checklist::new();

    for entry in planned {
        let name = entry.name.clone();
        let record = finalize(entry, checker, &mut stats);
        if checklist.insert(name.clone(), record).is_some() {
            bail!("Duplicate achievement in catalog: {}", name);
        }
    }

    // Some pages aren't named after the achievement
    for (name, page) in catalog.url_overrides {
        let Some(record) = checklist.get_mut(*name) else {
            bail!("URL override for unknown achievement: {}", name);
        };
        record.url = Some(wiki_page_url(wiki_base, page));
    }

    Ok((checklist, stats))
}

/// Serialize the checklist with 4-space indentation
pub fn to_json(checklist: &Checklist) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    checklist.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Replace `path` with the serialized checklist via a sibling temp file
pub fn write_checklist(path: &Path, checklist: &Checklist) -> Result<()> {
    let json = to_json(checklist)?;

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    fs::write(tmp_path, json)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    if let Err(e) = fs::rename(tmp_path, path) {
        let _ = fs::remove_file(tmp_path);
        return Err(e).with_context(|| format!("Failed to move {} into place", path.display()));
    }
    Ok(())
}

pub fn run_data(output: &Path, settings: &Settings, offline: bool) -> Result<()> {
    let catalog = Catalog::builtin();

    let checker: Box<dyn LinkChecker> = if offline {
        log::info!("Offline mode: derived wiki links will be omitted");
        Box::new(OfflineChecker)
    } else {
        Box::new(HttpLinkChecker::new(settings)?)
    };

    log::info!(
        "Building {} achievements against {}...",
        catalog.achievements.len(),
        settings.wiki_base
    );
    let (checklist, stats) = build_checklist(&catalog, &settings.wiki_base, checker.as_ref())?;

    log::info!(
        "Links: {} kept, {} unreachable, {} failed",
        stats.kept,
        stats.unreachable,
        stats.failed
    );

    for kind in AchievementKind::ALL {
        let count = checklist.values().filter(|r| r.kind == kind).count();
        log::info!("  {}: {}", kind.as_str(), count);
    }

    write_checklist(output, &checklist)?;
    log::info!("Wrote {} achievements to {}", checklist.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WIKI_BASE;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Answers from a fixed table; unknown URLs fail like a network error
    struct ScriptedChecker {
        responses: HashMap<String, LinkStatus>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedChecker {
        fn new(responses: &[(&str, LinkStatus)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(u, s)| (u.to_string(), s.clone()))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LinkChecker for ScriptedChecker {
        fn check(&self, url: &str) -> LinkStatus {
            self.calls.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .unwrap_or_else(|| LinkStatus::Failed("connection refused".to_string()))
        }
    }

    const TEST_ACHIEVEMENTS: &[(&str, &str)] = &[
        ("Roundtable Hold", "Arrived at Roundtable Hold"),
        ("Fire Giant", "Defeated Fire Giant"),
        ("Elden Lord", "Achieved the \"Elden Lord\" ending"),
        ("Legendary Talismans", "Acquired all legendary talismans"),
        ("Shardbearer Godrick", "Defeated Shardbearer Godrick"),
    ];
    const TEST_TALISMANS: &[(&str, &str)] = &[
        ("Radagon Icon", "Debate Parlor"),
        ("Erdtree's Favor +2", "Leyndell, Ashen Capital"),
    ];
    const TEST_LEGENDARIES: &[(&str, &[(&str, &str)])] = &[("talismans", TEST_TALISMANS)];
    const TEST_OVERRIDES: &[(&str, &str)] = &[("Shardbearer Godrick", "Godrick+the+Grafted")];

    fn test_catalog() -> Catalog {
        Catalog {
            achievements: TEST_ACHIEVEMENTS,
            legendaries: TEST_LEGENDARIES,
            url_overrides: TEST_OVERRIDES,
        }
    }

    fn url(page: &str) -> String {
        format!("{}/{}", DEFAULT_WIKI_BASE, page)
    }

    #[test]
    fn test_build_checklist_validates_links() {
        let fire_giant = url("Fire+Giant");
        let endings = url("Endings");
        let radagon = url("Radagon+Icon");
        let favor = url("Erdtree's+Favor");
        let checker = ScriptedChecker::new(&[
            (fire_giant.as_str(), LinkStatus::Reachable),
            (endings.as_str(), LinkStatus::Unreachable(404)),
            (radagon.as_str(), LinkStatus::Reachable),
            (favor.as_str(), LinkStatus::Unreachable(500)),
        ]);

        let (checklist, stats) =
            build_checklist(&test_catalog(), DEFAULT_WIKI_BASE, &checker).unwrap();

        let hold = &checklist["Roundtable Hold"];
        assert_eq!(hold.kind, AchievementKind::Misc);
        assert_eq!(hold.url, None);
        assert_eq!(hold.sub, None);

        let giant = &checklist["Fire Giant"];
        assert_eq!(giant.kind, AchievementKind::Boss);
        assert_eq!(giant.url.as_deref(), Some(fire_giant.as_str()));

        assert_eq!(checklist["Elden Lord"].kind, AchievementKind::Ending);
        assert_eq!(checklist["Elden Lord"].url, None);

        let sub = checklist["Legendary Talismans"].sub.as_ref().unwrap();
        assert_eq!(sub["Radagon Icon"].url.as_deref(), Some(radagon.as_str()));
        assert_eq!(sub["Radagon Icon"].location, "Debate Parlor");
        assert_eq!(sub["Erdtree's Favor +2"].url, None);

        // Godrick's derived URL fails, then the override replaces it
        assert_eq!(
            checklist["Shardbearer Godrick"].url.as_deref(),
            Some(url("Godrick+the+Grafted").as_str())
        );

        assert_eq!(
            stats,
            LinkStats {
                kept: 2,
                unreachable: 2,
                failed: 1
            }
        );
        assert_eq!(checker.calls.borrow().len(), 5);
    }

    #[test]
    fn test_checklist_keeps_catalog_order() {
        let checker = ScriptedChecker::new(&[]);
        let (checklist, _) =
            build_checklist(&test_catalog(), DEFAULT_WIKI_BASE, &checker).unwrap();
        let names: Vec<_> = checklist.keys().map(String::as_str).collect();
        let expected: Vec<_> = TEST_ACHIEVEMENTS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_unreachable_link_never_goes_stale() {
        let giant = url("Fire+Giant");
        let checker = ScriptedChecker::new(&[(giant.as_str(), LinkStatus::Unreachable(404))]);
        for _ in 0..3 {
            let (checklist, _) =
                build_checklist(&test_catalog(), DEFAULT_WIKI_BASE, &checker).unwrap();
            assert_eq!(checklist["Fire Giant"].url, None);
        }
    }

    #[test]
    fn test_override_for_unknown_achievement_is_fatal() {
        let catalog = Catalog {
            url_overrides: &[("Malenia", "Malenia+Blade+of+Miquella")],
            ..test_catalog()
        };
        let checker = ScriptedChecker::new(&[]);
        assert!(build_checklist(&catalog, DEFAULT_WIKI_BASE, &checker).is_err());
    }

    #[test]
    fn test_missing_legendary_table_is_fatal() {
        let catalog = Catalog {
            legendaries: &[],
            ..test_catalog()
        };
        let checker = ScriptedChecker::new(&[]);
        assert!(build_checklist(&catalog, DEFAULT_WIKI_BASE, &checker).is_err());
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let checker = ScriptedChecker::new(&[]);
        let (checklist, _) =
            build_checklist(&test_catalog(), DEFAULT_WIKI_BASE, &checker).unwrap();
        let json = to_json(&checklist).unwrap();
        assert!(json.starts_with("{\n    \"Roundtable Hold\": {\n        \"how-to-unlock\""));
    }

    #[test]
    fn test_written_json_round_trips() {
        let fire_giant = url("Fire+Giant");
        let checker = ScriptedChecker::new(&[(fire_giant.as_str(), LinkStatus::Reachable)]);
        let (checklist, _) =
            build_checklist(&test_catalog(), DEFAULT_WIKI_BASE, &checker).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);
        fs::write(&path, "stale").unwrap();
        write_checklist(&path, &checklist).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: Checklist = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, checklist);
        assert_eq!(to_json(&parsed).unwrap(), written);
        assert!(!dir.path().join("achievements.json.tmp").exists());
    }

    #[test]
    fn test_failed_move_removes_temp_file() {
        let checker = ScriptedChecker::new(&[]);
        let (checklist, _) =
            build_checklist(&test_catalog(), DEFAULT_WIKI_BASE, &checker).unwrap();

        // A non-empty directory can't be replaced by a file
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(write_checklist(&path, &checklist).is_err());
        assert!(!dir.path().join("achievements.json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_builtin_catalog_offline() {
        let (checklist, stats) =
            build_checklist(&Catalog::builtin(), DEFAULT_WIKI_BASE, &OfflineChecker).unwrap();
        assert_eq!(checklist.len(), Catalog::builtin().achievements.len());
        assert_eq!(stats.kept, 0);
        assert_eq!(checklist["Fire Giant"].url, None);
        assert_eq!(
            checklist["Shardbearer Radahn"].url.as_deref(),
            Some(url("Starscourge+Radahn").as_str())
        );
    }
}
