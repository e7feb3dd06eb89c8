use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use minijinja::{context, Environment};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::types::{AchievementKind, AchievementRecord, Checklist};

pub const TEMPLATE_FILE: &str = "template.html";
pub const OUTPUT_FILE: &str = "index.html";

/// Strip everything but ASCII letters, digits, '.', '_' and '-' so the
/// result can be used as an element id
pub fn html_tag(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

#[derive(Debug, Serialize)]
struct Entry<'a> {
    name: &'a str,
    record: &'a AchievementRecord,
}

#[derive(Debug, Serialize)]
struct Section<'a> {
    kind: AchievementKind,
    title: &'static str,
    achievements: Vec<Entry<'a>>,
}

/// Group achievements by kind, one section per kind in page order
fn sections(checklist: &Checklist) -> Vec<Section<'_>> {
    AchievementKind::ALL
        .iter()
        .map(|kind| Section {
            kind: *kind,
            title: kind.title(),
            achievements: checklist
                .iter()
                .filter(|(_, record)| record.kind == *kind)
                .map(|(name, record)| Entry {
                    name: name.as_str(),
                    record,
                })
                .collect(),
        })
        .collect()
}

/// Render the checklist into the given template source
pub fn render_page(template_source: &str, checklist: &Checklist, generated_at: &str) -> Result<String> {
    let mut env = Environment::new();
    env.add_filter("html_tag", html_tag);
    env.add_template(TEMPLATE_FILE, template_source)
        .context("Failed to parse template")?;

    let template = env.get_template(TEMPLATE_FILE)?;
    let html = template
        .render(context! {
            achievements => checklist,
            sections => sections(checklist),
            total => checklist.len(),
            generated_at => generated_at,
        })
        .context("Failed to render template")?;
    Ok(html)
}

pub fn load_checklist(path: &Path) -> Result<Checklist> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn run_render(input: &Path, template: &Path, output: &Path) -> Result<()> {
    let checklist = load_checklist(input)?;
    log::info!("Loaded {} achievements from {}", checklist.len(), input.display());

    let template_source = fs::read_to_string(template)
        .with_context(|| format!("Failed to read template: {}", template.display()))?;

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let html = render_page(&template_source, &checklist, &generated_at)?;

    fs::write(output, html).with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Rendered {}", output.display());
    Ok(())
}
