//! Guide page loading.
//!
//! A guide is a TOML file with a title and an ordered list of sections. Each
//! section carries a stable id (used for navigation) and a list of content
//! blocks. Two guides ship inside the binary so the app still has something
//! to show when the guides directory is missing or empty.

use crate::nav::SectionDescriptor;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const BUNDLED_GUIDES: [(&str, &str); 2] = [
    ("match-day.toml", include_str!("../guides/match-day.toml")),
    (
        "where-to-stay.toml",
        include_str!("../guides/where-to-stay.toml"),
    ),
];

#[derive(Debug, Clone, Deserialize)]
pub struct GuidePage {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<GuideSection>,
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuideSection {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentBlock {
    Paragraph { text: String },
    List { items: Vec<String> },
    Faq { question: String, answer: String },
}

impl GuidePage {
    /// Table of contents entries in document order.
    pub fn section_descriptors(&self) -> Vec<SectionDescriptor> {
        self.sections
            .iter()
            .map(|section| SectionDescriptor::new(section.id.clone(), section.label.clone()))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            let id = section.id.trim();
            if id.is_empty() {
                bail!("Section '{}' has an empty id", section.label);
            }
            if !seen.insert(id) {
                bail!("Duplicate section id '{id}'");
            }
        }
        Ok(())
    }
}

impl GuideSection {
    pub fn faq_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, ContentBlock::Faq { .. }))
            .count()
    }
}

/// Parse and validate a single guide.
pub fn parse_guide(data: &str) -> Result<GuidePage> {
    let page: GuidePage = toml::from_str(data).context("Invalid guide TOML")?;
    page.validate()?;
    Ok(page)
}

pub fn load_guide(path: &Path) -> Result<GuidePage> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read guide at {}", path.display()))?;
    let mut page =
        parse_guide(&data).with_context(|| format!("Failed to parse {}", path.display()))?;
    page.source = Some(path.to_path_buf());
    debug!(
        path = %path.display(),
        sections = page.sections.len(),
        "Loaded guide"
    );
    Ok(page)
}

/// Load every `*.toml` guide under `dir`, sorted by file name. Broken files
/// are skipped; an empty result falls back to the bundled guides.
pub fn load_library(dir: &Path) -> Vec<GuidePage> {
    let mut pages = match guide_paths(dir) {
        Ok(paths) => paths
            .iter()
            .filter_map(|path| match load_guide(path) {
                Ok(page) => Some(page),
                Err(err) => {
                    warn!(path = %path.display(), "Skipping guide: {err:#}");
                    None
                }
            })
            .collect::<Vec<_>>(),
        Err(err) => {
            warn!(dir = %dir.display(), "Guide directory unavailable: {err:#}");
            Vec::new()
        }
    };

    if pages.is_empty() {
        info!("No guides found on disk; using bundled guides");
        pages = bundled_guides();
    }
    info!(count = pages.len(), "Guide library ready");
    pages
}

pub fn bundled_guides() -> Vec<GuidePage> {
    BUNDLED_GUIDES
        .iter()
        .filter_map(|(name, data)| match parse_guide(data) {
            Ok(page) => Some(page),
            Err(err) => {
                warn!(guide = name, "Bundled guide failed to parse: {err:#}");
                None
            }
        })
        .collect()
}

fn guide_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    let mut paths = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        })
        .collect::<Vec<_>>();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
title = "Sample"

[[sections]]
id = "intro"
label = "Intro"

[[sections.blocks]]
kind = "paragraph"
text = "Hello."

[[sections.blocks]]
kind = "faq"
question = "Why?"
answer = "Because."

[[sections]]
id = "more"
label = "More"
"#;

    #[test]
    fn parses_sections_and_blocks_in_order() {
        let page = parse_guide(SAMPLE).expect("sample guide parses");
        assert_eq!(page.title, "Sample");
        assert!(page.summary.is_empty());
        let ids: Vec<_> = page
            .section_descriptors()
            .into_iter()
            .map(|section| section.id)
            .collect();
        assert_eq!(ids, vec!["intro", "more"]);
        assert_eq!(page.sections[0].blocks.len(), 2);
        assert_eq!(page.sections[0].faq_count(), 1);
        assert!(page.sections[1].blocks.is_empty());
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let data = r#"
title = "Dup"
[[sections]]
id = "a"
label = "A"
[[sections]]
id = "a"
label = "Again"
"#;
        let err = parse_guide(data).expect_err("duplicate ids are rejected");
        assert!(err.to_string().contains("Duplicate section id"));
    }

    #[test]
    fn rejects_blank_section_ids() {
        let data = r#"
title = "Blank"
[[sections]]
id = "  "
label = "Nothing"
"#;
        assert!(parse_guide(data).is_err());
    }

    #[test]
    fn bundled_guides_all_parse() {
        let guides = bundled_guides();
        assert_eq!(guides.len(), BUNDLED_GUIDES.len());
        assert!(guides.iter().all(|guide| !guide.sections.is_empty()));
    }

    #[test]
    fn missing_directory_falls_back_to_bundled_guides() {
        let dir = std::env::temp_dir().join(format!(
            "guide-nav-missing-{}-{}",
            std::process::id(),
            line!()
        ));
        let pages = load_library(&dir);
        assert_eq!(pages.len(), BUNDLED_GUIDES.len());
    }

    #[test]
    fn loads_guides_from_disk_and_skips_broken_files() {
        let dir = std::env::temp_dir().join(format!("guide-nav-library-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp guide dir");
        fs::write(dir.join("a.toml"), SAMPLE).expect("write guide");
        fs::write(dir.join("b.toml"), "title = ").expect("write broken guide");
        fs::write(dir.join("notes.txt"), "ignored").expect("write other file");

        let pages = load_library(&dir);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "Sample");
        assert_eq!(pages[0].source.as_deref(), Some(dir.join("a.toml").as_path()));

        let _ = fs::remove_dir_all(&dir);
    }
}
