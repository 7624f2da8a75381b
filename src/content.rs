//! Post front-matter schema and validation.
//!
//! Posts are Markdown files opening with a TOML front-matter block fenced
//! by `+++` lines. The schema is strict: unknown keys are rejected and a
//! missing required field or unparseable date is a hard error, so a broken
//! post fails the build instead of publishing half-formed.
//!
//! ```text
//! +++
//! title = "Hello"
//! pubDate = "2024-01-01"
//! +++
//! Body text…
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validated front matter of one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostMeta {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "pubDate", deserialize_with = "de_date_from_text")]
    pub pub_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

/// Why a post failed validation.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("missing or unterminated `+++` front-matter block")]
    MissingFrontMatter,
    #[error("invalid front matter: {0}")]
    Schema(#[from] toml::de::Error),
}

/// Serde helper: parse a `NaiveDate` from date text.
/// Accepts `YYYY-MM-DD` or an RFC 3339 datetime (date part kept).
fn de_date_from_text<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = NaiveDate;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a date string like \"2024-01-01\" or an RFC 3339 datetime")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Ok(d);
            }
            chrono::DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.date_naive())
                .map_err(|_| E::custom(format!("unparseable date: {s:?}")))
        }
    }

    deserializer.deserialize_str(DateVisitor)
}

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\A\+\+\+[ \t]*\r?\n(.*?)\r?\n\+\+\+[ \t]*(?:\r?\n|\z)")
            .expect("front-matter fence pattern")
    })
}

/// Parse and validate the front matter of one post body.
pub fn parse_front_matter(text: &str) -> Result<PostMeta, ContentError> {
    let caps = fence_re()
        .captures(text)
        .ok_or(ContentError::MissingFrontMatter)?;
    let meta: PostMeta = toml::from_str(&caps[1])?;
    Ok(meta)
}

/// Load and validate a single post file.
pub fn load_post<P: AsRef<Path>>(path: P) -> Result<PostMeta> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let meta = parse_front_matter(&text)
        .with_context(|| format!("validating {}", path.display()))?;
    log::debug!("loaded post {:?} ({})", meta.title, path.display());
    Ok(meta)
}

/// Outcome of validating every `.md` post under a directory.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub ok: Vec<(PathBuf, PostMeta)>,
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

impl CheckReport {
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Validate every `.md` file directly under `dir`, collecting successes and
/// failures rather than stopping at the first broken post.
pub fn check_dir<P: AsRef<Path>>(dir: P) -> Result<CheckReport> {
    let dir = dir.as_ref();
    let mut report = CheckReport::default();
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("md"))
        .collect();
    entries.sort();

    for path in entries {
        match load_post(&path) {
            Ok(meta) => report.ok.push((path, meta)),
            Err(err) => report.failed.push((path, err)),
        }
    }
    log::info!(
        "checked {} posts, {} failed",
        report.ok.len() + report.failed.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(front: &str) -> String {
        format!("+++\n{front}\n+++\nBody text.\n")
    }

    #[test]
    fn minimal_post_validates() {
        let meta =
            parse_front_matter(&post("title = \"Hello\"\npubDate = \"2024-01-01\"")).unwrap();
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.author, None);
        assert_eq!(meta.description, None);
        assert_eq!(meta.pub_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn all_fields_parse() {
        let meta = parse_front_matter(&post(
            "title = \"Hello\"\nauthor = \"A. Writer\"\npubDate = \"2024-01-01\"\ndescription = \"Intro\"",
        ))
        .unwrap();
        assert_eq!(meta.author.as_deref(), Some("A. Writer"));
        assert_eq!(meta.description.as_deref(), Some("Intro"));
    }

    #[test]
    fn missing_title_fails() {
        let err = parse_front_matter(&post("pubDate = \"2024-01-01\"")).unwrap_err();
        assert!(matches!(err, ContentError::Schema(_)));
    }

    #[test]
    fn unparseable_date_fails() {
        let err = parse_front_matter(&post("title = \"X\"\npubDate = \"yesterday\"")).unwrap_err();
        assert!(err.to_string().contains("unparseable date"));
    }

    #[test]
    fn datetime_coerces_to_date() {
        let meta = parse_front_matter(&post(
            "title = \"X\"\npubDate = \"2024-01-01T09:30:00+02:00\"",
        ))
        .unwrap();
        assert_eq!(meta.pub_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn unknown_key_fails() {
        let err =
            parse_front_matter(&post("title = \"X\"\npubDate = \"2024-01-01\"\nbogus = 1"))
                .unwrap_err();
        assert!(matches!(err, ContentError::Schema(_)));
    }

    #[test]
    fn missing_fence_fails() {
        let err = parse_front_matter("title = \"X\"\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter));
    }
}
