//! Static portfolio records and the document that carries them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Records are authored by hand in `content/portfolio.json`, embedded into
//! the WASM bundle at build time, and read once at page-ready. Nothing in
//! the page mutates them; renderers only borrow.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// The content file bundled into the page.
pub const EMBEDDED: &str = include_str!("../content/portfolio.json");

/// Separator between project tags.
pub const TAG_SEPARATOR: &str = " • ";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project #{index} is invalid: {reason}")]
    InvalidProject { index: usize, reason: &'static str },
}

/// Missing text fields render as empty fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRecord {
    pub period: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRecord {
    pub period: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    /// Percentage. Values outside `0..=100` are rendered as given.
    pub level: i64,
}

/// Stats are authored either as numbers (`12`) or display strings (`"5+"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub value: StatValue,
    pub label: String,
}

/// Everything the page renders, plus site settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub site: SiteConfig,
    pub education: Vec<EducationRecord>,
    pub experiences: Vec<ExperienceRecord>,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillRecord>,
    pub stats: Vec<StatRecord>,
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `1.0` displays as `1`
            Self::Number(n) => match n.as_f64() {
                Some(value) if n.is_f64() && value.is_finite() && value.fract().abs() < f64::EPSILON => {
                    write!(f, "{value:.0}")
                }
                _ => write!(f, "{n}"),
            },
            Self::Text(s) => f.write_str(s),
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl ProjectRecord {
    /// Card summary: the short description when present, else the long one.
    pub fn summary(&self) -> &str {
        non_empty(self.short_description.as_ref())
            .or_else(|| non_empty(self.description.as_ref()))
            .unwrap_or_default()
    }

    /// Tags joined for display. `tags` wins over `category` whenever it is
    /// present, even if empty.
    pub fn tag_line(&self) -> Option<String> {
        let line = match (&self.tags, &self.category) {
            (Some(tags), _) => tags.join(TAG_SEPARATOR),
            (None, Some(category)) => category.clone(),
            (None, None) => return None,
        };
        (!line.is_empty()).then_some(line)
    }

    /// Comma-joined tech stack; `None` when absent or empty.
    pub fn tech_line(&self) -> Option<String> {
        self.tech_stack
            .as_ref()
            .filter(|stack| !stack.is_empty())
            .map(|stack| stack.join(", "))
    }

    /// Outbound link, ignoring blank values.
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_ref())
    }
}

/// Section arrays kept as raw values so records parse one at a time.
#[derive(Default, Deserialize)]
#[serde(default)]
struct LooseDocument {
    site: Option<serde_json::Value>,
    education: Vec<serde_json::Value>,
    experiences: Vec<serde_json::Value>,
    projects: Vec<serde_json::Value>,
    skills: Vec<serde_json::Value>,
    stats: Vec<serde_json::Value>,
}

/// Parse each entry of `section`, dropping the ones that fail.
fn keep_parsed<T: DeserializeOwned>(section: &str, entries: Vec<serde_json::Value>) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("dropping {section} #{index}: {err}");
                None
            }
        })
        .collect()
}

impl ProjectRecord {
    /// Why this project cannot be rendered, if it cannot.
    pub fn problem(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("missing title");
        }
        if self.summary().trim().is_empty() {
            return Some("missing description and shortDescription");
        }
        None
    }
}

impl Portfolio {
    /// Parse and validate a content document. Any bad record is an error.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Parse a content document, dropping records that fail to parse or
    /// validate. Only a document that is not JSON at all is an error.
    pub fn from_json_lenient(raw: &str) -> Result<Self, ContentError> {
        let loose: LooseDocument = serde_json::from_str(raw)?;
        let site = match loose.site.map(serde_json::from_value::<SiteConfig>) {
            Some(Ok(site)) => site,
            Some(Err(err)) => {
                log::warn!("site settings unreadable, using defaults: {err}");
                SiteConfig::default()
            }
            None => SiteConfig::default(),
        };
        let mut projects: Vec<ProjectRecord> = keep_parsed("project", loose.projects);
        let mut index = 0;
        projects.retain(|project| {
            let keep = match project.problem() {
                Some(reason) => {
                    log::warn!("dropping project #{index} {:?}: {reason}", project.title);
                    false
                }
                None => true,
            };
            index += 1;
            keep
        });
        Ok(Self {
            site,
            education: keep_parsed("education", loose.education),
            experiences: keep_parsed("experience", loose.experiences),
            projects,
            skills: keep_parsed("skill", loose.skills),
            stats: keep_parsed("stat", loose.stats),
        })
    }

    /// The content compiled into this build. A broken record costs only
    /// its own card.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json_lenient(EMBEDDED)
    }

    /// Every project must yield a title and summary text.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (index, project) in self.projects.iter().enumerate() {
            if let Some(reason) = project.problem() {
                return Err(ContentError::InvalidProject { index, reason });
            }
        }
        Ok(())
    }
}
