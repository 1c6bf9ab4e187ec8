//! Portfolio content model.
//!
//! The page text lives in `content/portfolio.json` and is embedded at
//! build time. Nothing here has behavior beyond parsing and a couple of
//! display helpers.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::Deserialize;

use crate::consts::PLACEHOLDER_IMAGE_BASE;
use crate::error::PresentationError;
use crate::state::filter::Tagged;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PortfolioData {
    pub owner: String,
    /// Rotating headline roles on the landing section.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub duration: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    pub github_link: String,
}

impl Project {
    /// Last segment of a `"start - end"` duration, or the whole value.
    #[must_use]
    pub fn end_date_label(&self) -> &str {
        self.duration.split_once(" - ").map_or(self.duration.as_str(), |(_, end)| end)
    }

    /// Stand-in image labelled with the title, shown when `image` fails to load.
    #[must_use]
    pub fn placeholder_image(&self) -> String {
        let label: String = url::form_urlencoded::byte_serialize(self.title.as_bytes()).collect();
        format!("{PLACEHOLDER_IMAGE_BASE}?text={label}")
    }
}

impl Tagged for Project {
    fn tags(&self) -> &[String] {
        &self.tech
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl Contact {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl PortfolioData {
    pub fn from_json(raw: &str) -> Result<Self, PresentationError> {
        serde_json::from_str(raw).map_err(PresentationError::InvalidContent)
    }

    pub fn embedded() -> Result<Self, PresentationError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Embedded content, or empty content if it fails to parse.
    #[must_use]
    pub fn load() -> Self {
        Self::embedded().unwrap_or_else(|err| {
            log::error!("content: {err}");
            Self::default()
        })
    }
}
