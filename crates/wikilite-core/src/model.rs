use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A titled document made of ordered sections (e.g. "CSS Styling").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier, e.g. "css-styling"
    pub id: String,
    /// Display title, e.g. "CSS Styling"
    pub title: String,
    /// Sections in display order; order drives TOC order and anchor numbering
    pub sections: Vec<Section>,
}

/// A heading/content pair within an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, e.g. "Box Model"
    pub heading: String,
    /// Markup payload, passed through untouched
    pub content: String,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sections,
        }
    }

    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

impl Section {
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }
}

/// Positional in-page anchor for the section at `index`.
///
/// Anchors are only unique within one rendered article: every article has a `sec-0`.
pub fn anchor_for(index: usize) -> String {
    format!("sec-{index}")
}

/// List entry for an article. Sections are only loaded when the article is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
}

/// Result of filtering the catalog by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ListView {
    /// Nothing matched; renderers show a "no articles found" message.
    Empty,
    Items(Vec<ArticleSummary>),
}

impl ListView {
    pub fn from_summaries(summaries: Vec<ArticleSummary>) -> Self {
        if summaries.is_empty() {
            Self::Empty
        } else {
            Self::Items(summaries)
        }
    }

    pub fn items(&self) -> &[ArticleSummary] {
        match self {
            Self::Empty => &[],
            Self::Items(items) => items,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items().iter().any(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TocEntry {
    pub heading: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RenderedSection {
    pub anchor: String,
    pub heading: String,
    pub content: String,
}

/// A fully rendered article with its generated table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArticleView {
    pub id: String,
    /// Page header
    pub title: String,
    pub sections: Vec<RenderedSection>,
    /// One entry per section, same order
    pub toc: Vec<TocEntry>,
    /// Opening an article always scrolls the presentation back to the top.
    pub scroll_to_top: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryView {
    pub title: String,
    pub categories: Vec<String>,
}
