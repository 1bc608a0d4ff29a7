use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::ListView;
use crate::view_state::{MainPane, Screen, ViewState};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchArticlesParams {
    /// Case-insensitive title filter. Empty lists every article.
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ArticleIdParams {
    /// Stable article ID such as "css-styling".
    pub article_id: String,
}

/// Everything a renderer needs to draw the current screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ViewResponse {
    pub screen: Screen,
    /// Current search box value
    pub filter: String,
    pub list: ListView,
    /// IDs of list entries currently expanded
    pub expanded: Vec<String>,
    pub main: MainPane,
    /// False when the command left the previous view showing (ignored or a no-op)
    pub changed: bool,
    pub notice: Option<String>,
}

impl ViewResponse {
    pub fn from_state(state: &ViewState, changed: bool) -> Self {
        Self {
            screen: state.screen(),
            filter: state.filter().to_string(),
            list: state.list().clone(),
            expanded: state.expanded().to_vec(),
            main: state.main().clone(),
            changed,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}
