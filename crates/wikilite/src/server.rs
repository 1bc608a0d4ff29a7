/// MCP server for the WikiLite article browser.
///
/// Each tool is one navigation command applied to the session's `ViewState`; every tool
/// answers with the full resulting view so a client can redraw without further calls.
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::Mutex;
use tracing::{info, warn};

use wikilite_core::catalog::Catalog;
use wikilite_core::error::WikiError;
use wikilite_core::mcp_api::{ArticleIdParams, SearchArticlesParams, ViewResponse};
use wikilite_core::view_model::ViewModel;
use wikilite_core::view_state::{Command, ViewState};

/// Per-session navigation state. Replaced wholesale on every successful command.
pub struct Session {
    view: ViewState,
    rng: StdRng,
}

#[derive(Clone)]
pub struct WikiliteServer {
    catalog: Arc<Catalog>,
    seed: Option<u64>,
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<WikiliteServer>,
}

impl WikiliteServer {
    pub fn new(catalog: Arc<Catalog>, seed: Option<u64>) -> Self {
        let session = new_session(&catalog, seed);
        Self {
            catalog,
            seed,
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    /// A server sharing this catalog but starting from a fresh home screen.
    pub fn fresh_session(&self) -> Self {
        Self::new(Arc::clone(&self.catalog), self.seed)
    }

    async fn dispatch(&self, command: Command) -> Result<ViewResponse, String> {
        let vm = ViewModel::new(&self.catalog);
        let mut session = self.session.lock().await;
        let Session { view, rng } = &mut *session;

        match view.apply(&command, &vm, rng) {
            Ok(next) if next == *view => {
                let response = ViewResponse::from_state(view, false);
                Ok(match ignored_notice(&command) {
                    Some(notice) => {
                        info!(?command, "ignored command: {notice}");
                        response.with_notice(notice)
                    }
                    None => response,
                })
            }
            Ok(next) => {
                *view = next;
                Ok(ViewResponse::from_state(view, true))
            }
            Err(e @ WikiError::NotFound { .. }) => {
                info!(?command, "ignored command: {e}");
                Ok(ViewResponse::from_state(view, false).with_notice(e.to_string()))
            }
            Err(e) => {
                warn!(?command, error = %e, "command failed");
                Err(format!("command failed: {e}"))
            }
        }
    }
}

/// Why a command left the view as it was, for commands that can be refused.
fn ignored_notice(command: &Command) -> Option<String> {
    match command {
        Command::Categories => {
            Some("categories are only available from the home screen".to_string())
        }
        Command::Toggle(id) => Some(format!("article not in the current list: {id}")),
        _ => None,
    }
}

fn new_session(catalog: &Catalog, seed: Option<u64>) -> Session {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Session {
        view: ViewState::initial(&ViewModel::new(catalog)),
        rng,
    }
}

#[tool_router]
impl WikiliteServer {
    #[tool(description = "Filter the article list by a case-insensitive title substring. An empty query lists every article.")]
    async fn search_articles(
        &self,
        Parameters(params): Parameters<SearchArticlesParams>,
    ) -> Result<Json<ViewResponse>, String> {
        let response = self.dispatch(Command::Search(params.query)).await?;
        Ok(Json(response))
    }

    #[tool(description = "Open an article by ID (e.g. 'css-styling') with its table of contents. Unknown IDs leave the current view unchanged.")]
    async fn open_article(
        &self,
        Parameters(params): Parameters<ArticleIdParams>,
    ) -> Result<Json<ViewResponse>, String> {
        let article_id = params.article_id.trim().to_string();
        if article_id.is_empty() {
            return Err("article_id must not be empty".to_string());
        }
        let response = self.dispatch(Command::Open(article_id)).await?;
        Ok(Json(response))
    }

    #[tool(description = "Open a randomly chosen article.")]
    async fn random_article(&self) -> Result<Json<ViewResponse>, String> {
        let response = self.dispatch(Command::Random).await?;
        Ok(Json(response))
    }

    #[tool(description = "Show the category listing. Only available from the home screen.")]
    async fn list_categories(&self) -> Result<Json<ViewResponse>, String> {
        let response = self.dispatch(Command::Categories).await?;
        Ok(Json(response))
    }

    #[tool(description = "Return to the home screen, keeping the current search filter.")]
    async fn go_home(&self) -> Result<Json<ViewResponse>, String> {
        let response = self.dispatch(Command::Home).await?;
        Ok(Json(response))
    }

    #[tool(description = "Expand or collapse an entry in the article list.")]
    async fn toggle_entry(
        &self,
        Parameters(params): Parameters<ArticleIdParams>,
    ) -> Result<Json<ViewResponse>, String> {
        let article_id = params.article_id.trim().to_string();
        if article_id.is_empty() {
            return Err("article_id must not be empty".to_string());
        }
        let response = self.dispatch(Command::Toggle(article_id)).await?;
        Ok(Json(response))
    }

    #[tool(description = "Return the current view without changing it.")]
    async fn current_view(&self) -> Result<Json<ViewResponse>, String> {
        let session = self.session.lock().await;
        Ok(Json(ViewResponse::from_state(&session.view, false)))
    }
}

#[tool_handler]
impl ServerHandler for WikiliteServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wikilite".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "WikiLite MCP server. A small read-only article browser. Use search_articles to \
                 filter the list by title, open_article or random_article to read an article with \
                 its table of contents, toggle_entry to expand list entries, list_categories from \
                 the home screen, and go_home to return. Every tool returns the full current view."
                    .to_string(),
            ),
        }
    }
}
