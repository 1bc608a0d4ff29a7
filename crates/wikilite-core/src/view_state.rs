/// Navigation state for one browsing session.
///
/// `ViewState` is an immutable value: every command produces a new state, and a failed
/// command leaves the caller holding the previous one. The article list is a sidebar
/// present on every screen; the main pane is either empty (home), an article, or the
/// category listing.
///
/// Transitions:
/// - `Search(q)`: stores the filter and re-renders the list, main pane untouched
/// - `Open(id)` / `Random`: main pane shows the article
/// - `Home`: clears the main pane and re-renders the list from the stored filter
/// - `Categories`: only from home; elsewhere the state is returned as is
/// - `Toggle(id)`: expands or collapses one list entry
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WikiError;
use crate::model::{ArticleView, CategoryView, ListView};
use crate::view_model::ViewModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Random,
    Categories,
    Search(String),
    Open(String),
    Toggle(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    Article,
    Categories,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum MainPane {
    Home,
    Article(ArticleView),
    Categories(CategoryView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter: String,
    list: ListView,
    expanded: Vec<String>,
    main: MainPane,
}

impl ViewState {
    /// Home screen with no filter and every article listed.
    pub fn initial(vm: &ViewModel<'_>) -> Self {
        Self {
            filter: String::new(),
            list: vm.render_list(""),
            expanded: Vec::new(),
            main: MainPane::Home,
        }
    }

    pub fn apply<R: Rng>(
        &self,
        command: &Command,
        vm: &ViewModel<'_>,
        rng: &mut R,
    ) -> Result<ViewState, WikiError> {
        let next = match command {
            Command::Search(query) => Self {
                filter: query.clone(),
                list: vm.render_list(query),
                expanded: Vec::new(),
                main: self.main.clone(),
            },
            Command::Open(id) => self.with_main(MainPane::Article(vm.render_article(id)?)),
            Command::Random => {
                self.with_main(MainPane::Article(vm.render_random_article(rng)?))
            }
            Command::Home => Self {
                filter: self.filter.clone(),
                list: vm.render_list(&self.filter),
                expanded: Vec::new(),
                main: MainPane::Home,
            },
            Command::Categories => match self.screen() {
                Screen::Home => self.with_main(MainPane::Categories(vm.render_categories())),
                _ => self.clone(),
            },
            Command::Toggle(id) => self.toggled(id),
        };
        debug!(?command, from = ?self.screen(), to = ?next.screen(), "view transition");
        Ok(next)
    }

    pub fn screen(&self) -> Screen {
        match self.main {
            MainPane::Home => Screen::Home,
            MainPane::Article(_) => Screen::Article,
            MainPane::Categories(_) => Screen::Categories,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn main(&self) -> &MainPane {
        &self.main
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.iter().any(|e| e == id)
    }

    pub fn expanded(&self) -> &[String] {
        &self.expanded
    }

    pub fn article(&self) -> Option<&ArticleView> {
        match &self.main {
            MainPane::Article(view) => Some(view),
            _ => None,
        }
    }

    fn with_main(&self, main: MainPane) -> Self {
        Self {
            main,
            ..self.clone()
        }
    }

    fn toggled(&self, id: &str) -> Self {
        if !self.list.contains(id) {
            return self.clone();
        }
        let mut expanded = self.expanded.clone();
        if let Some(pos) = expanded.iter().position(|e| e == id) {
            expanded.remove(pos);
        } else {
            expanded.push(id.to_string());
        }
        Self {
            expanded,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::Catalog;

    fn run(state: &ViewState, vm: &ViewModel<'_>, command: Command) -> ViewState {
        let mut rng = StdRng::seed_from_u64(42);
        state.apply(&command, vm, &mut rng).expect("command succeeds")
    }

    #[test]
    fn initial_state_lists_everything() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let state = ViewState::initial(&vm);
        assert_eq!(state.screen(), Screen::Home);
        assert_eq!(state.filter(), "");
        assert_eq!(state.list().items().len(), 4);
    }

    #[test]
    fn search_keeps_main_pane() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let opened = run(&ViewState::initial(&vm), &vm, Command::Open("html-basics".into()));
        let searched = run(&opened, &vm, Command::Search("script".into()));

        assert_eq!(searched.screen(), Screen::Article);
        assert_eq!(searched.article().unwrap().id, "html-basics");
        assert_eq!(searched.filter(), "script");
        assert_eq!(searched.list().items().len(), 1);
    }

    #[test]
    fn open_unknown_id_leaves_state_untouched() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let state = run(&ViewState::initial(&vm), &vm, Command::Search("css".into()));
        let before = state.clone();

        let mut rng = StdRng::seed_from_u64(0);
        let err = state
            .apply(&Command::Open("does-not-exist".into()), &vm, &mut rng)
            .unwrap_err();

        assert_eq!(err, WikiError::not_found("does-not-exist"));
        assert!(!err.is_fatal());
        assert_eq!(state, before);
    }

    #[test]
    fn home_restores_filter_and_clears_article() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let state = run(&ViewState::initial(&vm), &vm, Command::Search("web".into()));
        let state = run(&state, &vm, Command::Open("css-styling".into()));
        let state = run(&state, &vm, Command::Home);

        assert_eq!(state.screen(), Screen::Home);
        assert!(state.article().is_none());
        assert_eq!(state.filter(), "web");
        let ids: Vec<&str> = state.list().items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["web-accessibility"]);
    }

    #[test]
    fn random_opens_a_catalog_article() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let state = run(&ViewState::initial(&vm), &vm, Command::Random);
        let id = &state.article().expect("article pane").id;
        assert!(catalog.find_by_id(id).is_ok());
    }

    #[test]
    fn categories_only_from_home() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let home = run(&ViewState::initial(&vm), &vm, Command::Search("css".into()));

        let cats = run(&home, &vm, Command::Categories);
        assert_eq!(cats.screen(), Screen::Categories);
        assert_eq!(cats.filter(), "css");

        let again = run(&cats, &vm, Command::Categories);
        assert_eq!(again, cats);

        let article = run(&home, &vm, Command::Open("js-functions".into()));
        let ignored = run(&article, &vm, Command::Categories);
        assert_eq!(ignored, article);

        let back = run(&cats, &vm, Command::Home);
        assert_eq!(back.screen(), Screen::Home);
        assert_eq!(back.filter(), "css");
    }

    #[test]
    fn toggle_expands_and_collapses_listed_entries() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let state = ViewState::initial(&vm);
        assert!(!state.is_expanded("css-styling"));

        let open = run(&state, &vm, Command::Toggle("css-styling".into()));
        assert!(open.is_expanded("css-styling"));

        let closed = run(&open, &vm, Command::Toggle("css-styling".into()));
        assert!(!closed.is_expanded("css-styling"));

        let unlisted = run(&state, &vm, Command::Toggle("nope".into()));
        assert_eq!(unlisted, state);
    }

    #[test]
    fn search_collapses_entries() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let state = run(&ViewState::initial(&vm), &vm, Command::Toggle("html-basics".into()));
        let state = run(&state, &vm, Command::Search("".into()));
        assert!(state.expanded().is_empty());
    }

    #[test]
    fn empty_search_result_is_a_valid_state() {
        let catalog = Catalog::sample().unwrap();
        let vm = ViewModel::new(&catalog);
        let state = run(&ViewState::initial(&vm), &vm, Command::Search("nothing here".into()));
        assert_eq!(state.list(), &ListView::Empty);
        assert_eq!(state.screen(), Screen::Home);
    }
}
