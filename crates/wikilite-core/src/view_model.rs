use rand::Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::WikiError;
use crate::model::{
    anchor_for, Article, ArticleView, CategoryView, ListView, RenderedSection, TocEntry,
};

const CATEGORIES_TITLE: &str = "Categories";

/// Fixed category labels. Not derived from the catalog.
pub const CATEGORIES: [&str; 4] = ["HTML", "CSS", "JavaScript", "Accessibility"];

/// Maps catalog queries to renderable views. Holds a borrow of the catalog, never a copy.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    catalog: &'a Catalog,
}

impl<'a> ViewModel<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn render_list(&self, query: &str) -> ListView {
        let summaries: Vec<_> = self
            .catalog
            .search(query)
            .into_iter()
            .map(Article::summary)
            .collect();
        debug!(query, matches = summaries.len(), "rendered article list");
        ListView::from_summaries(summaries)
    }

    pub fn render_article(&self, id: &str) -> Result<ArticleView, WikiError> {
        let article = self.catalog.find_by_id(id)?;
        Ok(render(article))
    }

    /// Open a uniformly chosen article. Fails only when the catalog is empty.
    pub fn render_random_article<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<ArticleView, WikiError> {
        if self.catalog.is_empty() {
            return Err(WikiError::EmptyCatalog);
        }
        let idx = rng.random_range(0..self.catalog.len());
        let article = self.catalog.get(idx).ok_or(WikiError::EmptyCatalog)?;
        debug!(idx, id = %article.id, "picked random article");
        self.render_article(&article.id)
    }

    pub fn render_categories(&self) -> CategoryView {
        CategoryView {
            title: CATEGORIES_TITLE.to_string(),
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

fn render(article: &Article) -> ArticleView {
    let mut sections = Vec::with_capacity(article.sections.len());
    let mut toc = Vec::with_capacity(article.sections.len());

    for (idx, section) in article.sections.iter().enumerate() {
        let anchor = anchor_for(idx);
        toc.push(TocEntry {
            heading: section.heading.clone(),
            anchor: anchor.clone(),
        });
        sections.push(RenderedSection {
            anchor,
            heading: section.heading.clone(),
            content: section.content.clone(),
        });
    }

    ArticleView {
        id: article.id.clone(),
        title: article.title.clone(),
        sections,
        toc,
        scroll_to_top: true,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::ArticleSummary;

    fn sample() -> Catalog {
        Catalog::sample().expect("valid sample catalog")
    }

    #[test]
    fn css_query_lists_one_article() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        assert_eq!(
            vm.render_list("css"),
            ListView::Items(vec![ArticleSummary {
                id: "css-styling".to_string(),
                title: "CSS Styling".to_string(),
            }])
        );
    }

    #[test]
    fn list_only_contains_matching_titles() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        for query in ["", "a", "WEB", "Func", "ml b", "zzz", " "] {
            let list = vm.render_list(query);
            for item in list.items() {
                assert!(
                    item.title.to_lowercase().contains(&query.to_lowercase()),
                    "{} should not match {query:?}",
                    item.title
                );
            }
            let expected = catalog
                .iter()
                .filter(|a| a.title.to_lowercase().contains(&query.to_lowercase()))
                .count();
            assert_eq!(list.items().len(), expected, "query {query:?}");
        }
    }

    #[test]
    fn empty_query_lists_everything_in_order() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        let ids: Vec<String> = vm.render_list("").items().iter().map(|s| s.id.clone()).collect();
        let expected: Vec<String> = catalog.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        assert_eq!(vm.render_list("cobol"), ListView::Empty);
    }

    #[test]
    fn css_article_has_positional_toc() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        let view = vm.render_article("css-styling").expect("article exists");

        let toc: Vec<(&str, &str)> = view
            .toc
            .iter()
            .map(|e| (e.heading.as_str(), e.anchor.as_str()))
            .collect();
        assert_eq!(
            toc,
            [
                ("Introduction", "sec-0"),
                ("Selectors", "sec-1"),
                ("Box Model", "sec-2"),
            ]
        );
        assert!(view.scroll_to_top);
    }

    #[test]
    fn every_article_round_trips() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        for article in catalog.iter() {
            let view = vm.render_article(&article.id).expect("catalog id renders");
            assert_eq!(view.title, article.title);
            assert_eq!(view.toc.len(), article.sections.len());
            for (idx, (entry, section)) in view.toc.iter().zip(&article.sections).enumerate() {
                assert_eq!(entry.heading, section.heading);
                assert_eq!(entry.anchor, format!("sec-{idx}"));
                assert_eq!(view.sections[idx].anchor, entry.anchor);
                assert_eq!(view.sections[idx].content, section.content);
            }
        }
    }

    #[test]
    fn unknown_article_is_not_found() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        assert_eq!(
            vm.render_article("does-not-exist").unwrap_err(),
            WikiError::not_found("does-not-exist")
        );
    }

    #[test]
    fn random_article_is_roughly_uniform() {
        let catalog = sample();
        let vm = ViewModel::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 4000;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..draws {
            let view = vm.render_random_article(&mut rng).expect("non-empty catalog");
            *counts.entry(view.id).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), catalog.len());
        let expected = draws / catalog.len();
        for article in catalog.iter() {
            let n = counts[&article.id];
            assert!(
                n > expected * 8 / 10 && n < expected * 12 / 10,
                "{} drawn {n} times, expected about {expected}",
                article.id
            );
        }
    }

    #[test]
    fn random_article_on_empty_catalog_fails() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let vm = ViewModel::new(&catalog);
        let mut rng = StdRng::seed_from_u64(1);
        let err = vm.render_random_article(&mut rng).unwrap_err();
        assert_eq!(err, WikiError::EmptyCatalog);
        assert!(err.is_fatal());
    }

    #[test]
    fn categories_are_static() {
        let empty = Catalog::new(Vec::new()).unwrap();
        let full = sample();
        let a = ViewModel::new(&empty).render_categories();
        let b = ViewModel::new(&full).render_categories();
        assert_eq!(a, b);
        assert_eq!(a.title, "Categories");
        assert_eq!(a.categories, ["HTML", "CSS", "JavaScript", "Accessibility"]);
    }
}
