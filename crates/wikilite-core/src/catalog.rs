/// The immutable article catalog.
///
/// Built once at startup and only read afterward. Lookup by id goes through a hash
/// index; title search is a linear scan over lowercase title keys computed at
/// construction, returning matches in insertion order.
use std::collections::HashMap;

use crate::error::WikiError;
use crate::model::Article;

#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Vec<Article>,
    by_id: HashMap<String, usize>,
    title_keys: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and articles without sections.
    ///
    /// An empty article list is accepted here; whether that is a usable configuration
    /// is up to the caller.
    pub fn new(articles: Vec<Article>) -> Result<Self, WikiError> {
        let mut by_id = HashMap::with_capacity(articles.len());
        for (idx, article) in articles.iter().enumerate() {
            if article.sections.is_empty() {
                return Err(WikiError::EmptyArticle(article.id.clone()));
            }
            if by_id.insert(article.id.clone(), idx).is_some() {
                return Err(WikiError::DuplicateId(article.id.clone()));
            }
        }

        let title_keys = articles.iter().map(|a| a.title.to_lowercase()).collect();

        Ok(Self {
            articles,
            by_id,
            title_keys,
        })
    }

    pub fn find_by_id(&self, id: &str) -> Result<&Article, WikiError> {
        self.by_id
            .get(id)
            .map(|&idx| &self.articles[idx])
            .ok_or_else(|| WikiError::not_found(id))
    }

    /// Case-insensitive substring match on titles only. The empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        let needle = query.to_lowercase();
        self.articles
            .iter()
            .zip(&self.title_keys)
            .filter(|(_, key)| key.contains(&needle))
            .map(|(article, _)| article)
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
