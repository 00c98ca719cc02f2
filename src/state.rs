use std::sync::Arc;

use sop_portal::assistant::Assistant;
use sop_portal::catalog::Catalog;
use sop_portal::config::AppConfig;
use sop_portal::documents::DocumentStore;
use sop_portal::search::SearchEngine;

/// Shared, read-only application state / 共享只读应用状态
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: Arc<SearchEngine>,
    pub assistant: Assistant,
    pub documents: DocumentStore,
    /// Queries shorter than this (after trim) skip the engine / 最短查询长度
    pub min_query_len: usize,
}

impl AppState {
    /// Wire catalog, engine, assistant and documents from config / 根据配置组装状态
    pub fn new(catalog: Arc<Catalog>, config: &AppConfig) -> Self {
        let engine = Arc::new(SearchEngine::new(
            catalog.clone(),
            config.search.weights,
            config.search.options(),
        ));
        let assistant = Assistant::new(engine.clone(), config.search.tiers);
        let documents = DocumentStore::new(config.get_docs_dir(), catalog.clone());

        Self {
            catalog,
            engine,
            assistant,
            documents,
            min_query_len: config.search.min_query_len,
        }
    }
}
