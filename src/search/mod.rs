//! Search module - SOP relevance ranking / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Search module only exposes primitive operations: search
//! - The HTTP layer owns caller policy (minimum query length) / 调用方控制最短查询长度
//! - Call direction: api / assistant → search (unidirectional) / 调用方向
//!
//! Scoring / 评分：
//! - Whole-query substring checks against title, purpose, flow steps, department and id
//! - Per-keyword checks against title, purpose and flow steps
//! - Weights come from config

pub mod engine;
pub mod schema;
pub mod tokenizer;

pub use engine::SearchEngine;
pub use schema::{ScoreWeights, SearchHit, SearchOptions, SearchResultItem};
