//! Topic search: local search and ranking over a catalog of
//! computer-science topics.
//!
//! This library provides the catalog model and loaders, the rule-based
//! search engine, the suggestion sampler, and category / difficulty filters.
//! The binary crate adds the CLI (clap) on top.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod search;
pub mod suggest;
pub mod validate;

pub use catalog::{TopicCatalog, TopicRecord};
pub use search::{SearchOptions, search};
