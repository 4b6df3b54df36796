//! Device inventory application layer
//!
//! This crate contains the registry use cases. Each one depends only on
//! `di-core` ports and is wired to concrete adapters by the web layer.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
