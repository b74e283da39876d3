//! # API Shared
//!
//! Shared utilities and definitions for the recipe book APIs.
//!
//! Contains:
//! - Wire types that are not part of the core domain (`HealthRes`, `ErrorRes`)
//! - OpenAPI schemas for documents the core keeps schemaless (`RecipeDoc`)
//! - The liveness service used by `/` and `/health`
//!
//! Used by `api-rest` and the `recipe-book-run` binary.

pub mod health;
pub mod schemas;

pub use health::HealthService;
pub use schemas::{ErrorRes, HealthRes, RecipeDoc};
