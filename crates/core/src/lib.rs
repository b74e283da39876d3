//! # Recipe Core
//!
//! Core business logic for the recipe book API.
//!
//! This crate contains pure data operations over the recipes collection:
//! - The [`Recipe`] document type and the request shapes that create or patch it
//! - Identifier validation ([`RecipeId`])
//! - The [`store::RecipeStore`] port with MongoDB and in-memory adapters
//! - [`RecipeService`], which implements list/get/create/update/like/delete
//!
//! **No API concerns**: HTTP routing, CORS and response mapping belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod recipe;
pub mod service;
pub mod store;

pub use config::{port_from_env_value, StoreConfig};
pub use error::{RecipeError, RecipeResult, StoreFault};
pub use id::RecipeId;
pub use recipe::{DeleteOneAck, InsertOneAck, Recipe, RecipePatch};
pub use service::RecipeService;
