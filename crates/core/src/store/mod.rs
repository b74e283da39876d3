//! Persistence port for recipes.
//!
//! [`RecipeStore`] mirrors the five document-store primitives the service needs. Every call is
//! a single store round trip; the core keeps no copy of recipe state between calls.
//!
//! Two adapters are provided:
//! - [`MongoRecipeStore`]: the production adapter backed by a MongoDB collection.
//! - [`InMemoryRecipeStore`]: a process-local adapter for development and tests.

mod memory;
mod mongo;

pub use memory::InMemoryRecipeStore;
pub use mongo::MongoRecipeStore;

use crate::{DeleteOneAck, InsertOneAck, Recipe, RecipeId, RecipePatch, RecipeResult};

/// A mutation applied by [`RecipeStore::find_one_and_update`].
#[derive(Clone, Debug, PartialEq)]
pub enum RecipeUpdate {
    /// Set each field in the patch, leaving all other fields untouched.
    Set(RecipePatch),
    /// Add the given amount to `likeCount`.
    IncrementLikeCount(i64),
}

#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    /// Returns every recipe, or only those owned by `user_email` when given.
    async fn find(&self, user_email: Option<&str>) -> RecipeResult<Vec<Recipe>>;

    async fn find_one(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>>;

    async fn insert_one(&self, recipe: Recipe) -> RecipeResult<InsertOneAck>;

    /// Applies `update` to the matching recipe and returns it as it is after the update.
    async fn find_one_and_update(
        &self,
        id: &RecipeId,
        update: RecipeUpdate,
    ) -> RecipeResult<Option<Recipe>>;

    async fn delete_one(&self, id: &RecipeId) -> RecipeResult<DeleteOneAck>;
}
