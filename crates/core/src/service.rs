//! Recipe operations.
//!
//! [`RecipeService`] maps each public operation onto exactly one store call. Identifier and
//! body validation always happens first, so malformed input never reaches the store.

use crate::constants::LIKE_INCREMENT;
use crate::store::{RecipeStore, RecipeUpdate};
use crate::{
    DeleteOneAck, InsertOneAck, Recipe, RecipeError, RecipeId, RecipePatch, RecipeResult,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Pure recipe operations over an injected store - no API concerns.
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Lists recipes, optionally only those owned by `email`.
    ///
    /// An empty `email` is treated the same as no filter. Results come back in store order.
    pub async fn list(&self, email: Option<&str>) -> RecipeResult<Vec<Recipe>> {
        let email = email.filter(|e| !e.is_empty());
        self.store.find(email).await
    }

    /// Fetches a recipe by identifier.
    ///
    /// Returns `Ok(None)` when the identifier is well formed but nothing matches.
    pub async fn get(&self, id: &str) -> RecipeResult<Option<Recipe>> {
        let id = RecipeId::parse(id)?;
        self.store.find_one(&id).await
    }

    /// Creates a recipe from a request body.
    ///
    /// The identifier is allocated here and `likeCount` starts at zero.
    ///
    /// # Errors
    ///
    /// - [`RecipeError::MissingRequiredField`] if the body has no usable `userEmail`.
    /// - [`RecipeError::Store`] if the insert fails.
    pub async fn create(&self, body: Map<String, Value>) -> RecipeResult<InsertOneAck> {
        let recipe = Recipe::from_submission(RecipeId::new(), body)?;
        let ack = self.store.insert_one(recipe).await?;
        tracing::debug!("Created recipe {}", ack.inserted_id);
        Ok(ack)
    }

    /// Merges `patch` into the recipe and returns the updated record.
    ///
    /// An empty patch is a plain lookup.
    ///
    /// # Errors
    ///
    /// - [`RecipeError::InvalidIdentifier`] for a malformed `id`.
    /// - [`RecipeError::InvalidFieldValue`] if the patch fails normalisation.
    /// - [`RecipeError::NotFound`] if no recipe has this identifier.
    pub async fn update(&self, id: &str, patch: Map<String, Value>) -> RecipeResult<Recipe> {
        let id = RecipeId::parse(id)?;
        let patch = RecipePatch::new(patch)?;

        let updated = if patch.is_empty() {
            self.store.find_one(&id).await?
        } else {
            self.store
                .find_one_and_update(&id, RecipeUpdate::Set(patch))
                .await?
        };

        updated.ok_or(RecipeError::NotFound)
    }

    /// Applies the like increment and returns the recipe as stored afterwards.
    ///
    /// The increment is [`LIKE_INCREMENT`], so the returned count equals the stored one.
    pub async fn like(&self, id: &str) -> RecipeResult<Recipe> {
        let id = RecipeId::parse(id)?;
        self.store
            .find_one_and_update(&id, RecipeUpdate::IncrementLikeCount(LIKE_INCREMENT))
            .await?
            .ok_or(RecipeError::NotFound)
    }

    /// Deletes at most one recipe. A zero `deletedCount` is not an error.
    pub async fn delete(&self, id: &str) -> RecipeResult<DeleteOneAck> {
        let id = RecipeId::parse(id)?;
        self.store.delete_one(&id).await
    }
}
