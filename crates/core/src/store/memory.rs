use super::{RecipeStore, RecipeUpdate};
use crate::{DeleteOneAck, InsertOneAck, Recipe, RecipeError, RecipeId, RecipeResult};
use std::sync::{PoisonError, RwLock};

/// Process-local recipe store.
///
/// Recipes are kept in insertion order, which is the order [`RecipeStore::find`] returns them
/// in. State is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RecipeError {
    RecipeError::store("in-memory recipe store lock poisoned")
}

#[async_trait::async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn find(&self, user_email: Option<&str>) -> RecipeResult<Vec<Recipe>> {
        let recipes = self.recipes.read().map_err(poisoned)?;
        Ok(recipes
            .iter()
            .filter(|r| user_email.map_or(true, |email| r.user_email == email))
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        let recipes = self.recipes.read().map_err(poisoned)?;
        Ok(recipes.iter().find(|r| r.id == *id).cloned())
    }

    async fn insert_one(&self, recipe: Recipe) -> RecipeResult<InsertOneAck> {
        let mut recipes = self.recipes.write().map_err(poisoned)?;
        if recipes.iter().any(|r| r.id == recipe.id) {
            return Err(RecipeError::store(format!(
                "duplicate key: {} already exists",
                recipe.id
            )));
        }
        let ack = InsertOneAck::new(recipe.id);
        recipes.push(recipe);
        Ok(ack)
    }

    async fn find_one_and_update(
        &self,
        id: &RecipeId,
        update: RecipeUpdate,
    ) -> RecipeResult<Option<Recipe>> {
        let mut recipes = self.recipes.write().map_err(poisoned)?;
        let Some(recipe) = recipes.iter_mut().find(|r| r.id == *id) else {
            return Ok(None);
        };

        match update {
            RecipeUpdate::Set(patch) => recipe.apply_patch(&patch),
            RecipeUpdate::IncrementLikeCount(by) => {
                recipe.like_count = recipe.like_count.saturating_add(by)
            }
        }

        Ok(Some(recipe.clone()))
    }

    async fn delete_one(&self, id: &RecipeId) -> RecipeResult<DeleteOneAck> {
        let mut recipes = self.recipes.write().map_err(poisoned)?;
        let deleted = match recipes.iter().position(|r| r.id == *id) {
            Some(index) => {
                recipes.remove(index);
                1
            }
            None => 0,
        };
        Ok(DeleteOneAck::new(deleted))
    }
}
