use super::{RecipeStore, RecipeUpdate};
use crate::config::StoreConfig;
use crate::constants::{ID_FIELD, LIKE_COUNT_FIELD, RECIPES_COLLECTION, USER_EMAIL_FIELD};
use crate::{DeleteOneAck, InsertOneAck, Recipe, RecipeError, RecipeId, RecipeResult};
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::options::{ClientOptions, ReturnDocument, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection};
use serde_json::{Map, Number, Value};

/// Recipe store backed by a MongoDB collection.
///
/// The client is created once and shared; the driver pools connections internally.
#[derive(Clone, Debug)]
pub struct MongoRecipeStore {
    collection: Collection<Document>,
}

impl MongoRecipeStore {
    /// Connects to the cluster described by `cfg` using the Stable API v1.
    ///
    /// A failed `ping` is logged but not fatal; the driver keeps retrying server selection on
    /// each operation.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Store`] if the connection string cannot be parsed or the client
    /// cannot be built.
    pub async fn connect(cfg: &StoreConfig) -> RecipeResult<Self> {
        let mut options = ClientOptions::parse(cfg.connection_string()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let database = client.database(cfg.database());

        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => tracing::info!("Connected to MongoDB at {}", cfg.host()),
            Err(e) => tracing::warn!("MongoDB ping to {} failed: {}", cfg.host(), e),
        }

        Ok(Self::from_collection(
            database.collection(RECIPES_COLLECTION),
        ))
    }

    pub fn from_collection(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait::async_trait]
impl RecipeStore for MongoRecipeStore {
    async fn find(&self, user_email: Option<&str>) -> RecipeResult<Vec<Recipe>> {
        let filter = match user_email {
            Some(email) => doc! { USER_EMAIL_FIELD: email },
            None => Document::new(),
        };

        let mut cursor = self.collection.find(filter).await?;
        let mut recipes = Vec::new();
        while cursor.advance().await? {
            recipes.push(recipe_from_document(cursor.deserialize_current()?)?);
        }
        Ok(recipes)
    }

    async fn find_one(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>> {
        self.collection
            .find_one(id_filter(id))
            .await?
            .map(recipe_from_document)
            .transpose()
    }

    async fn insert_one(&self, recipe: Recipe) -> RecipeResult<InsertOneAck> {
        let document = recipe_to_document(&recipe)?;
        let result = self.collection.insert_one(document).await?;
        let inserted_id = result
            .inserted_id
            .as_object_id()
            .map(RecipeId::from)
            .unwrap_or(recipe.id);
        Ok(InsertOneAck::new(inserted_id))
    }

    async fn find_one_and_update(
        &self,
        id: &RecipeId,
        update: RecipeUpdate,
    ) -> RecipeResult<Option<Recipe>> {
        self.collection
            .find_one_and_update(id_filter(id), update_document(&update)?)
            .return_document(ReturnDocument::After)
            .await?
            .map(recipe_from_document)
            .transpose()
    }

    async fn delete_one(&self, id: &RecipeId) -> RecipeResult<DeleteOneAck> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(DeleteOneAck::new(result.deleted_count))
    }
}

fn id_filter(id: &RecipeId) -> Document {
    doc! { ID_FIELD: id.object_id() }
}

fn fields_to_document(fields: &Map<String, Value>) -> RecipeResult<Document> {
    let fields: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), bson_compatible(value)))
        .collect();
    bson::to_document(&fields).map_err(RecipeError::store)
}

/// BSON has no unsigned integers, so integers above `i64::MAX` are stored as doubles.
fn bson_compatible(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_u64() && n.as_i64().is_none() => n
            .as_f64()
            .and_then(Number::from_f64)
            .map_or_else(|| value.clone(), Value::Number),
        Value::Array(items) => Value::Array(items.iter().map(bson_compatible).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), bson_compatible(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn update_document(update: &RecipeUpdate) -> RecipeResult<Document> {
    match update {
        RecipeUpdate::Set(patch) => {
            let set = fields_to_document(patch.fields())?;
            Ok(doc! { "$set": set })
        }
        RecipeUpdate::IncrementLikeCount(by) => {
            let mut inc = Document::new();
            inc.insert(LIKE_COUNT_FIELD, *by);
            Ok(doc! { "$inc": inc })
        }
    }
}

fn recipe_to_document(recipe: &Recipe) -> RecipeResult<Document> {
    let mut document = Document::new();
    document.insert(ID_FIELD, recipe.id.object_id());
    document.insert(USER_EMAIL_FIELD, recipe.user_email.clone());
    document.insert(LIKE_COUNT_FIELD, recipe.like_count);
    for (key, value) in fields_to_document(&recipe.fields)? {
        document.insert(key, value);
    }
    Ok(document)
}

fn recipe_from_document(mut document: Document) -> RecipeResult<Recipe> {
    let id = match document.remove(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => RecipeId::from(oid),
        other => {
            return Err(RecipeError::store(format!(
                "recipe document has no ObjectId _id (found {other:?})"
            )))
        }
    };

    let mut fields = match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => map,
        other => {
            return Err(RecipeError::store(format!(
                "recipe document did not convert to a JSON object: {other}"
            )))
        }
    };

    let user_email = match fields.remove(USER_EMAIL_FIELD) {
        Some(Value::String(email)) => email,
        _ => String::new(),
    };
    let like_count = fields
        .remove(LIKE_COUNT_FIELD)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0);

    Ok(Recipe {
        id,
        user_email,
        like_count,
        fields,
    })
}
