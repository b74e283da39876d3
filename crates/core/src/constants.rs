//! Constants used throughout the recipe core crate.
//!
//! Field names, collection names and configuration defaults live here so the store adapters,
//! the service and the API layer all agree on the same spelling.

/// Document key holding the recipe identifier.
pub const ID_FIELD: &str = "_id";

/// Document key holding the owning user's email address.
pub const USER_EMAIL_FIELD: &str = "userEmail";

/// Document key holding the like counter.
pub const LIKE_COUNT_FIELD: &str = "likeCount";

/// Document key for the preparation time, coerced to an integer on update.
pub const PREPARATION_TIME_FIELD: &str = "preparationTime";

/// Amount added to `likeCount` by the like operation.
///
/// Zero: liking returns the current record without changing the stored count.
pub const LIKE_INCREMENT: i64 = 0;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default MongoDB SRV host.
pub const DEFAULT_DB_HOST: &str = "cluster0.8holrnh.mongodb.net";

/// Default MongoDB database name.
pub const DEFAULT_DB_NAME: &str = "recipeDB";

/// MongoDB collection holding the recipes.
pub const RECIPES_COLLECTION: &str = "recipes";

/// Application name reported to the MongoDB cluster.
pub const DB_APP_NAME: &str = "Cluster0";
