//! Recipe documents and the request shapes that produce or modify them.
//!
//! A recipe has three known fields (`_id`, `userEmail`, `likeCount`) and an open set of
//! additional fields (title, ingredients, servings, ...) that are stored and returned as-is.
//! The known fields are typed; everything else lives in [`Recipe::fields`] and serializes flat
//! alongside them.

use crate::constants::{
    ID_FIELD, LIKE_COUNT_FIELD, PREPARATION_TIME_FIELD, USER_EMAIL_FIELD,
};
use crate::{RecipeError, RecipeId, RecipeResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A persisted recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: RecipeId,
    #[serde(rename = "userEmail", default)]
    pub user_email: String,
    #[serde(rename = "likeCount", default)]
    pub like_count: i64,
    /// Pass-through fields, never inspected by the core.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Recipe {
    /// Builds a new recipe from a create request body.
    ///
    /// The identifier is supplied by the caller, any `_id` in the body is discarded, and
    /// `likeCount` is forced to zero whatever the body says.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::MissingRequiredField`] if `userEmail` is absent, not a string,
    /// or blank.
    pub fn from_submission(id: RecipeId, mut body: Map<String, Value>) -> RecipeResult<Self> {
        body.remove(ID_FIELD);
        body.remove(LIKE_COUNT_FIELD);

        let user_email = match body.remove(USER_EMAIL_FIELD) {
            Some(Value::String(email)) if !email.trim().is_empty() => email,
            _ => return Err(RecipeError::MissingRequiredField(USER_EMAIL_FIELD)),
        };

        Ok(Self {
            id,
            user_email,
            like_count: 0,
            fields: body,
        })
    }

    /// Merges a patch into this recipe. Fields absent from the patch are left untouched.
    pub fn apply_patch(&mut self, patch: &RecipePatch) {
        for (key, value) in &patch.0 {
            match key.as_str() {
                USER_EMAIL_FIELD => {
                    if let Value::String(email) = value {
                        self.user_email = email.clone();
                    }
                }
                LIKE_COUNT_FIELD => {
                    if let Some(count) = value.as_i64() {
                        self.like_count = count;
                    }
                }
                _ => {
                    self.fields.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// A validated partial update.
///
/// Construction strips `_id`, checks the known fields keep their types, and coerces a textual
/// `preparationTime` into an integer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipePatch(Map<String, Value>);

impl RecipePatch {
    /// Validates and normalises a patch body.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::InvalidFieldValue`] if:
    /// - `userEmail` is present but not a non-blank string,
    /// - `likeCount` is present but not a non-negative integer, or
    /// - `preparationTime` is text that does not start with an integer.
    pub fn new(mut body: Map<String, Value>) -> RecipeResult<Self> {
        body.remove(ID_FIELD);

        if let Some(email) = body.get(USER_EMAIL_FIELD) {
            match email {
                Value::String(s) if !s.trim().is_empty() => {}
                _ => {
                    return Err(RecipeError::invalid_field(
                        USER_EMAIL_FIELD,
                        "must be a non-empty string",
                    ))
                }
            }
        }

        if let Some(count) = body.get(LIKE_COUNT_FIELD) {
            match count.as_u64().and_then(|n| i64::try_from(n).ok()) {
                Some(n) => {
                    body.insert(LIKE_COUNT_FIELD.to_owned(), Value::from(n));
                }
                None => {
                    return Err(RecipeError::invalid_field(
                        LIKE_COUNT_FIELD,
                        "must be a non-negative integer",
                    ))
                }
            }
        }

        if let Some(Value::String(text)) = body.get(PREPARATION_TIME_FIELD) {
            let minutes = parse_leading_integer(text).ok_or_else(|| {
                RecipeError::invalid_field(
                    PREPARATION_TIME_FIELD,
                    format!("'{text}' is not a number"),
                )
            })?;
            body.insert(PREPARATION_TIME_FIELD.to_owned(), Value::from(minutes));
        }

        Ok(Self(body))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Parses the integer at the start of `text`, ignoring leading whitespace and anything after
/// the digits. `"40 min"` yields 40; `"about 40"` yields `None`.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed[..sign_len + digits_len].parse().ok()
}

/// Acknowledgment returned by a successful insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneAck {
    pub acknowledged: bool,
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub inserted_id: RecipeId,
    pub inserted_count: u64,
}

impl InsertOneAck {
    pub fn new(inserted_id: RecipeId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
            inserted_count: 1,
        }
    }
}

/// Acknowledgment returned by a delete, whether or not anything matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOneAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOneAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    #[test]
    fn test_from_submission_forces_like_count_and_drops_id() {
        let id = RecipeId::new();
        let body = object(json!({
            "_id": "507f1f77bcf86cd799439011",
            "userEmail": "a@b.com",
            "likeCount": 99,
            "title": "Soup",
        }));

        let recipe = Recipe::from_submission(id, body).expect("valid submission");

        assert_eq!(recipe.id, id);
        assert_eq!(recipe.user_email, "a@b.com");
        assert_eq!(recipe.like_count, 0);
        assert_eq!(recipe.fields, object(json!({ "title": "Soup" })));
    }

    #[test]
    fn test_from_submission_requires_user_email() {
        for body in [
            json!({ "title": "Soup" }),
            json!({ "userEmail": "" }),
            json!({ "userEmail": "   " }),
            json!({ "userEmail": null }),
            json!({ "userEmail": 42 }),
        ] {
            let err = Recipe::from_submission(RecipeId::new(), object(body))
                .expect_err("submission without an email should fail");
            assert!(matches!(
                err,
                RecipeError::MissingRequiredField(USER_EMAIL_FIELD)
            ));
        }
    }

    #[test]
    fn test_serializes_flat_with_wire_names() {
        let id = RecipeId::parse("507f1f77bcf86cd799439011").unwrap();
        let recipe = Recipe {
            id,
            user_email: "a@b.com".into(),
            like_count: 3,
            fields: object(json!({ "servings": 4 })),
        };

        assert_eq!(
            serde_json::to_value(&recipe).unwrap(),
            json!({
                "_id": "507f1f77bcf86cd799439011",
                "userEmail": "a@b.com",
                "likeCount": 3,
                "servings": 4,
            })
        );
    }

    #[test]
    fn test_patch_coerces_preparation_time_text() {
        let patch = RecipePatch::new(object(json!({ "preparationTime": " 40 min" })))
            .expect("leading integer should coerce");
        assert_eq!(patch.fields()["preparationTime"], json!(40));

        let patch = RecipePatch::new(object(json!({ "preparationTime": 15 })))
            .expect("numbers pass through");
        assert_eq!(patch.fields()["preparationTime"], json!(15));
    }

    #[test]
    fn test_patch_rejects_non_numeric_preparation_time() {
        let err = RecipePatch::new(object(json!({ "preparationTime": "about an hour" })))
            .expect_err("text without digits should be rejected");
        assert!(matches!(
            err,
            RecipeError::InvalidFieldValue { ref field, .. } if field == PREPARATION_TIME_FIELD
        ));
    }

    #[test]
    fn test_patch_guards_known_fields() {
        assert!(RecipePatch::new(object(json!({ "likeCount": -1 }))).is_err());
        assert!(RecipePatch::new(object(json!({ "likeCount": 1.5 }))).is_err());
        assert!(RecipePatch::new(object(json!({ "userEmail": "" }))).is_err());
        assert!(RecipePatch::new(object(json!({ "likeCount": 7 }))).is_ok());
    }

    #[test]
    fn test_patch_drops_id() {
        let patch = RecipePatch::new(object(json!({ "_id": "x" }))).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_apply_patch_is_a_partial_merge() {
        let mut recipe = Recipe {
            id: RecipeId::new(),
            user_email: "a@b.com".into(),
            like_count: 2,
            fields: object(json!({ "title": "Old", "servings": 4 })),
        };
        let patch = RecipePatch::new(object(json!({ "title": "X" }))).unwrap();

        recipe.apply_patch(&patch);

        assert_eq!(recipe.fields["title"], json!("X"));
        assert_eq!(recipe.fields["servings"], json!(4));
        assert_eq!(recipe.user_email, "a@b.com");
        assert_eq!(recipe.like_count, 2);
    }

    #[test]
    fn test_parse_leading_integer() {
        assert_eq!(parse_leading_integer("25"), Some(25));
        assert_eq!(parse_leading_integer("  -3 degrees"), Some(-3));
        assert_eq!(parse_leading_integer("+7"), Some(7));
        assert_eq!(parse_leading_integer("12.9"), Some(12));
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer("abc"), None);
    }
}
