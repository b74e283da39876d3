//! Recipe identifiers.
//!
//! Recipes are keyed by a 12-byte MongoDB `ObjectId`. On the wire an identifier is always the
//! 24-character hexadecimal form, for example `507f1f77bcf86cd799439011`.
//!
//! Identifiers arriving from outside the core (path segments, request bodies) must go through
//! [`RecipeId::parse`] before they reach a store. The driver would otherwise fail on malformed
//! input with an opaque error instead of a client error.

use crate::{RecipeError, RecipeResult};
use mongodb::bson::oid::ObjectId;
use std::{fmt, str::FromStr};

/// Number of hex characters in a wire-encoded identifier.
pub const RECIPE_ID_HEX_LEN: usize = 24;

/// A validated recipe identifier.
///
/// Once constructed the wrapped `ObjectId` is known to be well formed. Display and
/// serialization always produce the lowercase 24-character hex form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(ObjectId);

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeId {
    /// Allocates a fresh identifier.
    ///
    /// ObjectIds embed a creation timestamp, so freshly allocated identifiers sort roughly by
    /// creation time.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Validates an externally supplied identifier.
    ///
    /// Accepts exactly 24 hexadecimal characters in either case.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::InvalidIdentifier`] for any other input.
    pub fn parse(input: &str) -> RecipeResult<Self> {
        if !Self::is_valid(input) {
            return Err(RecipeError::InvalidIdentifier(input.to_owned()));
        }
        ObjectId::parse_str(input)
            .map(Self)
            .map_err(|_| RecipeError::InvalidIdentifier(input.to_owned()))
    }

    /// Returns true if `input` is a syntactically valid identifier.
    pub fn is_valid(input: &str) -> bool {
        input.len() == RECIPE_ID_HEX_LEN && input.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Returns the underlying `ObjectId` for driver calls.
    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for RecipeId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for RecipeId {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl serde::Serialize for RecipeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecipeId::parse(&s).map_err(serde::de::Error::custom)
    }
}
