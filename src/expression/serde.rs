use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{parser::Token, Expression};

/// Expressions are serialized as their token sequence.
impl Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tokens().serialize(serializer)
    }
}

/// Deserialization runs the same validation as [`Expression::from_tokens`].
impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tokens = Vec::<Token>::deserialize(deserializer)?;
        Expression::from_tokens(&tokens)
            .map_err(|e| de::Error::custom(format!("invalid expression - {}", e)))
    }
}
