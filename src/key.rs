use std::{fmt, hash::Hash};

use crate::error::KeyError;

/// Identifies a vertex within a graph.
///
/// Two key types are provided: `i64` ids, where every vertex also carries an
/// integer value, and `String` names, which carry nothing else.
pub trait VertexKey: Clone + Eq + Hash + fmt::Display + fmt::Debug {
    /// Payload stored next to the key.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Parses a key out of a single whitespace-free token.
    fn parse_key(token: &str) -> Result<Self, KeyError>;

    /// The value a vertex receives when it is created from its key alone.
    fn initial_value(&self) -> Self::Value;

    /// How the vertex is shown in the formatted dump.
    fn render(&self, value: &Self::Value) -> String;
}

impl VertexKey for i64 {
    type Value = i64;

    fn parse_key(token: &str) -> Result<Self, KeyError> {
        token.parse().map_err(|source| KeyError::NotAnInteger {
            token: token.to_string(),
            source,
        })
    }

    fn initial_value(&self) -> Self::Value {
        *self
    }

    fn render(&self, value: &Self::Value) -> String {
        format!("({})[{:>2}]", value, self)
    }
}

impl VertexKey for String {
    type Value = ();

    fn parse_key(token: &str) -> Result<Self, KeyError> {
        Ok(token.to_string())
    }

    fn initial_value(&self) -> Self::Value {}

    fn render(&self, _: &Self::Value) -> String {
        format!("[{}]", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_keys() {
        assert_eq!(i64::parse_key("42"), Ok(42));
        assert_eq!(i64::parse_key("-7"), Ok(-7));
        assert!(matches!(
            i64::parse_key("x1"),
            Err(KeyError::NotAnInteger { token, .. }) if token == "x1"
        ));
    }

    #[test]
    fn integer_value_defaults_to_id() {
        assert_eq!(9i64.initial_value(), 9);
    }

    #[test]
    fn name_keys_accept_any_token() {
        assert_eq!(String::parse_key("x1"), Ok("x1".to_string()));
        assert_eq!(String::parse_key("42"), Ok("42".to_string()));
    }

    #[test]
    fn render() {
        assert_eq!(3i64.render(&3), "(3)[ 3]");
        assert_eq!(12i64.render(&5), "(5)[12]");
        assert_eq!("a".to_string().render(&()), "[a]");
    }
}
