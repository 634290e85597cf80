//! Scalar query values and the open-ended override mapping handed to endpoint builders.

use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A single query parameter value as sent to PVGIS.
///
/// Booleans have no variant of their own: the API expects them as `0` / `1`,
/// so `From<bool>` produces [`ParamValue::Int`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write!(f, "{value}"),
            ParamValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// User supplied parameter overrides.
///
/// Each entry either carries a value, which takes precedence over the endpoint's
/// default, or is explicitly unset, which drops the parameter from the query so the
/// server applies its own default.
///
/// # Examples
///
/// ```
/// use pvgis::{ParamValue, Parameters};
///
/// let mut overrides = Parameters::new()
///     .with("outputformat", "json")
///     .with("angle", 35.0);
/// overrides.unset("usehorizon");
///
/// assert_eq!(overrides.get("angle"), Some(Some(&ParamValue::Float(35.0))));
/// assert_eq!(overrides.get("usehorizon"), Some(None));
/// assert_eq!(overrides.get("browser"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters(BTreeMap<String, Option<ParamValue>>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style variant of [`Parameters::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.0.insert(key.into(), Some(value.into()));
        self
    }

    /// Marks `key` as explicitly unset, removing it from the resolved query.
    pub fn unset(&mut self, key: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), None);
        self
    }

    /// `None` if the key was never mentioned, `Some(None)` if it was explicitly unset.
    pub fn get(&self, key: &str) -> Option<Option<&ParamValue>> {
        self.0.get(key).map(Option::as_ref)
    }

    /// Merges `other` into `self`; keys present in both take the value from `other`.
    pub fn merge(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        )
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Option<ParamValue>);
    type IntoIter = btree_map::IntoIter<String, Option<ParamValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
