//! Option records and the resolver that lays caller overrides over group defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::AppError;

/// A single option value. Rendered into URLs exactly as `Display` prints it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Str(String),
}

impl OptionValue {
    /// Parses a raw command-line value. Text that is already the canonical
    /// form of an integer becomes `Int`; everything else, including `007`
    /// or `+1`, is kept verbatim as `Str`.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .ok()
            .filter(|n| n.to_string() == raw)
            .map_or_else(|| OptionValue::Str(raw.to_string()), OptionValue::Int)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// Per-call parameter set keyed by option name (`team_key`, `year`, ...).
///
/// Records are cheap, owned values: build one per call and drop it once the
/// URL exists. Nothing in the crate keeps a record between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsRecord(BTreeMap<String, OptionValue>);

impl OptionsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// ```
    /// use tba_wrapper::options::OptionsRecord;
    ///
    /// let opts = OptionsRecord::new().with("team_key", "frc254").with("year", 2014);
    /// assert_eq!(opts.get("year").map(|v| v.to_string()), Some("2014".to_string()));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parses `key=value` pairs as given on the command line.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = OptionsRecord::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| AppError::invalid_option(pair))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(AppError::invalid_option(pair));
            }
            record.set(key, OptionValue::parse(value.trim()));
        }
        Ok(record)
    }
}

impl<K, V> FromIterator<(K, V)> for OptionsRecord
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        OptionsRecord(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Lays `overrides` over `defaults` and returns the effective record.
///
/// Every key of `defaults` is present in the result; a key that also appears
/// in `overrides` takes the override value whatever its type. Keys that only
/// exist in `overrides` are carried through unchanged. Neither input is
/// modified, so concurrent callers sharing one defaults record never see each
/// other's values.
pub fn resolve(defaults: &OptionsRecord, overrides: &OptionsRecord) -> OptionsRecord {
    let mut effective = defaults.clone();
    for (key, value) in overrides.iter() {
        effective.set(key, value.clone());
    }
    effective
}
