//! Caller filters and their validation against an [`OperationSpec`].

use crate::error::{GeneratorError, Result};
use crate::operation::{DefaultValue, FilterSpec, Operation, OperationSpec, Presence, Rule};
use fordev_core::{CoreError, Uf};
use std::collections::BTreeMap;
use std::fmt;

/// A single filter value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl FilterValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for FilterValue {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Uf> for FilterValue {
    fn from(value: Uf) -> Self {
        Self::Text(value.code().to_string())
    }
}

impl From<fordev_core::Sex> for FilterValue {
    fn from(value: fordev_core::Sex) -> Self {
        Self::Text(value.code().to_string())
    }
}

impl From<DefaultValue> for FilterValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Text(s) => Self::Text(s.to_string()),
            DefaultValue::Integer(i) => Self::Integer(i),
            DefaultValue::Bool(b) => Self::Bool(b),
        }
    }
}

/// Filters for one generator call, keyed by filter name.
///
/// ```rust
/// use fordev_generators::FilterParameters;
///
/// let params = FilterParameters::new()
///     .with("sex", "M")
///     .with("age", 25)
///     .with("state", "SP");
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParameters {
    values: BTreeMap<String, FilterValue>,
}

impl FilterParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.values.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Filters that passed validation, with every declared filter present.
///
/// Only [`validate`] can construct one, and it cannot be modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFilters {
    operation: Operation,
    values: BTreeMap<&'static str, FilterValue>,
}

impl ValidatedFilters {
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn spec(&self) -> &'static OperationSpec {
        self.operation.spec()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FilterValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(FilterValue::Integer(i)) => Some(*i),
            _ => None,
        }
    }
}

/// Check caller filters against the operation's declared filters.
///
/// Unknown names, missing required filters, wrong value types and
/// out-of-domain values are all rejected. Absent optional filters take their
/// defaults; text values are normalised to upper case.
pub fn validate(operation: Operation, params: &FilterParameters) -> Result<ValidatedFilters> {
    let spec = operation.spec();

    for (name, _) in params.iter() {
        if spec.filter(name).is_none() {
            let expected = spec.filter_names();
            let reason = if expected.is_empty() {
                format!("{operation} accepts no filters")
            } else {
                format!(
                    "unknown filter for {operation}; expected one of: {}",
                    expected.join(", ")
                )
            };
            return Err(GeneratorError::validation(name, reason));
        }
    }

    let mut values = BTreeMap::new();

    for filter in spec.filters {
        let value = match (params.get(filter.name), filter.presence) {
            (Some(value), _) => value.clone(),
            (None, Presence::Optional(default)) => FilterValue::from(default),
            (None, Presence::Required) => {
                return Err(GeneratorError::validation(
                    filter.name,
                    format!("is required by {operation}"),
                ));
            }
        };

        let checked = check_rule(filter.name, filter.rule, blank_to_default(filter, value))?;
        values.insert(filter.name, checked);
    }

    tracing::debug!(operation = %operation, filters = values.len(), "filters validated");

    Ok(ValidatedFilters { operation, values })
}

/// A blank choice stands for the filter's default (random sex, any
/// certificate kind).
fn blank_to_default(filter: &FilterSpec, value: FilterValue) -> FilterValue {
    if let (
        Rule::Choice(_),
        Presence::Optional(DefaultValue::Text(default)),
        FilterValue::Text(text),
    ) = (filter.rule, filter.presence, &value)
    {
        if text.trim().is_empty() {
            return FilterValue::Text(default.to_string());
        }
    }
    value
}

fn check_rule(name: &str, rule: Rule, value: FilterValue) -> Result<FilterValue> {
    match (rule, value) {
        (Rule::Uf { allow_blank }, FilterValue::Text(text)) => {
            if text.trim().is_empty() {
                return if allow_blank {
                    Ok(FilterValue::Text(String::new()))
                } else {
                    Err(GeneratorError::validation(name, "a state code is required"))
                };
            }
            let uf = Uf::from_code(&text).map_err(|e| match e {
                CoreError::Validation(msg) => GeneratorError::validation(name, msg),
                other => GeneratorError::validation(name, other.to_string()),
            })?;
            Ok(FilterValue::Text(uf.code().to_string()))
        }
        (Rule::Choice(options), FilterValue::Text(text)) => {
            let upper = text.trim().to_uppercase();
            if options.iter().any(|o| *o == upper) {
                Ok(FilterValue::Text(upper))
            } else {
                Err(GeneratorError::validation(
                    name,
                    format!("'{text}' is not one of {}", options.join(", ")),
                ))
            }
        }
        (
            Rule::Range {
                min,
                max,
                zero_is_random,
            },
            FilterValue::Integer(n),
        ) => {
            if (min..=max).contains(&n) || (zero_is_random && n == 0) {
                Ok(FilterValue::Integer(n))
            } else if zero_is_random {
                Err(GeneratorError::validation(
                    name,
                    format!("{n} is outside {min}..={max} (or 0 for random)"),
                ))
            } else {
                Err(GeneratorError::validation(
                    name,
                    format!("{n} is outside {min}..={max}"),
                ))
            }
        }
        (Rule::Flag, FilterValue::Bool(b)) => Ok(FilterValue::Bool(b)),
        (rule, value) => {
            let expected = match rule {
                Rule::Uf { .. } | Rule::Choice(_) => "text",
                Rule::Range { .. } => "integer",
                Rule::Flag => "boolean",
            };
            Err(GeneratorError::validation(
                name,
                format!("expected {expected}, got {} '{value}'", value.kind()),
            ))
        }
    }
}
