//! Validation at the server-to-client trust boundary.
//!
//! Every response body goes through [`parse_validated`]: serde checks the
//! shape (required fields, JSON types, enum variants) and the [`Validate`]
//! impl checks the constraints the types alone cannot carry. Either step
//! failing yields a [`ValidationError`] naming the field, and no value at all.

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::Result;

/// A payload that did not match its schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{path}` expected {expected}")]
pub struct ValidationError {
    /// Dotted path to the offending field, `$` for the document root.
    pub path: String,
    /// Expected type or constraint.
    pub expected: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Map a serde shape error, keeping the path serde was at when it failed.
    /// A missing field is reported at the object that lacks it.
    fn from_serde(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = match err.path().to_string() {
            root if root == "." => "$".to_string(),
            path => path,
        };
        Self::new(path, err.into_inner().to_string())
    }
}

/// Field path builder used while walking nested values.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath<'a> {
    parent: Option<&'a FieldPath<'a>>,
    segment: Segment<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Root,
    Field(&'a str),
    Index(usize),
}

impl<'a> FieldPath<'a> {
    pub fn root() -> Self {
        Self {
            parent: None,
            segment: Segment::Root,
        }
    }

    pub fn field(&'a self, name: &'a str) -> FieldPath<'a> {
        FieldPath {
            parent: Some(self),
            segment: Segment::Field(name),
        }
    }

    pub fn index(&'a self, i: usize) -> FieldPath<'a> {
        FieldPath {
            parent: Some(self),
            segment: Segment::Index(i),
        }
    }

    pub fn error(&self, expected: impl Into<String>) -> ValidationError {
        ValidationError::new(self.to_string(), expected)
    }
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.parent, self.segment) {
            (None, _) | (_, Segment::Root) => write!(f, "$"),
            (Some(parent), Segment::Field(name)) => {
                if matches!(parent.segment, Segment::Root) {
                    write!(f, "{name}")
                } else {
                    write!(f, "{parent}.{name}")
                }
            }
            (Some(parent), Segment::Index(i)) => {
                if matches!(parent.segment, Segment::Root) {
                    write!(f, "[{i}]")
                } else {
                    write!(f, "{parent}[{i}]")
                }
            }
        }
    }
}

/// Constraints checked after a value has been deserialized.
pub trait Validate {
    fn validate_at(&self, path: &FieldPath<'_>) -> std::result::Result<(), ValidationError>;

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.validate_at(&FieldPath::root())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_at(&self, path: &FieldPath<'_>) -> std::result::Result<(), ValidationError> {
        for (i, item) in self.iter().enumerate() {
            item.validate_at(&path.index(i))?;
        }
        Ok(())
    }
}

/// Deserialize and validate a response body in one step.
pub fn parse_validated<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let mut de = serde_json::Deserializer::from_slice(body);
    let value: T =
        serde_path_to_error::deserialize(&mut de).map_err(ValidationError::from_serde)?;
    de.end()
        .map_err(|e| ValidationError::new("$", e.to_string()))?;
    value.validate()?;
    Ok(value)
}

/// Same as [`parse_validated`] for an already decoded JSON value.
pub fn from_value_validated<T>(value: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T =
        serde_path_to_error::deserialize(value).map_err(ValidationError::from_serde)?;
    value.validate()?;
    Ok(value)
}

pub(crate) fn check_positive(
    path: &FieldPath<'_>,
    value: u32,
) -> std::result::Result<(), ValidationError> {
    if value == 0 {
        return Err(path.error("positive integer"));
    }
    Ok(())
}

pub(crate) fn check_url(
    path: &FieldPath<'_>,
    value: Option<&str>,
) -> std::result::Result<(), ValidationError> {
    match value {
        Some(raw) if Url::parse(raw).is_err() => Err(path.error("URL")),
        _ => Ok(()),
    }
}

pub(crate) fn check_fraction(
    path: &FieldPath<'_>,
    value: Option<f64>,
) -> std::result::Result<(), ValidationError> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => Err(path.error("fraction between 0 and 1")),
        _ => Ok(()),
    }
}

pub(crate) fn check_finite(
    path: &FieldPath<'_>,
    value: Option<f64>,
) -> std::result::Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() => Err(path.error("finite number")),
        _ => Ok(()),
    }
}
