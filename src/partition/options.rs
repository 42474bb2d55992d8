// src/partition/options.rs

use std::fmt;
use serde::{Deserialize, Serialize};

/// Requested subset count, kept loosely typed.
///
/// A non-integer count is a reportable validation error rather than a type
/// error at the call site, so the count survives round trips through
/// embedded configuration (the untagged representation accepts whatever JSON
/// value was written and lets the partitioner judge it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<i64> for Count {
    fn from(value: i64) -> Self {
        Count::Integer(value)
    }
}

impl From<i32> for Count {
    fn from(value: i32) -> Self {
        Count::Integer(i64::from(value))
    }
}

impl From<u32> for Count {
    fn from(value: u32) -> Self {
        Count::Integer(i64::from(value))
    }
}

impl From<usize> for Count {
    fn from(value: usize) -> Self {
        Count::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Count {
    fn from(value: f64) -> Self {
        Count::Float(value)
    }
}

impl From<&str> for Count {
    fn from(value: &str) -> Self {
        Count::Text(value.to_string())
    }
}

impl From<String> for Count {
    fn from(value: String) -> Self {
        Count::Text(value)
    }
}

/// Options for one partition call: one optional field, the subset count.
///
/// An absent count means a single subset holding the full product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,
}

impl PartitionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options requesting `count` disjoint subsets.
    pub fn with_count(count: impl Into<Count>) -> Self {
        PartitionOptions {
            count: Some(count.into()),
        }
    }
}
