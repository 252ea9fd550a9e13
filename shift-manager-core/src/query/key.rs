//! 查询键

use std::fmt;

/// 查询键的一段
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySegment {
    Name(String),
    Id(i64),
}

impl From<&str> for KeySegment {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<i64> for KeySegment {
    fn from(value: i64) -> Self {
        Self::Id(value)
    }
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name:?}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// 稳定的资源键，例如 `["schedule-template", 3]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<KeySegment>);

impl QueryKey {
    /// 以资源名开头的键
    pub fn new(resource: &str) -> Self {
        Self(vec![resource.into()])
    }

    /// 追加一段
    #[must_use]
    pub fn with(mut self, segment: impl Into<KeySegment>) -> Self {
        self.0.push(segment.into());
        self
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment}")?;
        }
        f.write_str("]")
    }
}
