use std::fmt;

/// Outcome of a content mutation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    Skipped(SkipReason),
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why a mutation left the collection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No article was supplied
    MissingArticle,
    /// The article or the requested id is blank
    MissingId,
    /// No article has the requested id
    NotFound,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingArticle => "missing_article",
            Self::MissingId => "missing_id",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
