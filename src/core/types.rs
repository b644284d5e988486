use serde::{Deserialize, Serialize};

/// One of the two scriptural canons being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Corpus {
    /// The LDS standard works
    Lds,
    /// The RLDS (Community of Christ) canon
    Rlds,
}

impl Corpus {
    /// The canon on the other side of the cross-reference table
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Lds => Self::Rlds,
            Self::Rlds => Self::Lds,
        }
    }

    /// Short name as stored in the `corpus` table
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Lds => "LDS",
            Self::Rlds => "RLDS",
        }
    }

    /// Parse a corpus short name (case-insensitive)
    #[must_use]
    pub fn from_short_name(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LDS" => Some(Self::Lds),
            "RLDS" => Some(Self::Rlds),
            _ => None,
        }
    }
}

impl std::fmt::Display for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Scope of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Verse,
    Chapter,
    Book,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verse => write!(f, "verse"),
            Self::Chapter => write!(f, "chapter"),
            Self::Book => write!(f, "book"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_other_is_involution() {
        assert_eq!(Corpus::Lds.other(), Corpus::Rlds);
        assert_eq!(Corpus::Rlds.other(), Corpus::Lds);
        assert_eq!(Corpus::Lds.other().other(), Corpus::Lds);
    }

    #[test]
    fn test_corpus_short_name_round_trip() {
        for corpus in [Corpus::Lds, Corpus::Rlds] {
            assert_eq!(Corpus::from_short_name(corpus.short_name()), Some(corpus));
        }
        assert_eq!(Corpus::from_short_name("rlds"), Some(Corpus::Rlds));
        assert_eq!(Corpus::from_short_name("KJV"), None);
    }
}
