use crate::report::path::JsonPath;
use std::fmt;

/// Domain invariants that a generic schema language cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticRule {
    /// A residue index appears more than once in one molecule's sequence.
    DuplicateResidueIndex,
    /// A molecule's residue indices do not form a contiguous range.
    ResidueIndexGap,
    /// A base pair joins a residue to itself.
    SelfPairing,
    /// A base pair joins two neighbouring residues.
    AdjacentPairing,
    /// `residueIndex1` of a base pair names no residue of the molecule.
    UnresolvedPairIndex1,
    /// `residueIndex2` of a base pair names no residue of the molecule.
    UnresolvedPairIndex2,
    /// A label is attached to a residue index the molecule does not declare.
    UnresolvedLabelIndex,
    /// A class name is referenced but not declared in the top-level registry.
    UndeclaredClass,
}

impl SemanticRule {
    /// Stable identifier used as the tally key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateResidueIndex => "duplicateResidueIndex",
            Self::ResidueIndexGap => "residueIndexGap",
            Self::SelfPairing => "selfPairing",
            Self::AdjacentPairing => "adjacentPairing",
            Self::UnresolvedPairIndex1 => "unresolvedResidueIndex1",
            Self::UnresolvedPairIndex2 => "unresolvedResidueIndex2",
            Self::UnresolvedLabelIndex => "unresolvedLabelResidueIndex",
            Self::UndeclaredClass => "undeclaredClass",
        }
    }
}

/// Which rule a violation breaks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A schema keyword reported by the structural check (`type`, `required`, ...).
    Structural(String),
    Semantic(SemanticRule),
}

impl RuleKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Structural(keyword) => keyword,
            Self::Semantic(rule) => rule.as_str(),
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule violation found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleKind,
    /// Where the offending value lives, e.g. `$.rnaComplexes[0].rnaMolecules[1].basePairs[3]`.
    pub location: String,
    pub message: String,
}

impl Violation {
    pub fn structural(
        keyword: impl Into<String>,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: RuleKind::Structural(keyword.into()),
            location: location.into(),
            message: message.into(),
        }
    }

    pub(crate) fn semantic(rule: SemanticRule, at: &JsonPath, message: impl Into<String>) -> Self {
        Self {
            rule: RuleKind::Semantic(rule),
            location: at.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}
