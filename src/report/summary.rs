use crate::report::violation::Violation;
use std::collections::BTreeMap;

/// Terminal state of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

/// Every violation found in one pass, plus occurrence counts per rule kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
    tally: BTreeMap<String, usize>,
}

impl ValidationReport {
    pub(crate) fn from_violations(violations: Vec<Violation>) -> Self {
        let mut tally = BTreeMap::<String, usize>::new();
        for v in &violations {
            *tally.entry(v.rule.as_str().to_owned()).or_default() += 1;
        }
        Self { violations, tally }
    }

    pub fn outcome(&self) -> Outcome {
        if self.violations.is_empty() {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn is_pass(&self) -> bool {
        self.outcome() == Outcome::Pass
    }

    /// Violations in the order they were found: structural first, then semantic.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Occurrence count keyed by rule-kind identifier.
    pub fn tally(&self) -> &BTreeMap<String, usize> {
        &self.tally
    }

    /// Occurrences of one rule kind; zero when it never fired.
    pub fn count(&self, rule: &str) -> usize {
        self.tally.get(rule).copied().unwrap_or(0)
    }

    /// `kind1: count1, kind2: count2, ...` in ascending kind order. Empty for a clean pass.
    pub fn summary(&self) -> String {
        self.tally
            .iter()
            .map(|(k, n)| format!("{k}: {n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
