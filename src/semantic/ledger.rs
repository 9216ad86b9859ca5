use crate::document::model::ResidueDef;
use crate::report::path::JsonPath;
use crate::report::violation::{SemanticRule, Violation};
use std::collections::BTreeSet;

/// Residue indices declared by one molecule's sequence.
///
/// Built once per molecule and dropped when that molecule's checks are done; nothing in it
/// is shared across molecules.
#[derive(Debug, Default)]
pub(crate) struct ResidueLedger {
    indices: BTreeSet<i64>,
    /// `(sequence position, index)` for every non-first occurrence of an index.
    repeats: Vec<(usize, i64)>,
}

impl ResidueLedger {
    pub(crate) fn scan(sequence: &[Option<ResidueDef>]) -> Self {
        let mut ledger = Self::default();
        for (pos, residue) in sequence.iter().enumerate() {
            let Some(index) = residue.as_ref().and_then(|r| r.residue_index) else {
                continue;
            };
            if !ledger.indices.insert(index) {
                ledger.repeats.push((pos, index));
            }
        }
        ledger
    }

    pub(crate) fn contains(&self, index: i64) -> bool {
        self.indices.contains(&index)
    }

    /// Smallest and largest declared index, numerically.
    pub(crate) fn span(&self) -> Option<(i64, i64)> {
        Some((*self.indices.first()?, *self.indices.last()?))
    }

    /// One violation per repeated occurrence, located at the repeating residue.
    pub(crate) fn duplicate_violations<'a>(
        &'a self,
        molecule: &'a JsonPath,
    ) -> impl Iterator<Item = Violation> + 'a {
        self.repeats.iter().map(move |&(pos, index)| {
            Violation::semantic(
                SemanticRule::DuplicateResidueIndex,
                &molecule.item("sequence", pos).field("residueIndex"),
                format!("residueIndex {index} is repeated within the molecule"),
            )
        })
    }
}

#[cfg(test)]
pub(crate) fn residues(indices: &[Option<i64>]) -> Vec<Option<ResidueDef>> {
    indices
        .iter()
        .map(|&residue_index| {
            Some(ResidueDef {
                residue_index,
                classes: Vec::new(),
            })
        })
        .collect()
}
