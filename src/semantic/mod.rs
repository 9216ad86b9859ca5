//! Domain invariants checked on top of schema conformance.
//!
//! Residue-index rules are scoped to one molecule: each molecule gets its own
//! [`ledger::ResidueLedger`], and indices are never compared across molecules. Class closure
//! is checked once over the whole document. No check stops another from running.

pub(crate) mod base_pairs;
pub(crate) mod classes;
pub(crate) mod labels;
pub(crate) mod ledger;
pub(crate) mod sequence;

use crate::document::model::{DocumentDef, RnaMoleculeDef};
use crate::report::path::JsonPath;
use crate::report::violation::Violation;
use crate::semantic::classes::{ClassReporting, check_class_closure};
use crate::semantic::ledger::ResidueLedger;

pub(crate) fn semantic_violations(doc: &DocumentDef, reporting: ClassReporting) -> Vec<Violation> {
    let mut out = Vec::new();
    let root = JsonPath::root();

    for (ci, complex) in doc.rna_complexes.iter().enumerate() {
        let Some(complex) = complex else { continue };
        let complex_at = root.item("rnaComplexes", ci);
        for (mi, molecule) in complex.rna_molecules.iter().enumerate() {
            let Some(molecule) = molecule else { continue };
            let at = complex_at.item("rnaMolecules", mi);
            let before = out.len();
            out.extend(molecule_violations(molecule, &at));
            tracing::debug!(
                molecule = %at,
                residues = molecule.sequence.len(),
                violations = out.len() - before,
                "checked molecule"
            );
        }
    }

    out.extend(check_class_closure(doc, reporting));
    out
}

fn molecule_violations(molecule: &RnaMoleculeDef, at: &JsonPath) -> Vec<Violation> {
    let ledger = ResidueLedger::scan(&molecule.sequence);

    let mut out: Vec<Violation> = ledger.duplicate_violations(at).collect();
    out.extend(sequence::check_contiguity(&ledger, molecule.sequence.len(), at));
    out.extend(base_pairs::check_base_pairs(&molecule.base_pairs, &ledger, at));
    out.extend(labels::check_labels(&molecule.labels, &ledger, at));
    out
}
