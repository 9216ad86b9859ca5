use crate::report::path::JsonPath;
use crate::report::violation::{SemanticRule, Violation};
use crate::semantic::ledger::ResidueLedger;

/// Gap check for one molecule.
///
/// Compares the declared span against the raw sequence length, not the number of distinct
/// indices, so a sequence with repeats can also report a gap.
pub(crate) fn check_contiguity(
    ledger: &ResidueLedger,
    sequence_len: usize,
    molecule: &JsonPath,
) -> Option<Violation> {
    let (min, max) = ledger.span()?;
    let span = i128::from(max) - i128::from(min);
    let expected = sequence_len as i128 - 1;
    if span == expected {
        return None;
    }
    Some(Violation::semantic(
        SemanticRule::ResidueIndexGap,
        &molecule.field("sequence"),
        format!(
            "residue indices {min}..={max} do not form a contiguous range over {sequence_len} sequence entries"
        ),
    ))
}
