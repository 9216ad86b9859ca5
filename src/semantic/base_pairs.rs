use crate::document::model::BasePairDef;
use crate::report::path::JsonPath;
use crate::report::violation::{SemanticRule, Violation};
use crate::semantic::ledger::ResidueLedger;

/// Pairing-distance and reference checks for every base pair of one molecule.
///
/// Each rule is evaluated on its own, so one pair can break several at once. Pairs missing
/// either index are left to the structural check.
pub(crate) fn check_base_pairs<'a>(
    pairs: &'a [Option<BasePairDef>],
    ledger: &'a ResidueLedger,
    molecule: &'a JsonPath,
) -> impl Iterator<Item = Violation> + 'a {
    pairs.iter().enumerate().flat_map(move |(pos, pair)| {
        let mut out = Vec::new();
        let Some((i1, i2)) = pair
            .as_ref()
            .and_then(|p| Some((p.residue_index1?, p.residue_index2?)))
        else {
            return out;
        };
        let at = molecule.item("basePairs", pos);

        match i1.abs_diff(i2) {
            0 => out.push(Violation::semantic(
                SemanticRule::SelfPairing,
                &at,
                format!("residue {i1} cannot pair with itself"),
            )),
            1 => out.push(Violation::semantic(
                SemanticRule::AdjacentPairing,
                &at,
                format!("residues {i1} and {i2} are adjacent and cannot pair"),
            )),
            _ => {}
        }
        if !ledger.contains(i1) {
            out.push(Violation::semantic(
                SemanticRule::UnresolvedPairIndex1,
                &at.field("residueIndex1"),
                format!("residueIndex1 {i1} does not name a residue of this molecule"),
            ));
        }
        if !ledger.contains(i2) {
            out.push(Violation::semantic(
                SemanticRule::UnresolvedPairIndex2,
                &at.field("residueIndex2"),
                format!("residueIndex2 {i2} does not name a residue of this molecule"),
            ));
        }
        out
    })
}
