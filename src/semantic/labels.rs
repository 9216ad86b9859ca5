use crate::document::model::LabelDef;
use crate::report::path::JsonPath;
use crate::report::violation::{SemanticRule, Violation};
use crate::semantic::ledger::ResidueLedger;

pub(crate) fn check_labels<'a>(
    labels: &'a [Option<LabelDef>],
    ledger: &'a ResidueLedger,
    molecule: &'a JsonPath,
) -> impl Iterator<Item = Violation> + 'a {
    labels.iter().enumerate().filter_map(move |(pos, label)| {
        let index = label.as_ref()?.residue_index?;
        if ledger.contains(index) {
            return None;
        }
        Some(Violation::semantic(
            SemanticRule::UnresolvedLabelIndex,
            &molecule.item("labels", pos).field("residueIndex"),
            format!("label residueIndex {index} does not name a residue of this molecule"),
        ))
    })
}
