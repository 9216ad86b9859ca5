use crate::document::model::{DocumentDef, RnaMoleculeDef};
use crate::report::path::JsonPath;
use crate::report::violation::{SemanticRule, Violation};
use std::collections::HashSet;

/// How undeclared class references are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassReporting {
    /// Once per distinct undeclared name, at its first reference in traversal order: molecule
    /// defaults, then residues, base pairs and labels.
    #[default]
    Distinct,
    /// Once for every reference.
    PerOccurrence,
}

/// Every class reference in the document must name an entry of the top-level registry.
pub(crate) fn check_class_closure<'a>(
    doc: &'a DocumentDef,
    reporting: ClassReporting,
) -> impl Iterator<Item = Violation> + 'a {
    let declared: HashSet<&str> = doc
        .classes
        .iter()
        .flatten()
        .filter_map(|decl| decl.name.as_deref())
        .collect();

    let mut refs = Vec::new();
    let root = JsonPath::root();
    for (ci, complex) in doc.rna_complexes.iter().enumerate() {
        let Some(complex) = complex else { continue };
        let complex_at = root.item("rnaComplexes", ci);
        for (mi, molecule) in complex.rna_molecules.iter().enumerate() {
            let Some(molecule) = molecule else { continue };
            collect_molecule_refs(molecule, &complex_at.item("rnaMolecules", mi), &mut refs);
        }
    }

    let mut reported = HashSet::<&str>::new();
    refs.into_iter().filter_map(move |(at, name)| {
        if declared.contains(name) {
            return None;
        }
        if reporting == ClassReporting::Distinct && !reported.insert(name) {
            return None;
        }
        Some(Violation::semantic(
            SemanticRule::UndeclaredClass,
            &at,
            format!("class \"{name}\" is not declared in the top-level classes"),
        ))
    })
}

fn collect_molecule_refs<'a>(
    molecule: &'a RnaMoleculeDef,
    at: &JsonPath,
    refs: &mut Vec<(JsonPath, &'a str)>,
) {
    push_list(&molecule.classes_for_sequence, at, "classesForSequence", refs);
    push_list(&molecule.classes_for_labels, at, "classesForLabels", refs);
    push_list(&molecule.classes_for_base_pairs, at, "classesForBasePairs", refs);

    for (i, residue) in molecule.sequence.iter().enumerate() {
        if let Some(residue) = residue {
            push_list(&residue.classes, &at.item("sequence", i), "classes", refs);
        }
    }
    for (i, pair) in molecule.base_pairs.iter().enumerate() {
        if let Some(pair) = pair {
            push_list(&pair.classes, &at.item("basePairs", i), "classes", refs);
        }
    }
    for (i, label) in molecule.labels.iter().enumerate() {
        let Some(label) = label else { continue };
        let label_at = at.item("labels", i);
        if let Some(line) = &label.label_line {
            push_list(&line.classes, &label_at.field("labelLine"), "classes", refs);
        }
        if let Some(content) = &label.label_content {
            push_list(&content.classes, &label_at.field("labelContent"), "classes", refs);
        }
    }
}

fn push_list<'a>(
    names: &'a [Option<String>],
    owner: &JsonPath,
    field: &'static str,
    refs: &mut Vec<(JsonPath, &'a str)>,
) {
    for (i, name) in names.iter().enumerate() {
        if let Some(name) = name {
            refs.push((owner.item(field, i), name.as_str()));
        }
    }
}
