use serde_json::{Value, json};
use xrna_validate::{NoStructuralCheck, ValidationReport, ValidatorOpts, XrnaValidator};

fn semantic_only(doc: &Value) -> ValidationReport {
    XrnaValidator::with_structural(NoStructuralCheck, &ValidatorOpts::default())
        .validate(doc)
        .unwrap()
}

fn residues(indices: &[i64]) -> Value {
    Value::Array(
        indices
            .iter()
            .map(|i| json!({ "residueIndex": i, "residueName": "A" }))
            .collect(),
    )
}

fn single_molecule(molecule: Value) -> Value {
    json!({
        "classes": [],
        "rnaComplexes": [{ "name": "c", "rnaMolecules": [molecule] }]
    })
}

#[test]
fn contiguous_sequence_is_clean() {
    let report = semantic_only(&single_molecule(json!({ "sequence": residues(&[1, 2, 3]) })));
    assert!(report.is_pass(), "{}", report.summary());
    assert!(report.violations().is_empty());
}

#[test]
fn gap_in_sequence() {
    let report = semantic_only(&single_molecule(json!({ "sequence": residues(&[1, 2, 4]) })));
    assert_eq!(report.count("residueIndexGap"), 1);
    assert_eq!(report.count("duplicateResidueIndex"), 0);
    assert_eq!(report.summary(), "residueIndexGap: 1");
}

#[test]
fn duplicate_index_also_reports_gap() {
    let report = semantic_only(&single_molecule(json!({ "sequence": residues(&[1, 1, 2]) })));
    assert_eq!(report.count("duplicateResidueIndex"), 1);
    assert_eq!(report.count("residueIndexGap"), 1);
    assert_eq!(
        report.violations()[0].location,
        "$.rnaComplexes[0].rnaMolecules[0].sequence[1].residueIndex"
    );
}

#[test]
fn every_repeat_is_counted() {
    let report = semantic_only(&single_molecule(
        json!({ "sequence": residues(&[3, 3, 3, 4, 4]) }),
    ));
    assert_eq!(report.count("duplicateResidueIndex"), 3);
}

#[test]
fn self_pairing_with_resolved_indices() {
    let report = semantic_only(&single_molecule(json!({
        "sequence": residues(&[1, 2, 3]),
        "basePairs": [{ "residueIndex1": 2, "residueIndex2": 2 }]
    })));
    assert_eq!(report.summary(), "selfPairing: 1");
}

#[test]
fn adjacent_pairing() {
    let report = semantic_only(&single_molecule(json!({
        "sequence": residues(&[1, 2, 3, 4, 5]),
        "basePairs": [
            { "residueIndex1": 2, "residueIndex2": 3 },
            { "residueIndex1": 5, "residueIndex2": 4 },
            { "residueIndex1": 1, "residueIndex2": 5 }
        ]
    })));
    assert_eq!(report.summary(), "adjacentPairing: 2");
}

#[test]
fn unresolved_pair_reports_only_the_bad_side() {
    let report = semantic_only(&single_molecule(json!({
        "sequence": residues(&[1, 2, 3, 4, 5]),
        "basePairs": [{ "residueIndex1": 1, "residueIndex2": 50 }]
    })));
    assert_eq!(report.summary(), "unresolvedResidueIndex2: 1");
}

#[test]
fn unresolved_label_reference() {
    let report = semantic_only(&single_molecule(json!({
        "sequence": residues(&[1, 2, 3]),
        "labels": [{ "residueIndex": 9 }, { "residueIndex": 3 }, { "labelContent": { "label": "x" } }]
    })));
    assert_eq!(report.summary(), "unresolvedLabelResidueIndex: 1");
    assert_eq!(
        report.violations()[0].location,
        "$.rnaComplexes[0].rnaMolecules[0].labels[0].residueIndex"
    );
}

#[test]
fn undeclared_residue_class() {
    let report = semantic_only(&json!({
        "classes": [{ "name": "loop" }],
        "rnaComplexes": [{ "name": "c", "rnaMolecules": [{
            "sequence": [
                { "residueIndex": 1, "classes": ["helix", "loop"] },
                { "residueIndex": 2, "classes": ["loop"] }
            ]
        }]}]
    }));
    assert_eq!(report.summary(), "undeclaredClass: 1");
    assert!(report.violations()[0].message.contains("\"helix\""));
}

#[test]
fn declared_classes_pass_wherever_referenced() {
    let report = semantic_only(&json!({
        "classes": [{ "name": "a" }, { "name": "b" }, { "name": "c" }],
        "rnaComplexes": [{ "name": "c", "rnaMolecules": [{
            "classesForSequence": ["a"],
            "classesForLabels": ["b"],
            "classesForBasePairs": ["c"],
            "sequence": [
                { "residueIndex": 1, "classes": ["a"] },
                { "residueIndex": 2 },
                { "residueIndex": 3 },
                { "residueIndex": 4 }
            ],
            "basePairs": [{ "residueIndex1": 1, "residueIndex2": 4, "classes": ["c"] }],
            "labels": [{
                "residueIndex": 2,
                "labelLine": { "classes": ["b"] },
                "labelContent": { "classes": ["a", "c"] }
            }]
        }]}]
    }));
    assert!(report.is_pass(), "{}", report.summary());
}

#[test]
fn validating_twice_gives_the_same_report() {
    let doc = json!({
        "classes": [{ "name": "stem" }],
        "rnaComplexes": [
            { "name": "a", "rnaMolecules": [{
                "sequence": residues(&[1, 1, 5]),
                "basePairs": [{ "residueIndex1": 5, "residueIndex2": 5, "classes": ["x", "y"] }],
                "labels": [{ "residueIndex": 8 }]
            }]},
            { "name": "b", "rnaMolecules": [{
                "sequence": residues(&[2, 3]),
                "classesForSequence": ["y", "z"]
            }]}
        ]
    });
    let validator = XrnaValidator::with_structural(NoStructuralCheck, &ValidatorOpts::default());
    let first = validator.validate(&doc).unwrap();
    let second = validator.validate(&doc).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.summary(), second.summary());
    assert!(!first.is_pass());
}

#[test]
fn molecules_without_indices_are_ignored_by_index_rules() {
    let report = semantic_only(&single_molecule(json!({
        "sequence": [{ "residueName": "A" }, { "residueName": "C" }],
        "basePairs": [{ "residueIndex1": 1 }],
        "labels": [{ "labelLine": {} }]
    })));
    assert!(report.is_pass(), "{}", report.summary());
}

#[test]
fn array_shaped_residues_carry_no_index() {
    let report = semantic_only(&single_molecule(json!({ "sequence": [[1], [1]] })));
    assert!(report.is_pass(), "{}", report.summary());
}

#[test]
fn array_shaped_pairs_and_labels_are_skipped() {
    let report = semantic_only(&single_molecule(json!({
        "sequence": residues(&[1, 2, 3]),
        "basePairs": [[1, 1], [2, 40]],
        "labels": [[99]]
    })));
    assert!(report.is_pass(), "{}", report.summary());
}

#[test]
fn array_shaped_complexes_and_molecules_are_skipped() {
    let report = semantic_only(&json!({
        "classes": [],
        "rnaComplexes": [
            [[{ "sequence": residues(&[1, 1]) }]],
            { "name": "c", "rnaMolecules": [[{ "sequence": residues(&[5, 5]) }]] }
        ]
    }));
    assert!(report.is_pass(), "{}", report.summary());
}

#[test]
fn array_shaped_class_declaration_does_not_hide_a_reference() {
    let report = semantic_only(&json!({
        "classes": [["helix"]],
        "rnaComplexes": [{ "name": "c", "rnaMolecules": [{
            "sequence": [{ "residueIndex": 1, "classes": ["helix"] }]
        }]}]
    }));
    assert_eq!(report.summary(), "undeclaredClass: 1");
}
