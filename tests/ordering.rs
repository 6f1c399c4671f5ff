//! Ordering contract between the generated table and the greedy scanner.

use lextab::tables::{
    RawDefinition, Registry, RegistrySpec, TokenDescriptor, assign_ids, builtin, first_match,
    shadowed_literals,
};
use proptest::prelude::*;

fn punctuators(literals: &[String]) -> RegistrySpec {
    RegistrySpec {
        definitions: literals
            .iter()
            .enumerate()
            .map(|(i, l)| RawDefinition::new(l, "PUNCTUATOR", &format!("T{i}")))
            .collect(),
        extra_names: vec!["VARIABLE".into()],
    }
}

fn position(descriptors: &[TokenDescriptor], literal: &str) -> usize {
    descriptors
        .iter()
        .position(|d| d.literal == literal)
        .unwrap_or_else(|| panic!("{literal:?} not emitted"))
}

#[test]
fn equals_family_longest_first() {
    let spec = punctuators(&["=".into(), "==".into(), "===".into()]);
    let ordered = assign_ids(&Registry::validate(&spec).unwrap());
    let got: Vec<_> = ordered
        .descriptors()
        .iter()
        .map(|d| (d.literal.as_str(), d.id))
        .collect();
    assert_eq!(got, vec![("===", 0), ("==", 1), ("=", 2)]);
    assert_eq!(ordered.extra_names(), &[("VARIABLE".to_string(), 3)]);
}

#[test]
fn builtin_scans_every_literal_as_itself() {
    let ordered = assign_ids(&Registry::validate(&builtin::registry()).unwrap());
    let d = ordered.descriptors();
    assert!(shadowed_literals(d).is_empty());
    for desc in d {
        let hit = first_match(d, desc.literal.as_bytes()).unwrap();
        assert_eq!(hit.name, desc.name);
    }
    assert!(position(d, "===") < position(d, "=="));
    assert!(position(d, "==") < position(d, "="));
    assert!(position(d, "!=") < position(d, "!"));
    assert_eq!(first_match(d, b"=== x").map(|t| t.name.as_str()), Some("EXACTLYEQUAL"));
    assert_eq!(first_match(d, b"=x").map(|t| t.name.as_str()), Some("ASSIGNMENT"));
}

#[test]
fn adding_a_token_keeps_relative_order() {
    let before = assign_ids(&Registry::validate(&punctuators(&["<".into(), ">".into()])).unwrap());
    let after = assign_ids(
        &Registry::validate(&punctuators(&["<".into(), ">".into(), "<<".into()])).unwrap(),
    );
    let lits = |o: &lextab::tables::OrderedTokens| -> Vec<String> {
        o.descriptors()
            .iter()
            .map(|d| d.literal.clone())
            .filter(|l| l.len() == 1)
            .collect()
    };
    assert_eq!(lits(&before), lits(&after));
}

fn literal_set() -> impl Strategy<Value = Vec<String>> {
    // small alphabet so prefixes are common
    proptest::collection::hash_set("[=<>!a]{1,4}", 1..24)
        .prop_map(|s| s.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn prefixes_never_precede_their_extensions(literals in literal_set()) {
        let ordered = assign_ids(&Registry::validate(&punctuators(&literals)).unwrap());
        let d = ordered.descriptors();
        for a in &literals {
            for b in &literals {
                if a.len() < b.len() && b.starts_with(a.as_str()) {
                    prop_assert!(position(d, b) < position(d, a), "{a:?} before {b:?}");
                }
            }
        }
        prop_assert!(shadowed_literals(d).is_empty());
    }

    #[test]
    fn ids_are_contiguous(literals in literal_set(), extras in 0usize..4) {
        let mut spec = punctuators(&literals);
        spec.extra_names = (0..extras).map(|i| format!("EXTRA{i}")).collect();
        let ordered = assign_ids(&Registry::validate(&spec).unwrap());
        let mut ids: Vec<u32> = ordered.names().map(|(_, id)| id).collect();
        ids.sort_unstable();
        let expected: Vec<u32> = (0..(literals.len() + extras) as u32).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn order_ignores_declaration_order(mut literals in literal_set()) {
        let a = assign_ids(&Registry::validate(&punctuators(&literals)).unwrap());
        literals.reverse();
        let b = assign_ids(&Registry::validate(&punctuators(&literals)).unwrap());
        let la: Vec<_> = a.descriptors().iter().map(|d| (&d.literal, d.id)).collect();
        let lb: Vec<_> = b.descriptors().iter().map(|d| (&d.literal, d.id)).collect();
        prop_assert_eq!(la, lb);
    }
}
