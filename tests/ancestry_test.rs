//! Most recent common ancestor queries against fixture families

use std::path::Path;

use famtree::domain::{DomainError, FamilyTree};
use famtree::infrastructure::load_from_path;
use famtree::util::testing;
use rstest::{fixture, rstest};

#[fixture]
fn royals() -> FamilyTree {
    testing::init_test_setup();
    load_from_path(Path::new("tests/resources/families/royals.txt")).expect("load royals")
}

#[fixture]
fn simple() -> FamilyTree {
    testing::init_test_setup();
    load_from_path(Path::new("tests/resources/families/simple.txt")).expect("load simple")
}

fn mrca<'a>(tree: &'a FamilyTree, a: &str, b: &str) -> Option<&'a str> {
    tree.most_recent_common_ancestor(a, b)
        .expect("both labels present")
        .and_then(|idx| tree.label(idx))
}

#[rstest]
#[case("Anne", "Tom", Some("Mary"))]
#[case("Anne", "Kate", Some("John"))]
#[case("Tom", "Paul", Some("John"))]
#[case("Kate", "Kate", Some("Paul"))]
#[case("John", "Kate", None)]
fn given_simple_family_when_querying_then_matches_examples(
    simple: FamilyTree,
    #[case] a: &str,
    #[case] b: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(mrca(&simple, a, b), expected);
}

#[rstest]
#[case("William", "Harry", Some("Charles"))]
#[case("George of Wales", "Zara", Some("Elizabeth"))]
#[case("Philip", "Elizabeth", Some("Victoria"))]
#[case("Wilhelm", "Olav", Some("Victoria"))]
#[case("Archie", "Lilibet", Some("Harry"))]
#[case("Charles", "Archie", Some("Elizabeth"))]
#[case("Margaret", "Margaret", Some("George VI"))]
fn given_royals_when_querying_then_finds_nearest_shared_ancestor(
    royals: FamilyTree,
    #[case] a: &str,
    #[case] b: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(mrca(&royals, a, b), expected);
}

#[rstest]
fn given_any_pair_when_querying_then_result_is_symmetric(royals: FamilyTree) {
    let labels: Vec<&str> = royals.iter().map(|(_, n)| n.label.as_str()).collect();
    for a in &labels {
        for b in &labels {
            assert_eq!(
                royals.most_recent_common_ancestor(a, b).unwrap(),
                royals.most_recent_common_ancestor(b, a).unwrap(),
                "asymmetric for {a} / {b}"
            );
        }
    }
}

#[rstest]
fn given_same_label_twice_when_querying_then_returns_parent(royals: FamilyTree) {
    for (idx, node) in royals.iter() {
        let result = royals
            .most_recent_common_ancestor(&node.label, &node.label)
            .unwrap();
        assert_eq!(result, node.parent, "self query for {}", node.label);
        if Some(idx) == royals.root() {
            assert!(result.is_none());
        }
    }
}

#[rstest]
fn given_result_when_checking_then_is_common_to_both_chains(royals: FamilyTree) {
    let a = royals.find_by_label("Philip").unwrap();
    let b = royals.find_by_label("Lilibet").unwrap();
    let found = royals
        .most_recent_common_ancestor("Philip", "Lilibet")
        .unwrap()
        .unwrap();

    assert!(royals.ancestor_chain(a).contains(&found));
    assert!(royals.ancestor_chain(b).contains(&found));
}

#[rstest]
fn given_unknown_label_when_querying_then_reference_error(simple: FamilyTree) {
    assert_eq!(simple.find_by_label("Zed"), None);
    assert_eq!(
        simple.most_recent_common_ancestor("Zed", "Anne"),
        Err(DomainError::NodeNotFound("Zed".into()))
    );
    assert_eq!(
        simple.most_recent_common_ancestor("Anne", "Zed"),
        Err(DomainError::NodeNotFound("Zed".into()))
    );
}
