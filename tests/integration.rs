use proptest::prelude::*;
use seqdiff::*;

proptest! {
    #[test]
    fn test_round_trip(
        old in prop::collection::vec(any::<i32>(), 0..40),
        new in prop::collection::vec(any::<i32>(), 0..40),
    ) {
        let p = diff(&old, &new).unwrap();
        prop_assert_eq!(patch(&old, &p).unwrap(), new.clone());
        prop_assert_eq!(unpatch(&new, &p).unwrap(), old);
    }

    // small alphabet so the inputs share plenty of runs
    #[test]
    fn test_round_trip_dense(
        old in prop::collection::vec(0u8..3, 0..60),
        new in prop::collection::vec(0u8..3, 0..60),
    ) {
        let p = diff(&old, &new).unwrap();
        prop_assert_eq!(patch(&old, &p).unwrap(), new.clone());
        prop_assert_eq!(unpatch(&new, &p).unwrap(), old);
    }

    #[test]
    fn test_identity_has_no_deltas(els in prop::collection::vec(any::<u16>(), 0..50)) {
        prop_assert!(diff(&els, &els).unwrap().is_empty());
    }

    #[test]
    fn test_deltas_ordered_and_disjoint(
        old in prop::collection::vec(0u8..4, 0..40),
        new in prop::collection::vec(0u8..4, 0..40),
    ) {
        let p = diff(&old, &new).unwrap();
        for pair in p.deltas().windows(2) {
            prop_assert!(pair[0].original().range().end < pair[1].original().position());
            prop_assert!(pair[0].revised().range().end < pair[1].revised().position());
        }
    }

    #[test]
    fn test_delta_shapes(
        old in prop::collection::vec(0u8..4, 0..30),
        new in prop::collection::vec(0u8..4, 0..30),
    ) {
        for delta in diff(&old, &new).unwrap().deltas() {
            match delta.delta_type() {
                DeltaType::Insert => prop_assert!(delta.original().is_empty()),
                DeltaType::Delete => prop_assert!(delta.revised().is_empty()),
                DeltaType::Change => {
                    prop_assert!(!delta.original().is_empty());
                    prop_assert!(!delta.revised().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_search_terminates_within_bound(
        old in prop::collection::vec(0u8..4, 0..30),
        new in prop::collection::vec(0u8..4, 0..30),
    ) {
        let mut steps = Steps::default();
        diff_with_listener(&old, &new, &mut steps).unwrap();
        prop_assert!(steps.count <= old.len() + new.len() + 1);
        prop_assert_eq!(steps.max, Some(old.len() + new.len() + 1));
    }
}

#[derive(Default)]
struct Steps {
    count: usize,
    max: Option<usize>,
}

impl DiffListener for Steps {
    fn on_step(&mut self, _current: usize, max: usize) {
        self.count += 1;
        self.max = Some(max);
    }
}

#[test]
fn test_textbook_example() {
    let old = vec!["A", "B", "C", "A", "B", "B", "A"];
    let new = vec!["C", "B", "A", "B", "A", "C"];
    let p = diff(&old, &new).unwrap();
    assert!(!p.is_empty());
    assert_eq!(patch(&old, &p).unwrap(), new);
    assert_eq!(unpatch(&new, &p).unwrap(), old);
}

#[test]
fn test_insert_into_empty() {
    let old: Vec<&str> = vec![];
    let new = vec!["x", "y"];
    let p = diff(&old, &new).unwrap();
    assert_eq!(
        p.deltas(),
        &[Delta::Insert {
            original: Chunk::new(0, vec![]),
            revised: Chunk::new(0, vec!["x", "y"]),
        }]
    );
    assert_eq!(patch(&old, &p).unwrap(), new);
}

#[test]
fn test_delete_everything() {
    let old = vec!["x", "y"];
    let new: Vec<&str> = vec![];
    let p = diff(&old, &new).unwrap();
    assert_eq!(p.len(), 1);
    let delta = &p.deltas()[0];
    assert_eq!(delta.delta_type(), DeltaType::Delete);
    assert_eq!(delta.revised(), &Chunk::new(0, vec![]));
    assert_eq!(delta.original().elements(), &["x", "y"]);
    assert_eq!(unpatch(&new, &p).unwrap(), old);
}

#[test]
fn test_single_substitution() {
    let p = diff(&["a", "b", "c"], &["a", "z", "c"]).unwrap();
    assert_eq!(p.len(), 1);
    let delta = &p.deltas()[0];
    assert_eq!(delta.delta_type(), DeltaType::Change);
    assert_eq!(delta.original(), &Chunk::new(1, vec!["b"]));
    assert_eq!(delta.revised(), &Chunk::new(1, vec!["z"]));
}

#[test]
fn test_conflict_on_stale_target() {
    let old = vec!["a", "b", "c", "d"];
    let new = vec!["a", "c", "d", "e"];
    let p = diff(&old, &new).unwrap();

    let stale = vec!["a", "B", "c", "d"];
    match patch(&stale, &p) {
        Err(PatchError::Conflict { expected, actual, .. }) => {
            assert_eq!(expected, r#"["b"]"#);
            assert_eq!(actual, r#"["B"]"#);
        }
        other => panic!("expected conflict, got {:?}", other),
    }
    assert_eq!(stale, vec!["a", "B", "c", "d"]);
}

#[test]
fn test_unpatch_verifies_revised() {
    let old = vec![1, 2, 3];
    let new = vec![1, 4, 3];
    let p = diff(&old, &new).unwrap();
    assert!(matches!(
        unpatch(&[1, 5, 3], &p),
        Err(PatchError::Conflict { .. })
    ));
}

#[test]
fn test_externally_built_patch() {
    let deltas = vec![
        Delta::new(DeltaType::Delete, Chunk::new(0, vec!['a']), Chunk::new(0, vec![])).unwrap(),
        Delta::new(DeltaType::Insert, Chunk::new(3, vec![]), Chunk::new(2, vec!['z'])).unwrap(),
    ];
    let p = Patch::from_deltas(deltas).unwrap();
    let old = vec!['a', 'b', 'c'];
    let new = patch(&old, &p).unwrap();
    assert_eq!(new, vec!['b', 'c', 'z']);
    assert_eq!(unpatch(&new, &p).unwrap(), old);
}

#[test]
fn test_case_insensitive_diff_keeps_real_elements() {
    let old = vec!["Foo".to_string(), "bar".to_string()];
    let new = vec!["foo".to_string(), "BAR".to_string(), "baz".to_string()];
    let p = diff_with(&old, &new, |a: &String, b: &String| a.eq_ignore_ascii_case(b)).unwrap();
    assert_eq!(p.len(), 1);
    // only the trailing insert is recorded, so applying the patch to the
    // original keeps its casing
    assert_eq!(
        patch(&old, &p).unwrap(),
        vec!["Foo".to_string(), "bar".to_string(), "baz".to_string()]
    );
}

#[test]
fn test_custom_algorithm_through_trait_object() {
    let algorithm: &dyn DiffAlgorithm<u8> = &MyersDiff::new();
    let p = diff_with_algorithm(&[1u8, 2, 3], &[1, 3], algorithm, None).unwrap();
    assert_eq!(p.deltas()[0].delta_type(), DeltaType::Delete);
}
