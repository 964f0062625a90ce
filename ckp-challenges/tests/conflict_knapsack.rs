use ckp_challenges::conflict_knapsack::*;
use ckp_challenges::ChallengeError;
use ckp_utils::u8s_from_str;

fn record(weights: Vec<i64>, values: Vec<i64>, conflicts: Vec<Vec<i64>>) -> InstanceRecord {
    InstanceRecord {
        weights,
        values,
        conflicts: Some(conflicts),
        capacity: None,
    }
}

#[test]
fn test_conflicts_are_mirrored() {
    let graph = ConflictGraph::from_lists(&[vec![1, 2], vec![], vec![0, 0]]).unwrap();
    assert_eq!(graph.to_lists(), vec![vec![1, 2], vec![0], vec![0]]);
    assert!(graph.are_conflicting(1, 0));
    assert!(!graph.are_conflicting(1, 2));
    assert_eq!(graph.num_edges(), 2);
    assert_eq!(
        serde_json::to_string(&graph).unwrap(),
        "[[1,2],[0],[0]]"
    );
}

#[test]
fn test_self_conflict_rejected() {
    let err = ConflictGraph::from_lists(&[vec![0]]).unwrap_err();
    assert!(matches!(err, ChallengeError::InvalidInstance(_)));
}

#[test]
fn test_out_of_range_conflict_rejected() {
    for bad in [-1, 2] {
        let err = Challenge::from_record(&record(vec![1, 1], vec![1, 1], vec![vec![bad], vec![]]), 10)
            .unwrap_err();
        assert!(matches!(err, ChallengeError::InvalidInstance(_)));
    }
}

#[test]
fn test_mismatched_lengths_rejected() {
    let err = Challenge::from_record(&record(vec![1, 2, 3], vec![1, 2], vec![]), 10).unwrap_err();
    assert_eq!(
        err,
        ChallengeError::InvalidInstance("3 weights but 2 values".to_string())
    );
}

#[test]
fn test_conflict_list_count_must_match() {
    let err = Challenge::from_record(&record(vec![1, 2], vec![1, 2], vec![vec![]]), 10).unwrap_err();
    assert!(matches!(err, ChallengeError::InvalidInstance(_)));
}

#[test]
fn test_non_positive_numbers_rejected() {
    let err = Challenge::from_record(&record(vec![1, -4], vec![1, 2], vec![vec![], vec![]]), 10)
        .unwrap_err();
    assert!(matches!(err, ChallengeError::InvalidInstance(_)));
    let err = Challenge::from_record(&record(vec![1, 4], vec![0, 2], vec![vec![], vec![]]), 10)
        .unwrap_err();
    assert!(matches!(err, ChallengeError::InvalidInstance(_)));
}

#[test]
fn test_negative_capacity_rejected() {
    let err = Challenge::from_record(&record(vec![1], vec![1], vec![vec![]]), -1).unwrap_err();
    assert_eq!(err, ChallengeError::InvalidCapacity(-1));
}

#[test]
fn test_empty_instance_is_valid() {
    let challenge = Challenge::new(vec![], vec![], &[], 10).unwrap();
    assert_eq!(challenge.num_items, 0);
    assert_eq!(challenge.verify_solution(&Solution::new()).unwrap(), 0);
}

#[test]
fn test_load_records() {
    let records = load_records(
        r#"[
            {"weights": [1, 2], "values": [5, 6], "conflicts": [[1], [0]]},
            {"weights": [3], "values": [7], "capacity": 2}
        ]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 2);

    let first = Challenge::from_record(&records[0], 50).unwrap();
    assert_eq!(first.max_weight, 50);
    assert!(first.conflicts.are_conflicting(0, 1));

    let second = Challenge::from_record(&records[1], 50).unwrap();
    assert_eq!(second.max_weight, 2);
    assert_eq!(second.conflicts.num_edges(), 0);
    assert_eq!(second.conflicts.num_items(), 1);
}

#[test]
fn test_load_records_rejects_malformed_json() {
    assert!(load_records(r#"[{"weights": [1], "values": "x"}]"#).is_err());
}

#[test]
fn test_record_conversion_preserves_instance() {
    let challenge = Challenge::generate_instance(
        &u8s_from_str("record"),
        &Difficulty {
            num_items: 30,
            max_weight: 300,
        },
    )
    .unwrap();
    let record = InstanceRecord::from(&challenge);
    assert_eq!(Challenge::from_record(&record, 0).unwrap(), challenge);
}

#[test]
fn test_generate_instance_invariants() {
    let difficulty = Difficulty {
        num_items: 200,
        max_weight: 2000,
    };
    let challenge = Challenge::generate_instance(&u8s_from_str("gen"), &difficulty).unwrap();
    assert_eq!(challenge.num_items, 200);
    assert_eq!(challenge.max_weight, 2000);
    assert!(challenge
        .weights
        .iter()
        .all(|w| (MIN_WEIGHT..=MAX_WEIGHT).contains(w)));
    assert!(challenge
        .values
        .iter()
        .all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
    assert!(challenge.conflicts.num_edges() > 0);
    for i in 0..challenge.num_items {
        for &j in challenge.conflicts.neighbours(i) {
            assert_ne!(i, j);
            assert!(challenge.conflicts.are_conflicting(j, i));
        }
    }
}

#[test]
fn test_generate_instance_is_seeded() {
    let difficulty = Difficulty {
        num_items: 50,
        max_weight: 500,
    };
    let a = Challenge::generate_instance(&u8s_from_str("a"), &difficulty).unwrap();
    let b = Challenge::generate_instance(&u8s_from_str("a"), &difficulty).unwrap();
    let c = Challenge::generate_instance(&u8s_from_str("c"), &difficulty).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_tiny_instances_have_no_conflicts() {
    let challenge = Challenge::generate_instance(
        &u8s_from_str("tiny"),
        &Difficulty {
            num_items: 3,
            max_weight: 30,
        },
    )
    .unwrap();
    assert_eq!(challenge.conflicts.num_edges(), 0);
}

#[test]
fn test_verify_solution() {
    let challenge = Challenge::new(
        vec![2, 3, 4],
        vec![10, 20, 30],
        &[vec![1], vec![0], vec![]],
        6,
    )
    .unwrap();

    assert_eq!(
        challenge
            .verify_solution(&Solution { items: vec![0, 2] })
            .unwrap(),
        40
    );
    assert!(challenge
        .verify_solution(&Solution { items: vec![0, 1] })
        .is_err());
    assert!(challenge
        .verify_solution(&Solution { items: vec![1, 2] })
        .is_err());
    assert!(challenge
        .verify_solution(&Solution { items: vec![2, 2] })
        .is_err());
    assert!(challenge
        .verify_solution(&Solution { items: vec![3] })
        .is_err());
}
