use boruvka_core::{BoruvkaError, BoruvkaErrorCode};
use rstest::rstest;

#[rstest]
#[case(BoruvkaError::EmptyGraph, BoruvkaErrorCode::EmptyGraph, false)]
#[case(
    BoruvkaError::InvalidNodeId { node: 4, node_count: 4 },
    BoruvkaErrorCode::InvalidNodeId,
    false,
)]
#[case(
    BoruvkaError::NonFiniteWeight { source_node: 0, target_node: 1 },
    BoruvkaErrorCode::NonFiniteWeight,
    false,
)]
#[case(
    BoruvkaError::NegativeWeight { source_node: 0, target_node: 1, weight: -1.0 },
    BoruvkaErrorCode::NegativeWeight,
    false,
)]
#[case(
    BoruvkaError::Disconnected { components: 2 },
    BoruvkaErrorCode::Disconnected,
    false,
)]
#[case(
    BoruvkaError::InvalidWorkerCount { got: 0 },
    BoruvkaErrorCode::InvalidWorkerCount,
    false,
)]
#[case(
    BoruvkaError::ThreadPool { reason: "no threads".to_owned() },
    BoruvkaErrorCode::ThreadPool,
    false,
)]
#[case(
    BoruvkaError::LockPoisoned { resource: "component slot" },
    BoruvkaErrorCode::LockPoisoned,
    true,
)]
#[case(
    BoruvkaError::InvariantViolation { invariant: "test", component: 3 },
    BoruvkaErrorCode::InvariantViolation,
    true,
)]
#[case(BoruvkaError::NoSolution, BoruvkaErrorCode::NoSolution, true)]
fn returns_expected_boruvka_code(
    #[case] error: BoruvkaError,
    #[case] expected: BoruvkaErrorCode,
    #[case] logic_error: bool,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.code().to_string(), expected.as_str());
    assert_eq!(error.is_logic_error(), logic_error);
    assert!(expected.as_str().starts_with("BORUVKA_"));
}

#[test]
fn messages_name_the_offending_values() {
    let err = BoruvkaError::InvalidNodeId {
        node: 7,
        node_count: 3,
    };
    assert_eq!(err.to_string(), "edge references node 7, but node_count is 3");

    let err = BoruvkaError::Disconnected { components: 4 };
    assert_eq!(
        err.to_string(),
        "graph is disconnected: found 4 connected components"
    );
}
