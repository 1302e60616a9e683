// Integration tests for compiling and replaying moves

use sortty::compiler::{Algorithm, SortCompiler};
use sortty::model::{ClassType, Key};
use sortty::moves::{MoveRecord, MoveSequence, SwapOp};
use sortty::playback::Player;
use sortty::store::VisualStore;

/// Compile `keys` with `algorithm` and replay onto a fresh store
fn replay(algorithm: Algorithm, keys: &[Key]) -> (MoveSequence, VisualStore) {
    let moves = algorithm.compiler().compile(keys);
    let mut store = VisualStore::from_keys(keys);
    let mut player = Player::new(moves.clone());
    player.run_to_end(&mut store).expect("Replay failed");
    (moves, store)
}

#[test]
fn test_bubble_scenario() {
    let (moves, store) = replay(Algorithm::Bubble, &[5, 3, 4, 1, 2]);

    assert_eq!(store.keys(), vec![1, 2, 3, 4, 5]);
    // 5 and 3 start at positions 0 and 1
    assert!(moves.records().contains(&MoveRecord::swap(0, 1)));
}

#[test]
fn test_merge_scenario() {
    let (moves, store) = replay(Algorithm::Merge, &[2, 1]);

    assert_eq!(store.keys(), vec![1, 2]);
    assert_eq!(moves.range_count(), 1);
    assert_eq!(moves.len(), 2);
    for record in moves.records() {
        match record {
            MoveRecord::Range { range, .. } => assert_eq!(range.indices(), &[0, 1]),
            other => panic!("Expected range move, got {:?}", other),
        }
    }
}

#[test]
fn test_swap_family_ends_with_everything_normal() {
    for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        let (_, store) = replay(algorithm, &[9, 4, 7, 1, 8, 2]);
        assert!(store.is_sorted(), "{:?} left {:?}", algorithm, store.keys());
        assert!(store
            .elements()
            .iter()
            .all(|e| e.class == ClassType::Normal));
    }
}

#[test]
fn test_swap_family_compares_before_every_swap() {
    for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        let moves = algorithm.compiler().compile(&[6, 2, 9, 2, 5, 1]);
        let records = moves.records();
        for (i, record) in records.iter().enumerate() {
            if let MoveRecord::Swap {
                op: SwapOp::Swap, ..
            } = record
            {
                assert!(i > 0, "{:?} swapped before comparing", algorithm);
                assert!(matches!(
                    records[i - 1],
                    MoveRecord::Swap {
                        op: SwapOp::Compare,
                        ..
                    }
                ));
            }
        }
    }
}

#[test]
fn test_duplicates_sort() {
    let keys = [3, 1, 3, 2, 1, 3];
    for algorithm in Algorithm::ALL {
        let (_, store) = replay(algorithm, &keys);
        assert_eq!(store.keys(), vec![1, 1, 2, 3, 3, 3], "{:?}", algorithm);
    }
}

#[test]
fn test_empty_input_is_a_noop() {
    for algorithm in Algorithm::ALL {
        let (moves, store) = replay(algorithm, &[]);
        assert!(moves.is_empty());
        assert!(store.is_empty());
        assert_eq!(store.version(), 0);
    }
}

#[test]
fn test_compilers_do_not_touch_input() {
    let keys = vec![4, 2, 8, 6];
    for algorithm in Algorithm::ALL {
        let _ = algorithm.compiler().compile(&keys);
        assert_eq!(keys, vec![4, 2, 8, 6]);
    }
}

#[test]
fn test_range_family_uses_one_window_per_merge_or_partition() {
    let keys: Vec<Key> = vec![8, 7, 6, 5, 4, 3, 2, 1];
    let moves = Algorithm::Merge.compiler().compile(&keys);
    // 4 + 2 + 1 merges for 8 elements
    assert_eq!(moves.range_count(), 7);
    assert_eq!(moves.len(), 24);
    assert!(moves.validate(keys.len()).is_ok());
}
