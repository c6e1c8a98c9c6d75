//! Cross-crate behavior of the assembled framework.

use indexmap::{IndexMap, IndexSet};
use weft::prelude::*;

fn counted(height: usize, width: usize) -> DenseMatrix<usize> {
    let mut m = DenseMatrix::new(height, width, 0).unwrap();
    for i in 0..height * width {
        m.set(i / width, i % width, i).unwrap();
    }
    m
}

#[test]
fn row_major_cursor_walkthrough() {
    // A 2x3 matrix filled 0..6 in row-major order.
    let mut m = counted(2, 3);
    let mut cursor = m.cursor();

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(*cursor.next().unwrap());
    }
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(cursor.previous_row_index(), Some(1));
    assert_eq!(cursor.previous_column_index(), Some(0));

    while let Some(&e) = cursor.next() {
        seen.push(e);
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn set_contract_holds_across_construction_paths() {
    // The same three elements reached four different ways.
    let plain: IndexSet<i32> = [1, 2, 3].into_iter().collect();

    let shift = FnCommuter::new(|n: &i32| n + 1, |n: &i32| Ok(n - 1));
    let mut commuted = CommutedSet::new(IndexSet::<i32>::new(), shift);
    for n in [1, 2, 3] {
        commuted.insert(n).unwrap();
    }

    let union = DisjointUnion::new([
        [1].into_iter().collect::<IndexSet<i32>>(),
        [2, 3].into_iter().collect::<IndexSet<i32>>(),
    ]);

    let frozen = Frozen::new(plain.clone());

    weft_testkit::assert_sets_agree(&plain, &commuted);
    weft_testkit::assert_sets_agree(&plain, &union);
    weft_testkit::assert_sets_agree(&plain, &frozen);
    weft_testkit::assert_sets_agree(&commuted, &union);

    let different: IndexSet<i32> = [1, 2, 4].into_iter().collect();
    weft_testkit::assert_sets_differ(&plain, &different);
}

#[test]
fn no_inverse_failure_is_local() {
    let halve = FnCommuter::new(
        |n: &i32| n * 2,
        |n: &i32| {
            if n % 2 == 0 {
                Ok(n / 2)
            } else {
                Err(NoInverse)
            }
        },
    );
    let mut view = CommutedSet::new(IndexSet::<i32>::new(), halve);
    view.insert(4).unwrap();

    assert_eq!(view.insert(5), Err(ViewError::NoInverse));
    assert_eq!(view.backing().len(), 1);
    assert!(view.contains(&4));
}

#[test]
fn map_set_duality_round_trip() {
    let mut store = MapBackingSet::new(IndexMap::<&str, i32>::new());
    store.put("k", 7).unwrap();

    assert_eq!(store.as_map().get(&"k"), Some(7));
    assert!(store.contains(&MapEntry::new("k", 7)));

    store.as_map().remove(&"k").unwrap();
    assert!(!store.contains(&MapEntry::new("k", 7)));
}

#[test]
fn iterative_map_duplicate_key_scenario() {
    let backing = vec![
        MapEntry::new('a', 1),
        MapEntry::new('b', 2),
        MapEntry::new('a', 3),
    ];
    let mut map = IterativeMap::new(backing);

    let keys: Vec<char> = map.keys().collect();
    assert_eq!(keys, vec!['a', 'b']);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&'a'), Some(1));

    assert_eq!(map.remove(&'a').unwrap(), Some(1));
    assert_eq!(map.source(), &vec![MapEntry::new('b', 2)]);
}

#[test]
fn mirrored_matrix_through_the_prelude() {
    let m = counted(2, 3);
    let mirror = m.clone().mirrored();
    for row in 0..2 {
        for column in 0..3 {
            assert_eq!(mirror.get(row, column), m.get(row, 2 - column));
        }
    }
    let round_trip: DenseMatrix<usize> = mirror.mirrored();
    assert_eq!(round_trip, m);
}

#[test]
fn transformed_set_stays_read_only_while_commuted_writes_through() {
    let backing: IndexSet<i32> = [1, 2].into_iter().collect();
    let mut one_way = TransformedSet::new(backing, |n: &i32| n * 10);
    assert!(one_way.contains(&20));
    assert!(matches!(
        one_way.insert(30),
        Err(ViewError::Unsupported { .. })
    ));

    let involution = Involution::new(|n: &i32| -n);
    let mut negated = CommutedSet::new(IndexSet::<i32>::new(), involution);
    negated.insert(-5).unwrap();
    assert!(negated.backing().contains(&5));
    assert!(negated.contains(&-5));
}
