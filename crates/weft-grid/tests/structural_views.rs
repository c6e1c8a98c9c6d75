use weft_core::{Collection, ViewError};
use weft_grid::{contract, BiList, Cell, DenseMatrix, GridError, MatrixExt, SparseBiList};

fn counted(height: usize, width: usize) -> DenseMatrix<usize> {
    let mut m = DenseMatrix::new(height, width, 0).unwrap();
    for i in 0..height * width {
        m.set(i / width, i % width, i).unwrap();
    }
    m
}

#[test]
fn mirror_of_a_frozen_matrix_reads_flipped_and_stays_read_only() {
    let mut view = counted(2, 3).frozen().mirrored();
    assert_eq!(view.get(0, 0), Some(&2));
    assert!(matches!(
        view.set(0, 0, 9),
        Err(GridError::Unsupported { .. })
    ));
}

#[test]
fn mirrored_matrix_equals_an_explicitly_flipped_dense_matrix() {
    let mirror = counted(2, 3).mirrored();
    let flipped = DenseMatrix::from_rows([vec![2, 1, 0], vec![5, 4, 3]]).unwrap();
    assert!(contract::matrix_eq(&mirror, &flipped));
    assert_eq!(
        contract::bilist_hash(&mirror),
        contract::bilist_hash(&flipped)
    );
}

#[test]
fn cell_set_round_trip_on_a_sparse_container() {
    let mut grid = SparseBiList::new();
    grid.set(0, 1, 'e').unwrap();

    // Present exactly while stored; removal through the set vacates the
    // container, and re-storing makes it present again.
    {
        let mut cells = grid.cell_set();
        assert!(cells.contains(&Cell::new(0, 1, 'e')));
        assert!(cells.remove(&Cell::new(0, 1, 'e')).unwrap());
    }
    assert_eq!(grid.get(0, 1), None);

    grid.set(0, 1, 'f').unwrap();
    let cells = grid.cell_set();
    assert!(cells.contains(&Cell::new(0, 1, 'f')));
    assert!(!cells.contains(&Cell::new(0, 1, 'e')));
}

#[test]
fn mirror_write_through_is_visible_on_both_faces() {
    let mut mirror = counted(2, 3).mirrored();
    mirror.set(1, 0, 77).unwrap();
    assert_eq!(mirror.get(1, 0), Some(&77));
    assert_eq!(mirror.backing().get(1, 2), Some(&77));

    let original = mirror.mirrored();
    assert_eq!(original.get(1, 2), Some(&77));
}

#[test]
fn commuted_cell_set_rejects_insert_like_any_cell_set() {
    let mut mirror = counted(2, 2).mirrored();
    let mut cells = mirror.cell_set();
    assert!(matches!(
        cells.insert(Cell::new(0, 0, 9)),
        Err(ViewError::Unsupported { .. })
    ));
}

#[test]
fn sparse_and_dense_disagree_until_fully_occupied() {
    let dense = counted(1, 3);
    let mut sparse = SparseBiList::new();
    sparse.set(0, 0, 0).unwrap();
    sparse.set(0, 1, 1).unwrap();
    assert!(!contract::bilist_eq(&dense, &sparse));
    sparse.set(0, 2, 2).unwrap();
    assert!(contract::bilist_eq(&dense, &sparse));
    assert!(contract::bilist_eq(&sparse, &dense));
}
