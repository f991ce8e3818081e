use batalha_naval::{BitBoard, BitBoardError};

fn occupied<const N: usize>(bb: &BitBoard<u128, N>) -> Vec<(usize, usize)> {
    (0..N)
        .flat_map(|r| (0..N).map(move |c| (r, c)))
        .filter(|&(r, c)| bb.get(r, c).unwrap())
        .collect()
}

#[test]
fn test_try_new_sizes() {
    // the main board and pattern sizes fit their backing integers
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
    assert!(BitBoard::<u32, 5>::try_new().is_ok());

    // 6x6 = 36 cells do not fit in 32 bits
    let err = BitBoard::<u32, 6>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 6, capacity: 32 })));
    assert!(BitBoard::<u32, 6>::from_cells([(0, 0)]).is_err());
}

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert_eq!(bb.size(), 10);
    assert!(occupied(&bb).is_empty());

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert!(!bb.get(0, 0).unwrap());

    // setting twice keeps a single cell
    bb.set(9, 9).unwrap();
    assert_eq!(occupied(&bb), vec![(9, 9)]);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u32, 5>::new();
    assert_eq!(
        bb.set(5, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 5, col: 0 }
    );
    assert!(bb.get(0, 5).is_err());
}

#[test]
fn test_from_cells_and_union() {
    let mut a = BitBoard::<u128, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    assert_eq!(occupied(&a), vec![(0, 1), (3, 3)]);

    let b = BitBoard::<u128, 4>::from_cells([(0, 1), (2, 2)]).unwrap();
    a |= b;
    assert_eq!(occupied(&a), vec![(0, 1), (2, 2), (3, 3)]);
}
