use batalha_naval::levels::aventureiro;
use batalha_naval::{Board, BoardShip, CellGrid, Orientation, ShipType, BOARD_SIZE, SHIP_MARK};

fn marked_cells(board: &Board) -> usize {
    let n = board.size();
    (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .filter(|&(r, c)| board.cell(r, c) == SHIP_MARK)
        .count()
}

#[test]
fn test_empty_board_reads_zero() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE as usize);
    assert_eq!(marked_cells(&board), 0);
    // outside the board reads as empty too
    assert_eq!(board.cell(10, 0), 0);
}

#[test]
fn test_crossing_ships_share_a_cell() {
    let mut board = Board::new();
    let def = ShipType::new("Test", 3);
    board.place(&BoardShip::new(def, Orientation::Horizontal, 1, 0).unwrap());
    board.place(&BoardShip::new(def, Orientation::Vertical, 0, 1).unwrap());
    assert_eq!(marked_cells(&board), 5);
    assert_eq!(board.cell(1, 1), SHIP_MARK);
}

#[test]
fn test_aventureiro_fleet() {
    let board = aventureiro::board().unwrap();
    // 16 marks, one cell shared by the horizontal and diagonal ships
    assert_eq!(marked_cells(&board), 15);
    assert!(board.is_occupied(2, 2));
    assert!(board.is_occupied(3, 6));
    assert!(!board.is_occupied(4, 4));
}
