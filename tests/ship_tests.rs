use batalha_naval::{Coord, GridError, Orientation, Ship, ShipType};

const N: usize = 10;

fn cells(ship: &Ship<u128, N>) -> Vec<(usize, usize)> {
    ship.cells().map(|c| (c.row, c.col)).collect()
}

#[test]
fn test_each_orientation_cells() -> Result<(), GridError> {
    let def = ShipType::new("Test", 4);

    let ship = Ship::<u128, N>::new(def, Orientation::Horizontal, 2, 0)?;
    assert_eq!(cells(&ship), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);

    let ship = Ship::<u128, N>::new(def, Orientation::Vertical, 0, 5)?;
    assert_eq!(cells(&ship), vec![(0, 5), (1, 5), (2, 5), (3, 5)]);

    let ship = Ship::<u128, N>::new(def, Orientation::Diagonal, 0, 0)?;
    assert_eq!(cells(&ship), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

    let ship = Ship::<u128, N>::new(def, Orientation::AntiDiagonal, 0, 9)?;
    assert_eq!(cells(&ship), vec![(0, 9), (1, 8), (2, 7), (3, 6)]);
    Ok(())
}

#[test]
fn test_mask_matches_cells() -> Result<(), GridError> {
    let def = ShipType::new("Test", 3);
    let ship = Ship::<u128, N>::new(def, Orientation::Diagonal, 4, 4)?;
    let mask = ship.mask();
    for r in 0..N {
        for c in 0..N {
            let on_ship = ship.cells().any(|Coord { row, col }| row == r && col == c);
            assert_eq!(mask.get(r, c)?, on_ship, "cell ({},{})", r, c);
        }
    }
    assert_eq!(ship.origin(), (4, 4));
    assert_eq!(ship.orientation(), Orientation::Diagonal);
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let def = ShipType::new("Test", 4);
    assert_eq!(
        Ship::<u128, N>::new(def, Orientation::Horizontal, 0, 7).unwrap_err(),
        GridError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::<u128, N>::new(def, Orientation::Vertical, 7, 0).unwrap_err(),
        GridError::ShipOutOfBounds
    );
    // anti-diagonal running off the left edge
    assert_eq!(
        Ship::<u128, N>::new(def, Orientation::AntiDiagonal, 0, 2).unwrap_err(),
        GridError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::<u128, N>::new(def, Orientation::AntiDiagonal, 0, 12).unwrap_err(),
        GridError::ShipOutOfBounds
    );
}

#[test]
fn test_huge_length_is_out_of_bounds() {
    let def = ShipType::new("Huge", usize::MAX);
    for orientation in [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ] {
        assert_eq!(
            Ship::<u128, N>::new(def, orientation, 1, 1).unwrap_err(),
            GridError::ShipOutOfBounds
        );
    }
    assert_eq!(Orientation::Horizontal.offset(0, usize::MAX, 1), None);
}

#[test]
fn test_coord_display() {
    assert_eq!(Coord::new(4, 1).to_string(), "(4,1)");
}
