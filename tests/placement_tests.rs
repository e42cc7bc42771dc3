use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    placement_is_valid, populate, Board, Cell, Orientation, Ship, BOARD_SIZE, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};

#[test]
fn valid_on_empty_board() {
    let board = Board::new();
    let ship = Ship::new(1, 4, 3, 3, Orientation::Horizontal);
    assert!(placement_is_valid(&ship, &board));
}

#[test]
fn rejects_out_of_bounds() {
    let board = Board::new();
    // anchor in bounds, tail hanging off the right edge
    let ship = Ship::new(1, 4, 7, 0, Orientation::Horizontal);
    assert!(!placement_is_valid(&ship, &board));
    let ship = Ship::new(1, 3, 0, 8, Orientation::Vertical);
    assert!(!placement_is_valid(&ship, &board));
}

#[test]
fn rejects_overlap() {
    let mut board = Board::new();
    board.place(1, [(3, 3), (4, 3)]);
    let ship = Ship::new(2, 2, 4, 3, Orientation::Vertical);
    assert!(!placement_is_valid(&ship, &board));
}

#[test]
fn rejects_orthogonal_and_diagonal_adjacency() {
    let mut board = Board::new();
    board.place(1, [(3, 3)]);
    // directly beside
    let beside = Ship::new(2, 1, 4, 3, Orientation::Horizontal);
    assert!(!placement_is_valid(&beside, &board));
    // diagonal touch counts too
    let diagonal = Ship::new(2, 1, 4, 4, Orientation::Horizontal);
    assert!(!placement_is_valid(&diagonal, &board));
}

#[test]
fn accepts_one_cell_gap() {
    let mut board = Board::new();
    board.place(1, [(3, 3)]);
    let ship = Ship::new(2, 1, 5, 3, Orientation::Horizontal);
    assert!(placement_is_valid(&ship, &board));
}

#[test]
fn validator_does_not_mutate() {
    let mut board = Board::new();
    board.place(1, [(0, 0)]);
    let snapshot = board.clone();
    let ship = Ship::new(2, 2, 5, 5, Orientation::Horizontal);
    placement_is_valid(&ship, &board);
    assert_eq!(board, snapshot);
}

/// Cells of one ship id must form a straight contiguous line of the right
/// length.
fn assert_ship_is_a_line(cells: &[(usize, usize)]) {
    let same_row = cells.iter().all(|&(_, y)| y == cells[0].1);
    let same_col = cells.iter().all(|&(x, _)| x == cells[0].0);
    assert!(same_row || same_col, "ship cells not collinear: {:?}", cells);
    let coords: Vec<usize> = if same_row {
        cells.iter().map(|&(x, _)| x).collect()
    } else {
        cells.iter().map(|&(_, y)| y).collect()
    };
    let min = coords.iter().min().copied().unwrap();
    let max = coords.iter().max().copied().unwrap();
    assert_eq!(max - min + 1, cells.len(), "ship cells not contiguous: {:?}", cells);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The generator always terminates and produces the standard fleet with
    /// no overlap or adjacency violations.
    #[test]
    fn generated_fleet_is_legal(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        populate(&mut board, &mut rng).unwrap();

        let mut per_ship: Vec<Vec<(usize, usize)>> = vec![Vec::new(); NUM_SHIPS + 1];
        let mut total = 0usize;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if let Ok(Cell::Ship(id)) = board.cell(x, y) {
                    prop_assert!((1..=NUM_SHIPS as u8).contains(&id));
                    per_ship[id as usize].push((x, y));
                    total += 1;
                    // no differently-owned ship cell within Chebyshev distance 1
                    for dy in -1i32..=1 {
                        for dx in -1i32..=1 {
                            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                            if nx < 0 || ny < 0 {
                                continue;
                            }
                            if let Ok(Cell::Ship(other)) =
                                board.cell(nx as usize, ny as usize)
                            {
                                prop_assert_eq!(other, id);
                            }
                        }
                    }
                }
            }
        }
        prop_assert_eq!(total, TOTAL_SHIP_CELLS);

        let mut lengths: Vec<usize> =
            per_ship[1..].iter().map(|cells| cells.len()).collect();
        for cells in &per_ship[1..] {
            assert_ship_is_a_line(cells);
        }
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);
    }
}
