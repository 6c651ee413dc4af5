//! Sample maze demo: builds a 7x6 walkability grid, searches a route from
//! the top-left to the top-right corner, and prints each step.
//!
//! Run with `RUST_LOG=debug` to see the engine's lifecycle output.

use gridway_core::{Point, WalkMask};
use gridway_search::SearchGrid;

fn main() {
    env_logger::init();

    let rows = vec![
        vec![true, false, true, true, true, false, true],
        vec![true, false, true, false, true, false, true],
        vec![true, true, true, false, true, true, true],
        vec![false, true, true, false, true, true, true],
        vec![true, false, true, false, true, true, true],
        vec![true, true, true, true, true, true, true],
    ];
    let Some(mask) = WalkMask::from_rows(&rows) else {
        eprintln!("sample mask rows are inconsistent");
        return;
    };

    let mut grid = SearchGrid::new();
    if let Err(err) = grid.initialize(7, 6, Point::new(0, 0), Point::new(6, 0), mask) {
        eprintln!("initialization failed: {err}");
        return;
    }

    match grid.calculate_path() {
        Ok(path) => {
            let mut current = path.first();
            while let Some(node) = current {
                println!("{} {}", node.pos.x, node.pos.y);
                current = path.next_after(node);
            }
        }
        Err(err) => eprintln!("search failed: {err}"),
    }
}
