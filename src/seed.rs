use log::trace;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::proc::{check_dimensions, Grid};

/// Builds a `width × height` grid with exactly `cell_count` live cells at
/// distinct, uniformly chosen positions.
///
/// The same `rng_seed` always yields the same layout; `None` draws a
/// fresh seed from the operating system.
pub fn seed(width: usize, height: usize, cell_count: usize, rng_seed: Option<u64>) -> Result<Grid> {
    let capacity = check_dimensions(width, height)?;
    if cell_count > capacity {
        return Err(Error::InvalidCellCount {
            count: cell_count as i64,
            capacity: capacity as u64,
        });
    }

    let mut rng = match rng_seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut data = vec![false; capacity];
    for i in index::sample(&mut rng, capacity, cell_count) {
        data[i] = true;
    }
    trace!("seeded {width}x{height} grid with {cell_count} cells");

    Ok(Grid::from_cells(width, height, data))
}
