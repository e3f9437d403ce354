//! Miscellaneous crate utilities.

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter};

/// Write one character per cell as a labelled 8x8 grid, A1 in the upper left.
/// Fails unless `cells` yields exactly [`NUM_SPACES`] items.
pub fn format_grid<I: IntoIterator<Item = char>>(cells: I, f: &mut Formatter) -> fmt::Result {
    let cells: Vec<char> = cells.into_iter().collect();
    if cells.len() != NUM_SPACES {
        return Err(fmt::Error);
    }

    f.write_str("   A B C D E F G H")?;
    for (row, rank) in cells.chunks(EDGE_LENGTH).enumerate() {
        write!(f, "\n {} ", row + 1)?;
        for cell in rank {
            write!(f, "{} ", cell)?;
        }
    }

    Ok(())
}
