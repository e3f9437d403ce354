//! Cell-by-cell reference move generation, for checking the bitboard versions.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::location::Location;
use crate::{EDGE_LENGTH, NUM_SPACES};

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Discs captured by placing at `loc`, walking every ray one cell at a time.
pub fn naive_flips(board: Board, loc: Location) -> Bitboard {
    let (row, col) = loc.to_coords();
    let mut flipped = Bitboard::EMPTY;

    for &(d_row, d_col) in DIRECTIONS.iter() {
        let mut run = Bitboard::EMPTY;
        let mut r = row as isize + d_row;
        let mut c = col as isize + d_col;

        while on_board(r, c) {
            let cell = Bitboard::from_cell(r as usize * EDGE_LENGTH + c as usize);
            if !(cell & board.other).is_empty() {
                run |= cell;
            } else {
                if !(cell & board.mover).is_empty() {
                    flipped |= run;
                }
                break;
            }
            r += d_row;
            c += d_col;
        }
    }

    flipped
}

/// Every empty cell whose placement would capture at least one disc.
pub fn naive_legal_moves(board: Board) -> Bitboard {
    let empties = board.empty_mask();
    let mut legal = Bitboard::EMPTY;

    for cell in 0..NUM_SPACES {
        if !empties.has_cell(cell) {
            continue;
        }
        if let Some(loc) = Location::from_cell(cell) {
            if !naive_flips(board, loc).is_empty() {
                legal |= Bitboard::from(loc);
            }
        }
    }

    legal
}

fn on_board(row: isize, col: isize) -> bool {
    (0..EDGE_LENGTH as isize).contains(&row) && (0..EDGE_LENGTH as isize).contains(&col)
}
