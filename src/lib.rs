extern crate rand;

pub mod field;
pub mod point;

use rand::Rng;
use std::collections::HashSet;

/// Generate a field with `mine_count` randomly placed mines.
pub fn generate_field<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    mine_count: u32,
    rng: &mut R,
) -> Result<field::Minefield, field::FieldError> {
    field::generate_field(width, height, mine_count, rng)
}

/// Generate a field with mines at the given row-major indices.
///
/// ```
/// use minefield::field::RevealOutcome;
/// use minefield::point::Point;
/// use std::collections::HashSet;
///
/// // A 3x3 field whose only mine sits in the bottom-right corner.
/// let mines: HashSet<usize> = [8].iter().cloned().collect();
/// let mut field = minefield::generate_field_with_mines(3, 3, mines).unwrap();
///
/// // The opposite corner has no adjacent mines, so revealing it floods
/// // every safe cell.
/// assert_eq!(field.reveal(&Point { x: 0, y: 0 }), RevealOutcome::Continue);
/// assert_eq!(field.get_revealed_count(), 8);
/// assert!(field.is_cleared());
///
/// // The mine itself is never auto-revealed, and stepping on it loses.
/// assert!(!field.is_revealed(&Point { x: 2, y: 2 }));
/// assert_eq!(field.reveal(&Point { x: 2, y: 2 }), RevealOutcome::HitMine);
/// ```
pub fn generate_field_with_mines(
    width: u16,
    height: u16,
    mines: HashSet<usize>,
) -> Result<field::Minefield, field::FieldError> {
    field::generate_field_with_mines(width, height, mines)
}
