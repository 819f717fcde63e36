//! This module contains the minefield board and its reveal rules.

use crate::point::{self, Point};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::HashSet;
use std::io::{self, Write};
use thiserror::Error;

/// The result of revealing a single cell.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RevealOutcome {
    /// The cell was safe, play continues.
    Continue,
    /// The cell held a mine, the game is over.
    HitMine,
}

/// Errors raised while constructing a field.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The requested mine count does not leave at least one safe cell.
    #[error("cannot place {mines} mines on a field of {cells} cells")]
    InvalidConfiguration { mines: u32, cells: u32 },
}

/// Represents the state of a minefield (a game board).
///
/// The mine layout is fixed at construction; the only mutation during play
/// is marking cells revealed through [`Minefield::reveal`].
#[derive(PartialEq, Clone, Debug)]
pub struct Minefield {
    /// The width of the field.
    width: u16,
    /// The height of the field.
    height: u16,
    /// Row-major indices of the mined cells.
    mines: HashSet<usize>,
    /// Per-cell revealed state, row-major.
    revealed: Vec<bool>,
    /// The number of cells revealed so far.
    cells_revealed: u32,
}

impl Minefield {
    pub fn get_width(&self) -> u16 {
        self.width
    }
    pub fn get_height(&self) -> u16 {
        self.height
    }
    pub fn get_size(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
    pub fn get_mine_count(&self) -> u32 {
        self.mines.len() as u32
    }
    pub fn get_revealed_count(&self) -> u32 {
        self.cells_revealed
    }
    pub fn is_mine(&self, position: &Point) -> bool {
        self.mines.contains(&position.to_index(self.width))
    }
    pub fn is_revealed(&self, position: &Point) -> bool {
        self.revealed[position.to_index(self.width)]
    }

    /// Count the mines among the up-to-8 neighbours of `position`.
    ///
    /// Depends only on the mine layout, never on revealed state, and is
    /// defined for mined cells too (a mine does not count itself).
    pub fn adjacent_mines(&self, position: &Point) -> u8 {
        point::neighbours(position, self.width, self.height)
            .iter()
            .filter(|neighbour| self.mines.contains(&neighbour.to_index(self.width)))
            .count() as u8
    }

    /// Reveal the cell at `position`.
    ///
    /// A mine short-circuits to [`RevealOutcome::HitMine`] and stays
    /// unrevealed. A safe cell is marked revealed; if none of its neighbours
    /// are mined, the reveal expands through the whole connected
    /// zero-adjacency region plus its numbered border. Revealing an
    /// already-revealed cell is a no-op.
    ///
    /// `position` must be in bounds; bounds checking belongs to the caller.
    pub fn reveal(&mut self, position: &Point) -> RevealOutcome {
        debug_assert!(position.x < self.width && position.y < self.height);

        if self.mines.contains(&position.to_index(self.width)) {
            return RevealOutcome::HitMine;
        }

        // Work-list flood fill. Cells are marked revealed when popped, and
        // only unrevealed neighbours of zero-adjacency cells are pushed, so
        // every cell enters the list a bounded number of times and the fill
        // never reaches a mine.
        let mut pending = vec![position.clone()];
        while let Some(current) = pending.pop() {
            let index = current.to_index(self.width);
            if self.revealed[index] {
                continue;
            }
            debug_assert!(!self.mines.contains(&index));

            self.revealed[index] = true;
            self.cells_revealed += 1;

            if self.adjacent_mines(&current) == 0 {
                for neighbour in point::neighbours(&current, self.width, self.height) {
                    if !self.revealed[neighbour.to_index(self.width)] {
                        pending.push(neighbour);
                    }
                }
            }
        }

        RevealOutcome::Continue
    }

    /// True once every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.cells_revealed as usize == self.revealed.len() - self.mines.len()
    }

    /// Write an ascii representation of the current field state to `writer`.
    ///
    /// Hidden cells print as `.`, revealed empty cells as a space, and
    /// revealed numbered cells as their digit. With `reveal_all` the whole
    /// layout is shown, mines as `*`.
    pub fn print(&self, writer: &mut dyn Write, reveal_all: bool) -> io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let position = Point { x, y };
                let index = position.to_index(self.width);

                if reveal_all || self.revealed[index] {
                    if self.mines.contains(&index) {
                        write!(writer, "*")?;
                    } else {
                        match self.adjacent_mines(&position) {
                            0 => write!(writer, " ")?,
                            count => write!(writer, "{}", count)?,
                        }
                    }
                } else {
                    write!(writer, ".")?;
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

/// Generate a field with `mine_count` mines placed uniformly at random.
///
/// Mine positions are sampled without replacement, so the field always holds
/// exactly `mine_count` distinct mines. The generator is injected to let
/// callers pin the layout with a seeded rng.
pub fn generate_field<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    mine_count: u32,
    rng: &mut R,
) -> Result<Minefield, FieldError> {
    let cells = width as usize * height as usize;
    if mine_count as usize >= cells {
        return Err(FieldError::InvalidConfiguration {
            mines: mine_count,
            cells: cells as u32,
        });
    }

    let mines: HashSet<usize> = (0..cells)
        .choose_multiple(rng, mine_count as usize)
        .into_iter()
        .collect();

    Ok(Minefield {
        width,
        height,
        mines,
        revealed: vec![false; cells],
        cells_revealed: 0,
    })
}

/// Generate a field with mines at the given row-major indices.
pub fn generate_field_with_mines(
    width: u16,
    height: u16,
    mines: HashSet<usize>,
) -> Result<Minefield, FieldError> {
    let cells = width as usize * height as usize;
    if mines.len() >= cells {
        return Err(FieldError::InvalidConfiguration {
            mines: mines.len() as u32,
            cells: cells as u32,
        });
    }

    for &mine in &mines {
        if mine >= cells {
            panic!("Cannot place a mine outside the field bounds.");
        }
    }

    Ok(Minefield {
        width,
        height,
        mines,
        revealed: vec![false; cells],
        cells_revealed: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mines(indices: &[usize]) -> HashSet<usize> {
        indices.iter().cloned().collect()
    }

    #[test]
    fn test_generate_field() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = generate_field(10, 10, 10, &mut rng).unwrap();

        // Dimensions should be 10x10, size 100.
        assert_eq!(10, field.get_width());
        assert_eq!(10, field.get_height());
        assert_eq!(100, field.get_size());

        // Exactly 10 distinct mines, all within the field.
        assert_eq!(10, field.get_mine_count());
        for index in &field.mines {
            assert!(*index < 100);
        }

        // Nothing is revealed on a fresh field.
        assert_eq!(0, field.get_revealed_count());
        assert!(!field.is_cleared());
    }

    #[test]
    fn test_generate_field_deterministic() {
        // The same seed must reproduce the same layout.
        let first = generate_field(9, 9, 12, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = generate_field(9, 9, 12, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_configuration() {
        let mut rng = StdRng::seed_from_u64(42);

        // As many mines as cells, or more, must fail fast.
        assert_eq!(
            generate_field(3, 3, 9, &mut rng),
            Err(FieldError::InvalidConfiguration { mines: 9, cells: 9 })
        );
        assert!(generate_field(1, 1, 1, &mut rng).is_err());
        assert!(generate_field(5, 5, 30, &mut rng).is_err());

        // Same check for fixed layouts.
        assert!(generate_field_with_mines(2, 2, mines(&[0, 1, 2, 3])).is_err());
    }

    #[test]
    fn test_zero_area_field() {
        let mut rng = StdRng::seed_from_u64(42);

        // A zero-area field cannot hold even zero mines.
        assert!(generate_field(0, 5, 0, &mut rng).is_err());
        assert!(generate_field(5, 0, 0, &mut rng).is_err());
    }

    #[test]
    fn test_zero_mines_degenerate() {
        // A mine-free 2x2 field is a valid configuration.
        let mut field = generate_field_with_mines(2, 2, HashSet::new()).unwrap();
        assert!(!field.is_cleared());

        // Any single reveal cascades across the whole field.
        assert_eq!(RevealOutcome::Continue, field.reveal(&Point { x: 1, y: 0 }));
        assert_eq!(4, field.get_revealed_count());
        assert!(field.is_cleared());
    }

    #[test]
    fn test_reveal_mine() {
        let mut field = generate_field_with_mines(3, 3, mines(&[8])).unwrap();

        // Stepping on the mine loses without revealing it.
        assert_eq!(RevealOutcome::HitMine, field.reveal(&Point { x: 2, y: 2 }));
        assert!(!field.is_revealed(&Point { x: 2, y: 2 }));
        assert_eq!(0, field.get_revealed_count());
    }

    #[test]
    fn test_flood_fill_clears_field() {
        // 3x3 field with its single mine in the far corner.
        let mut field = generate_field_with_mines(3, 3, mines(&[8])).unwrap();

        // Revealing the opposite corner has adjacency 0 and must flood the
        // eight safe cells in one move.
        assert_eq!(RevealOutcome::Continue, field.reveal(&Point { x: 0, y: 0 }));
        assert_eq!(8, field.get_revealed_count());
        assert!(!field.is_revealed(&Point { x: 2, y: 2 }));
        assert!(field.is_cleared());
    }

    #[test]
    fn test_flood_fill_stops_at_border() {
        // A diagonal of mines splits the field into two zero regions.
        let mut field = generate_field_with_mines(5, 5, mines(&[0, 6, 12, 18, 24])).unwrap();

        // Revealing one corner region uncovers it and its numbered border.
        field.reveal(&Point { x: 4, y: 0 });
        assert_eq!(8, field.get_revealed_count());

        // The fill must not cross the diagonal or touch a mine.
        assert!(!field.is_revealed(&Point { x: 0, y: 4 }));
        for mine in &[0, 6, 12, 18, 24] {
            assert!(!field.is_revealed(&point::from_index(*mine, 5)));
        }

        // The opposite region reveals independently.
        field.reveal(&Point { x: 0, y: 4 });
        assert_eq!(16, field.get_revealed_count());
    }

    #[test]
    fn test_reveal_idempotent() {
        let mut field = generate_field_with_mines(5, 5, mines(&[0, 6, 12, 18, 24])).unwrap();

        field.reveal(&Point { x: 4, y: 0 });
        let after_first = field.clone();

        // Revealing the same cell again changes nothing.
        assert_eq!(RevealOutcome::Continue, field.reveal(&Point { x: 4, y: 0 }));
        assert_eq!(after_first, field);
    }

    #[test]
    fn test_adjacent_mines() {
        let mut field = generate_field_with_mines(3, 3, mines(&[0, 8])).unwrap();

        // Counts are clamped to the 8-neighbourhood, 0..=8.
        assert_eq!(2, field.adjacent_mines(&Point { x: 1, y: 1 }));
        assert_eq!(1, field.adjacent_mines(&Point { x: 1, y: 0 }));
        assert_eq!(0, field.adjacent_mines(&Point { x: 2, y: 0 }));

        // A mine cell reports its neighbours, not itself.
        assert_eq!(0, field.adjacent_mines(&Point { x: 0, y: 0 }));

        // Revealing cells must not change any count.
        field.reveal(&Point { x: 1, y: 1 });
        assert_eq!(2, field.adjacent_mines(&Point { x: 1, y: 1 }));
    }

    #[test]
    fn test_large_field() {
        // One mine on a 100x100 field; a corner reveal clears everything
        // else in a single flood fill.
        let mine = Point { x: 11, y: 88 };
        let mut field = generate_field_with_mines(100, 100, mines(&[mine.to_index(100)])).unwrap();

        assert_eq!(RevealOutcome::Continue, field.reveal(&Point { x: 0, y: 0 }));
        assert_eq!(9999, field.get_revealed_count());
        assert!(!field.is_revealed(&mine));
        assert!(field.is_cleared());
    }

    #[test]
    #[should_panic]
    fn test_mine_outside_bounds() {
        let _ = generate_field_with_mines(3, 3, mines(&[9]));
    }

    #[test]
    fn test_print() {
        let mut field = generate_field_with_mines(3, 3, mines(&[8])).unwrap();

        // Fresh field prints fully hidden.
        let mut output = Vec::new();
        field.print(&mut output, false).unwrap();
        assert_eq!("...\n...\n...\n", std::str::from_utf8(&output).unwrap());

        field.reveal(&Point { x: 0, y: 0 });

        // Revealed cells show blanks and digits, the mine stays hidden.
        let mut output = Vec::new();
        field.print(&mut output, false).unwrap();
        assert_eq!("   \n 11\n 1.\n", std::str::from_utf8(&output).unwrap());

        // The end-of-game print exposes the mine.
        let mut output = Vec::new();
        field.print(&mut output, true).unwrap();
        assert_eq!("   \n 11\n 1*\n", std::str::from_utf8(&output).unwrap());
    }
}
