//! Coordinates on a rectangular grid and their row-major linearization.

/// A cell position on the field.
#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    /// Linearize this point to a row-major array index.
    ///
    /// ```
    /// use minefield::point;
    /// let point = point::Point { x: 3, y: 7 };
    /// assert_eq!(point.to_index(10), 73);
    /// ```
    pub fn to_index(&self, width: u16) -> usize {
        (self.y as usize * width as usize) + self.x as usize
    }
}

/// Create a `Point` from a row-major array `index` and field `width`.
///
/// ```
/// use minefield::point;
/// assert_eq!(point::from_index(73, 10), point::Point { x: 3, y: 7 });
/// assert_eq!(point::from_index(0, 4), point::Point { x: 0, y: 0 });
/// ```
pub fn from_index(index: usize, width: u16) -> Point {
    Point {
        x: (index % width as usize) as u16,
        y: (index / width as usize) as u16,
    }
}

/// The in-bounds cells at Chebyshev distance 1 from `position`.
///
/// Corners have 3 neighbours, edges 5, interior cells 8. The grid does not
/// wrap around.
///
/// ```
/// use minefield::point::{neighbours, Point};
///
/// assert_eq!(neighbours(&Point { x: 0, y: 0 }, 3, 3).len(), 3);
/// assert_eq!(neighbours(&Point { x: 1, y: 0 }, 3, 3).len(), 5);
/// assert_eq!(neighbours(&Point { x: 1, y: 1 }, 3, 3).len(), 8);
/// ```
pub fn neighbours(position: &Point, width: u16, height: u16) -> Vec<Point> {
    let mut neighbours = Vec::with_capacity(8);

    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let nx = position.x as i32 + dx;
            let ny = position.y as i32 + dy;

            if nx >= 0 && nx < width as i32 && ny >= 0 && ny < height as i32 {
                neighbours.push(Point {
                    x: nx as u16,
                    y: ny as u16,
                });
            }
        }
    }

    neighbours
}
