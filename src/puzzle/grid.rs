use std::fmt;

/// A single cell position in the letter grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Coord
{
    pub row: usize,
    pub col: usize,
}

impl Coord
{
    pub fn new(row: usize, col: usize) -> Self
    {
        Self { row, col }
    }
}

/// One of the 8 compass directions a word can run along.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Direction
{
    pub dr: i32,
    pub dc: i32,
}

/// All 8 unit vectors: horizontals, verticals, diagonals.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dr: 0, dc: 1 },
    Direction { dr: 0, dc: -1 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: 1, dc: 1 },
    Direction { dr: 1, dc: -1 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: -1, dc: -1 },
];

impl Direction
{
    /// The cell `steps` letters away from `start`, or None if it would
    /// leave a `size`-by-`size` grid.
    pub fn step(&self, start: Coord, steps: usize, size: usize) -> Option<Coord>
    {
        let row = start.row as i32 + self.dr * steps as i32;
        let col = start.col as i32 + self.dc * steps as i32;
        if row < 0 || col < 0 || row >= size as i32 || col >= size as i32 {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }
}

/// A fully generated square letter grid. Immutable once a round starts.
#[derive(Clone, Debug)]
pub struct Grid
{
    size: usize,
    rows: Vec<Vec<char>>,
}

impl Grid
{
    pub(crate) fn from_rows(rows: Vec<Vec<char>>) -> Self
    {
        let size = rows.len();
        Self { size, rows }
    }

    pub fn size(&self) -> usize
    {
        self.size
    }

    pub fn letter(&self, coord: Coord) -> Option<char>
    {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }
}

impl fmt::Display for Grid
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        for row in &self.rows {
            for (idx, ch) in row.iter().enumerate() {
                if idx > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn step_stays_in_bounds()
    {
        let east = Direction { dr: 0, dc: 1 };
        assert_eq!(east.step(Coord::new(0, 0), 3, 4), Some(Coord::new(0, 3)));
        assert_eq!(east.step(Coord::new(0, 0), 4, 4), None);

        let north_west = Direction { dr: -1, dc: -1 };
        assert_eq!(north_west.step(Coord::new(2, 2), 2, 4), Some(Coord::new(0, 0)));
        assert_eq!(north_west.step(Coord::new(2, 2), 3, 4), None);
    }

    #[test]
    fn directions_cover_all_unit_vectors()
    {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                assert!(DIRECTIONS.contains(&Direction { dr, dc }));
            }
        }
    }

    #[test]
    fn display_renders_rows()
    {
        let grid = Grid::from_rows(vec![vec!['S', 'O'], vec!['L', 'A']]);
        assert_eq!(grid.to_string(), "S O\nL A\n");
    }
}
