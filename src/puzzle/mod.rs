pub mod generate;
pub mod grid;
pub mod round;

pub use generate::{generate, PlacedWord, Puzzle, GRID_SIZE, SPANISH_ALPHABET};
pub use grid::{Coord, Direction, Grid, DIRECTIONS};
pub use round::{Round, TargetWord};
