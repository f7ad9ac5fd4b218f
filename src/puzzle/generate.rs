use crate::puzzle::grid::{Coord, Direction, Grid, DIRECTIONS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Random placements tried per word before it is dropped from the puzzle.
const MAX_ATTEMPTS: usize = 100;

/// Default puzzle dimension.
pub const GRID_SIZE: usize = 12;

/// Fill alphabet for the cells no word covers.
pub const SPANISH_ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'Ñ', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A word that made it into the grid, with the cells it occupies in
/// letter order.
#[derive(Clone, Debug)]
pub struct PlacedWord
{
    pub text: String,
    pub cells: Vec<Coord>,
}

/// A generated grid together with every word that was placed in it,
/// in placement order.
#[derive(Clone, Debug)]
pub struct Puzzle
{
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
}

/// Builds a `size`-by-`size` puzzle from `words`.
///
/// Words are uppercased and attempted longest first. Each word gets a
/// fresh random shuffle of the 8 directions and up to 100 random
/// start cells; a word that never fits is silently left out of the
/// puzzle. Cells not covered by any word are filled from `alphabet`.
/// Generation itself never fails.
pub fn generate(words: &[&str], size: usize, alphabet: &[char], rng: &mut impl Rng) -> Puzzle
{
    let mut scratch: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];

    let mut targets: Vec<String> = words.iter().map(|word| word.to_uppercase()).collect();
    targets.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let mut placed = Vec::new();
    for word in targets {
        if let Some(cells) = place_word(&mut scratch, &word, rng) {
            placed.push(PlacedWord { text: word, cells });
        }
    }

    let rows = scratch
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.unwrap_or_else(|| random_letter(alphabet, rng)))
                .collect()
        })
        .collect();

    Puzzle {
        grid: Grid::from_rows(rows),
        words: placed,
    }
}

fn random_letter(alphabet: &[char], rng: &mut impl Rng) -> char
{
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Tries random placements for one word, committing the first that
/// fits. Returns the occupied cells, or None after 100 failures.
fn place_word(
    scratch: &mut Vec<Vec<Option<char>>>,
    word: &str,
    rng: &mut impl Rng,
) -> Option<Vec<Coord>>
{
    let size = scratch.len();
    let mut directions = DIRECTIONS;
    directions.shuffle(rng);

    for attempt in 0..MAX_ATTEMPTS {
        let direction = directions[attempt % directions.len()];
        let start = Coord::new(rng.gen_range(0..size), rng.gen_range(0..size));

        if let Some(cells) = fit(scratch, word, start, direction) {
            commit(scratch, word, &cells);
            return Some(cells);
        }
    }

    None
}

/// Walks `word` from `start` along `direction` without writing.
/// Valid only if every cell is in-bounds and either unset or already
/// holding the letter the word needs there.
fn fit(
    scratch: &[Vec<Option<char>>],
    word: &str,
    start: Coord,
    direction: Direction,
) -> Option<Vec<Coord>>
{
    let size = scratch.len();
    let mut cells = Vec::with_capacity(word.chars().count());

    for (offset, letter) in word.chars().enumerate() {
        let coord = direction.step(start, offset, size)?;
        match scratch[coord.row][coord.col] {
            Some(existing) if existing != letter => return None,
            _ => cells.push(coord),
        }
    }

    Some(cells)
}

fn commit(scratch: &mut [Vec<Option<char>>], word: &str, cells: &[Coord])
{
    for (letter, coord) in word.chars().zip(cells) {
        scratch[coord.row][coord.col] = Some(letter);
    }
}
