use crate::puzzle::generate::{PlacedWord, Puzzle};
use crate::puzzle::grid::{Coord, Grid};
use std::collections::HashSet;

/// A target word the player still has to find, or already found.
#[derive(Clone, Debug)]
pub struct TargetWord
{
    pub text: String,
    pub cells: Vec<Coord>,
    pub found: bool,
}

/// One round of play: the generated puzzle plus which words and cells
/// have been found so far. The terminal layer owns a `Round` and feeds
/// it finished selection gestures; everything else here is pure state.
#[derive(Clone, Debug)]
pub struct Round
{
    grid: Grid,
    targets: Vec<TargetWord>,
    found_cells: HashSet<Coord>,
}

impl Round
{
    pub fn new(puzzle: Puzzle) -> Self
    {
        let targets = puzzle
            .words
            .into_iter()
            .map(|PlacedWord { text, cells }| TargetWord {
                text,
                cells,
                found: false,
            })
            .collect();

        Self {
            grid: puzzle.grid,
            targets,
            found_cells: HashSet::new(),
        }
    }

    pub fn grid(&self) -> &Grid
    {
        &self.grid
    }

    pub fn targets(&self) -> &[TargetWord]
    {
        &self.targets
    }

    pub fn is_found_cell(&self, coord: Coord) -> bool
    {
        self.found_cells.contains(&coord)
    }

    /// True exactly when every placed word has been found.
    pub fn is_won(&self) -> bool
    {
        !self.targets.is_empty() && self.targets.iter().all(|target| target.found)
    }

    /// Validates a finished selection gesture.
    ///
    /// The path's letters are read in traversal order and also reversed,
    /// so a word can be traced from either end. A still-unfound target
    /// matches when its text equals either reading AND it occupies
    /// exactly the same set of cells as the path, regardless of the
    /// order the cells were visited in. Paths shorter than 2 cells are
    /// ignored. Returns the matched word, already marked found.
    pub fn submit_selection(&mut self, path: &[Coord]) -> Option<&str>
    {
        if path.len() < 2 {
            return None;
        }

        let forward: String = path
            .iter()
            .filter_map(|&coord| self.grid.letter(coord))
            .collect();
        if forward.chars().count() != path.len() {
            return None;
        }
        let backward: String = forward.chars().rev().collect();

        let mut path_cells: Vec<Coord> = path.to_vec();
        path_cells.sort();

        for target in &mut self.targets {
            if target.found || (target.text != forward && target.text != backward) {
                continue;
            }

            let mut word_cells = target.cells.clone();
            word_cells.sort();
            if word_cells != path_cells {
                continue;
            }

            target.found = true;
            self.found_cells.extend(target.cells.iter().copied());
            return Some(&target.text);
        }

        None
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::puzzle::generate::{generate, PlacedWord, Puzzle, SPANISH_ALPHABET};
    use crate::puzzle::grid::Grid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// 4x4 fixture with SOL across the top row and PEZ down the last
    /// column.
    fn fixture() -> Round
    {
        let grid = Grid::from_rows(vec![
            vec!['S', 'O', 'L', 'P'],
            vec!['A', 'B', 'C', 'E'],
            vec!['D', 'F', 'G', 'Z'],
            vec!['H', 'I', 'J', 'K'],
        ]);
        let words = vec![
            PlacedWord {
                text: "SOL".to_string(),
                cells: vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
            },
            PlacedWord {
                text: "PEZ".to_string(),
                cells: vec![Coord::new(0, 3), Coord::new(1, 3), Coord::new(2, 3)],
            },
        ];
        Round::new(Puzzle { grid, words })
    }

    #[test]
    fn forward_trace_matches()
    {
        let mut round = fixture();
        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)];
        assert_eq!(round.submit_selection(&path), Some("SOL"));
        assert!(round.is_found_cell(Coord::new(0, 1)));
    }

    #[test]
    fn reverse_trace_matches()
    {
        let mut round = fixture();
        let path = [Coord::new(0, 2), Coord::new(0, 1), Coord::new(0, 0)];
        assert_eq!(round.submit_selection(&path), Some("SOL"));
    }

    #[test]
    fn scrambled_visit_order_still_matches()
    {
        // Only the cell set is compared, never the traversal order. The
        // letter string still has to read as the word, so the scramble
        // swaps the two identical Ns of ANNA.
        let grid = Grid::from_rows(vec![
            vec!['A', 'N', 'N', 'A'],
            vec!['X', 'X', 'X', 'X'],
            vec!['X', 'X', 'X', 'X'],
            vec!['X', 'X', 'X', 'X'],
        ]);
        let words = vec![PlacedWord {
            text: "ANNA".to_string(),
            cells: vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(0, 3),
            ],
        }];
        let mut round = Round::new(Puzzle { grid, words });

        let path = [
            Coord::new(0, 0),
            Coord::new(0, 2),
            Coord::new(0, 1),
            Coord::new(0, 3),
        ];
        assert_eq!(round.submit_selection(&path), Some("ANNA"));
    }

    #[test]
    fn wrong_cells_with_right_letters_do_not_match()
    {
        let grid = Grid::from_rows(vec![
            vec!['S', 'O', 'L', 'S'],
            vec!['X', 'X', 'X', 'O'],
            vec!['X', 'X', 'X', 'L'],
            vec!['X', 'X', 'X', 'X'],
        ]);
        let words = vec![PlacedWord {
            text: "SOL".to_string(),
            cells: vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
        }];
        let mut round = Round::new(Puzzle { grid, words });

        // Same letters, different cells: not the placed word.
        let path = [Coord::new(0, 3), Coord::new(1, 3), Coord::new(2, 3)];
        assert_eq!(round.submit_selection(&path), None);
        assert!(!round.is_won());
    }

    #[test]
    fn short_selection_is_a_no_op()
    {
        let mut round = fixture();
        assert_eq!(round.submit_selection(&[Coord::new(0, 0)]), None);
        assert_eq!(round.submit_selection(&[]), None);
        assert!(!round.is_found_cell(Coord::new(0, 0)));
    }

    #[test]
    fn found_word_is_not_counted_twice()
    {
        let mut round = fixture();
        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)];
        assert_eq!(round.submit_selection(&path), Some("SOL"));

        // Resubmitting the same cells must not rematch or grow state.
        let cells_before: Vec<Coord> = round.targets()[0].cells.clone();
        assert_eq!(round.submit_selection(&path), None);
        assert_eq!(round.targets()[0].cells, cells_before);
        assert!(round.targets()[0].found);
        assert!(!round.is_won());
    }

    #[test]
    fn finding_every_word_wins_the_round()
    {
        let mut round = fixture();
        assert!(!round.is_won());

        let sol = [Coord::new(0, 2), Coord::new(0, 1), Coord::new(0, 0)];
        assert_eq!(round.submit_selection(&sol), Some("SOL"));
        assert!(!round.is_won());

        let pez = [Coord::new(0, 3), Coord::new(1, 3), Coord::new(2, 3)];
        assert_eq!(round.submit_selection(&pez), Some("PEZ"));
        assert!(round.is_won());
    }

    #[test]
    fn generated_round_is_winnable_end_to_end()
    {
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = generate(&["sol", "pez"], 4, &SPANISH_ALPHABET, &mut rng);
        let mut round = Round::new(puzzle);

        let paths: Vec<(String, Vec<Coord>)> = round
            .targets()
            .iter()
            .map(|target| {
                let mut cells = target.cells.clone();
                cells.reverse();
                (target.text.clone(), cells)
            })
            .collect();

        for (text, path) in paths {
            assert_eq!(round.submit_selection(&path), Some(text.as_str()));
        }
        assert!(round.is_won());
    }
}
