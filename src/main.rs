mod games;
mod puzzle;
mod words;

use games::sopa::{self, SopaConfig};
use puzzle::{generate, Coord, Puzzle, SPANISH_ALPHABET};
use std::env;

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String>
{
    let mut args = env::args().skip(1);
    let command = args.next();
    let rest: Vec<String> = args.collect();
    match command.as_deref() {
        None => interactive_menu(),
        Some("list") => {
            list_games();
            Ok(())
        }
        Some("sopa") => run_game("sopa", &rest),
        Some("print") => {
            let config = PrintConfig::from_args(&rest)?;
            print_puzzle(&config)
        }
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(other) => Err(format!("Unknown command '{other}'. Run with --help.")),
    }
}

fn run_game(name: &str, args: &[String]) -> Result<(), String>
{
    match name {
        "sopa" => {
            let config = SopaConfig::from_args(args)?;
            sopa::run_with_config(config)
        }
        _ => Err(format!("Unknown game '{name}'. Run with --help.")),
    }
}

struct PrintConfig
{
    sopa: SopaConfig,
    solution: bool,
}

impl PrintConfig
{
    fn from_args(args: &[String]) -> Result<Self, String>
    {
        let mut solution = false;
        let mut passthrough = Vec::new();
        for arg in args {
            if arg == "--solucion" {
                solution = true;
            } else {
                passthrough.push(arg.clone());
            }
        }
        Ok(Self {
            sopa: SopaConfig::from_args(&passthrough)?,
            solution,
        })
    }
}

/// Worksheet mode: write a fresh puzzle to stdout, optionally followed
/// by a second grid with only the placed words visible.
fn print_puzzle(config: &PrintConfig) -> Result<(), String>
{
    let word_list = config.sopa.word_list()?;
    let mut rng = rand::thread_rng();
    let puzzle = generate(word_list, config.sopa.size, &SPANISH_ALPHABET, &mut rng);

    println!("Sopa de Letras - tema: {}", config.sopa.theme);
    println!();
    print!("{}", puzzle.grid);
    println!();
    println!("Palabras:");
    for placed in &puzzle.words {
        println!("  {}", placed.text);
    }

    if config.solution {
        println!();
        println!("Solución:");
        print!("{}", render_solution(&puzzle));
    }

    Ok(())
}

fn render_solution(puzzle: &Puzzle) -> String
{
    let size = puzzle.grid.size();
    let mut out = String::new();
    for row in 0..size {
        for col in 0..size {
            if col > 0 {
                out.push(' ');
            }
            let coord = Coord::new(row, col);
            let in_word = puzzle
                .words
                .iter()
                .any(|placed| placed.cells.contains(&coord));
            if in_word {
                out.push(puzzle.grid.letter(coord).unwrap_or(' '));
            } else {
                out.push('·');
            }
        }
        out.push('\n');
    }
    out
}

fn interactive_menu() -> Result<(), String>
{
    let registry = games::registry();
    println!("KB Games");
    println!();
    println!("Select a game:");
    for (idx, game) in registry.iter().enumerate() {
        println!("  {}. {} - {}", idx + 1, game.name, game.description);
    }
    println!();
    print!("Enter number or name (default 1, q to quit): ");
    std::io::Write::flush(&mut std::io::stdout())
        .map_err(|err| format!("Failed to flush stdout: {err}"))?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|err| format!("Failed to read input: {err}"))?;
    let choice = input.trim();

    if choice.is_empty() {
        return run_game(registry[0].name, &[]);
    }
    if choice.eq_ignore_ascii_case("q") {
        return Ok(());
    }
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= registry.len() {
            return run_game(registry[index - 1].name, &[]);
        }
    }

    for game in registry {
        if game.name.eq_ignore_ascii_case(choice) {
            return run_game(game.name, &[]);
        }
    }

    Err("Invalid selection.".to_string())
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<10} - {}", game.name, game.description);
    }
    println!();
    println!("Available themes:");
    for theme in words::themes() {
        println!("  {:<10} - {} palabras", theme.name, theme.words.len());
    }
}

fn print_help()
{
    println!("sopa-letras");
    println!("\nUsage:");
    println!("  sopa list");
    println!("  sopa sopa [--tema=animales] [--size=12]");
    println!("  sopa print [--tema=animales] [--size=12] [--solucion]");
    println!("\nNotes:");
    println!("  'sopa' plays in the terminal: arrows move, SPACE starts a");
    println!("  selection, ENTER submits it, N starts a new game.");
    println!("  'print' writes a puzzle to stdout for worksheets.");
}

#[cfg(test)]
mod tests
{
    use super::*;
    use puzzle::{Grid, PlacedWord};

    #[test]
    fn print_config_extracts_solution_flag()
    {
        let args = vec!["--solucion".to_string(), "--tema=colores".to_string()];
        let config = PrintConfig::from_args(&args).unwrap();
        assert!(config.solution);
        assert_eq!(config.sopa.theme, "colores");
    }

    #[test]
    fn solution_masks_filler_cells()
    {
        let grid = Grid::from_rows(vec![vec!['S', 'O'], vec!['X', 'L']]);
        let puzzle = Puzzle {
            grid,
            words: vec![PlacedWord {
                text: "SO".to_string(),
                cells: vec![Coord::new(0, 0), Coord::new(0, 1)],
            }],
        };
        assert_eq!(render_solution(&puzzle), "S O\n· ·\n");
    }
}
