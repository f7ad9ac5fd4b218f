use crate::puzzle::{generate, Coord, Round, GRID_SIZE, SPANISH_ALPHABET};
use crate::words;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

const TICK_MS: u64 = 33;
const MIN_SIZE: usize = 6;
const MAX_SIZE: usize = 20;

#[derive(Default)]
struct Stats
{
    selections: u32,
    matches: u32,
    misses: u32,
}

struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub struct SopaConfig
{
    pub theme: String,
    pub size: usize,
}

impl SopaConfig
{
    pub fn from_args(args: &[String]) -> Result<Self, String>
    {
        let mut theme: Option<String> = None;
        let mut size: Option<usize> = None;
        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            if arg == "--tema" {
                let value = iter
                    .next()
                    .ok_or_else(|| "Expected value after --tema".to_string())?;
                theme = Some(parse_theme(value)?);
            } else if let Some(rest) = arg.strip_prefix("--tema=") {
                theme = Some(parse_theme(rest)?);
            } else if arg == "--size" {
                let value = iter
                    .next()
                    .ok_or_else(|| "Expected value after --size".to_string())?;
                size = Some(parse_size(value)?);
            } else if let Some(rest) = arg.strip_prefix("--size=") {
                size = Some(parse_size(rest)?);
            } else {
                return Err(format!("Unknown sopa option '{arg}'"));
            }
        }

        Ok(Self {
            theme: theme.unwrap_or_else(|| words::default_theme().to_string()),
            size: size.unwrap_or(GRID_SIZE),
        })
    }

    pub fn word_list(&self) -> Result<&'static [&'static str], String>
    {
        words::theme_words(&self.theme)
            .ok_or_else(|| format!("Unknown theme '{}'. Run 'list' to see themes.", self.theme))
    }
}

impl Default for SopaConfig
{
    fn default() -> Self
    {
        Self {
            theme: words::default_theme().to_string(),
            size: GRID_SIZE,
        }
    }
}

pub fn parse_theme(value: &str) -> Result<String, String>
{
    if words::theme_words(value).is_none() {
        let names: Vec<&str> = words::themes().iter().map(|theme| theme.name).collect();
        return Err(format!(
            "Unknown theme '{value}'. Available: {}",
            names.join(", ")
        ));
    }
    Ok(value.to_lowercase())
}

pub fn parse_size(value: &str) -> Result<usize, String>
{
    let parsed = value
        .parse::<usize>()
        .map_err(|_| "Grid size must be a number".to_string())?;
    if !(MIN_SIZE..=MAX_SIZE).contains(&parsed) {
        return Err(format!("Grid size must be between {MIN_SIZE} and {MAX_SIZE}"));
    }
    Ok(parsed)
}

struct Selection
{
    active: bool,
    path: Vec<Coord>,
}

impl Selection
{
    fn new() -> Self
    {
        Self {
            active: false,
            path: Vec::new(),
        }
    }

    fn start(&mut self, anchor: Coord)
    {
        self.active = true;
        self.path.clear();
        self.path.push(anchor);
    }

    fn extend(&mut self, coord: Coord)
    {
        if self.active && !self.path.contains(&coord) {
            self.path.push(coord);
        }
    }

    fn abandon(&mut self)
    {
        self.active = false;
        self.path.clear();
    }

    fn contains(&self, coord: Coord) -> bool
    {
        self.path.contains(&coord)
    }
}

enum Action
{
    Quit,
    NewGame,
    None,
}

pub fn run_with_config(config: SopaConfig) -> Result<(), String>
{
    let word_list = config.word_list()?;
    let mut term = TerminalGuard::enter().map_err(|err| err.to_string())?;
    let mut rng = rand::thread_rng();

    let mut round = Round::new(generate(word_list, config.size, &SPANISH_ALPHABET, &mut rng));
    let mut cursor = Coord::new(0, 0);
    let mut selection = Selection::new();
    let mut stats = Stats::default();
    let mut message: Option<String> = None;

    let start = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        match handle_input(
            &mut round,
            &mut cursor,
            &mut selection,
            &mut stats,
            &mut message,
            config.size,
        )? {
            Action::Quit => break,
            Action::NewGame => {
                round = Round::new(generate(
                    word_list,
                    config.size,
                    &SPANISH_ALPHABET,
                    &mut rng,
                ));
                cursor = Coord::new(0, 0);
                selection.abandon();
                message = None;
            }
            Action::None => {}
        }

        if round.is_won() {
            break;
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            draw_ui(
                term.stdout(),
                &config.theme,
                &round,
                cursor,
                &selection,
                &message,
            )?;
            last_tick = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    draw_summary(term.stdout(), &config.theme, &round, &stats, start.elapsed())?;
    wait_for_space()?;
    Ok(())
}

fn handle_input(
    round: &mut Round,
    cursor: &mut Coord,
    selection: &mut Selection,
    stats: &mut Stats,
    message: &mut Option<String>,
    size: usize,
) -> Result<Action, String>
{
    while event::poll(Duration::from_millis(0)).map_err(|err| err.to_string())? {
        match event::read().map_err(|err| err.to_string())? {
            Event::Key(KeyEvent { code, modifiers, .. }) => match code {
                KeyCode::Esc => return Ok(Action::Quit),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(Action::Quit)
                }
                KeyCode::Char('n') | KeyCode::Char('N') => return Ok(Action::NewGame),
                KeyCode::Up => move_cursor(cursor, -1, 0, size, selection),
                KeyCode::Down => move_cursor(cursor, 1, 0, size, selection),
                KeyCode::Left => move_cursor(cursor, 0, -1, size, selection),
                KeyCode::Right => move_cursor(cursor, 0, 1, size, selection),
                KeyCode::Char(' ') => {
                    selection.start(*cursor);
                    *message = None;
                }
                KeyCode::Backspace => {
                    selection.abandon();
                    *message = None;
                }
                KeyCode::Enter => {
                    if selection.active {
                        submit(round, selection, stats, message);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(Action::None)
}

fn move_cursor(cursor: &mut Coord, dr: i32, dc: i32, size: usize, selection: &mut Selection)
{
    let row = cursor.row as i32 + dr;
    let col = cursor.col as i32 + dc;
    if row < 0 || col < 0 || row >= size as i32 || col >= size as i32 {
        return;
    }
    *cursor = Coord::new(row as usize, col as usize);
    selection.extend(*cursor);
}

fn submit(round: &mut Round, selection: &mut Selection, stats: &mut Stats, message: &mut Option<String>)
{
    if selection.path.len() >= 2 {
        stats.selections += 1;
        match round.submit_selection(&selection.path) {
            Some(word) => {
                stats.matches += 1;
                *message = Some(format!("¡Encontraste {word}!"));
            }
            None => {
                stats.misses += 1;
                *message = Some("Esa no es una palabra de la lista.".to_string());
            }
        }
    }
    selection.abandon();
}

fn draw_ui(
    stdout: &mut Stdout,
    theme: &str,
    round: &Round,
    cursor: Coord,
    selection: &Selection,
    message: &Option<String>,
) -> Result<(), String>
{
    let found = round.targets().iter().filter(|target| target.found).count();
    let mut lines = Vec::new();
    lines.push("KB Games - Sopa de Letras".to_string());
    lines.push(format!(
        "Tema: {}  Palabras: {}/{}",
        theme,
        found,
        round.targets().len()
    ));
    lines.push(String::new());

    let size = round.grid().size();
    for row in 0..size {
        let mut line = String::new();
        for col in 0..size {
            let coord = Coord::new(row, col);
            let letter = round.grid().letter(coord).unwrap_or(' ');
            line.push_str(&render_cell(letter, coord, round, cursor, selection));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("Palabras:".to_string());
    for chunk in round.targets().chunks(4) {
        let row: Vec<String> = chunk
            .iter()
            .map(|target| {
                let mark = if target.found { "x" } else { " " };
                format!("[{mark}] {:<10}", target.text)
            })
            .collect();
        lines.push(row.join(" "));
    }

    lines.push(String::new());
    if let Some(msg) = message {
        lines.push(msg.clone());
    } else if selection.active {
        lines.push("Seleccionando... Enter confirma, Backspace cancela.".to_string());
    } else {
        lines.push("Flechas mueven. Espacio inicia la selección.".to_string());
    }
    lines.push("N: nuevo juego. Esc: salir.".to_string());

    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))
        .map_err(|err| err.to_string())?;
    stdout.write_all(output.as_bytes()).map_err(|err| err.to_string())?;
    stdout.flush().map_err(|err| err.to_string())?;
    Ok(())
}

fn render_cell(
    letter: char,
    coord: Coord,
    round: &Round,
    cursor: Coord,
    selection: &Selection,
) -> String
{
    let (r, g, b) = if coord == cursor {
        (200, 200, 200)
    } else if selection.contains(coord) {
        (60, 100, 220)
    } else if round.is_found_cell(coord) {
        (0, 150, 70)
    } else {
        return format!(" {letter} ");
    };
    format!("\x1b[48;2;{};{};{}m {} \x1b[0m", r, g, b, letter)
}

fn draw_summary(
    stdout: &mut Stdout,
    theme: &str,
    round: &Round,
    stats: &Stats,
    elapsed: Duration,
) -> Result<(), String>
{
    let found = round.targets().iter().filter(|target| target.found).count();
    let mut lines = Vec::new();
    if round.is_won() {
        lines.push("¡Felicidades! Encontraste todas las palabras.".to_string());
    } else {
        lines.push("Juego terminado".to_string());
    }
    lines.push(String::new());
    lines.push(format!("Tema: {}", theme));
    lines.push(format!("Palabras encontradas: {}/{}", found, round.targets().len()));
    lines.push(format!("Selecciones: {}", stats.selections));
    lines.push(format!("Aciertos: {}  Fallos: {}", stats.matches, stats.misses));
    lines.push(format!("Tiempo: {:>5.1}s", elapsed.as_secs_f32()));
    lines.push(String::new());
    lines.push("Press SPACE to exit.".to_string());

    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))
        .map_err(|err| err.to_string())?;
    stdout.write_all(output.as_bytes()).map_err(|err| err.to_string())?;
    stdout.flush().map_err(|err| err.to_string())?;
    Ok(())
}

fn wait_for_space() -> Result<(), String>
{
    while event::poll(Duration::from_millis(0)).map_err(|err| err.to_string())? {
        let _ = event::read().map_err(|err| err.to_string())?;
    }

    loop {
        if event::poll(Duration::from_millis(50)).map_err(|err| err.to_string())? {
            if let Event::Key(KeyEvent { code: KeyCode::Char(' '), .. }) =
                event::read().map_err(|err| err.to_string())?
            {
                break;
            }
        }
    }

    Ok(())
}
