mod app;
mod config;
mod grid;
mod input;
mod mode;
mod selection;
mod string;
mod ui;
mod util;

use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{error, info, warn, Level};
use tracing_subscriber::fmt::writer::MakeWriter;

use crossterm::{
    cursor::MoveToColumn,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use config::{CliArgs, Config};
use grid::grid::Grid;
use ui::style::Style;

/// Parse command line arguments
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-r" | "--rows" => {
                cli.rows = Some(parse_number(flag, args.get(i + 1)));
                i += 2;
            }
            "-c" | "--cols" => {
                cli.cols = Some(parse_number(flag, args.get(i + 1)));
                i += 2;
            }
            "-w" | "--cell-width" => {
                cli.cell_width = Some(parse_number(flag, args.get(i + 1)));
                i += 2;
            }
            "-t" | "--theme" => {
                cli.theme = Some(require_value(flag, args.get(i + 1)).to_string());
                i += 2;
            }
            "-a" | "--active" => {
                let raw = require_value(flag, args.get(i + 1));
                match util::parse_cell_ref(raw) {
                    Some(cell) => cli.start_cell = Some(cell),
                    None => {
                        eprintln!("Invalid cell reference: '{}'. Expected something like B3.", raw);
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--config" => {
                cli.config_path = Some(PathBuf::from(require_value(flag, args.get(i + 1))));
                i += 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            arg => {
                eprintln!("Unknown option: {}", arg);
                std::process::exit(1);
            }
        }
    }

    cli
}

fn require_value<'a>(flag: &str, value: Option<&'a String>) -> &'a str {
    match value {
        Some(v) => v.as_str(),
        None => {
            eprintln!("Error: {} requires an argument", flag);
            std::process::exit(1);
        }
    }
}

fn parse_number<T: FromStr>(flag: &str, value: Option<&String>) -> T {
    let raw = require_value(flag, value);
    match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid value for {}: '{}'. Expected a positive integer.", flag, raw);
            std::process::exit(1);
        }
    }
}

/// Log level from SHEETGRID_LOG (error, warn, info, debug, trace)
fn log_level() -> Level {
    std::env::var("SHEETGRID_LOG")
        .ok()
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Handle panics gracefully
fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture);

        if let Some(location) = info.location() {
            error!(
                file = location.file(),
                line = location.line(),
                "panic occurred"
            );
        } else {
            error!("panic occurred");
        }

        if let Some(s) = info.payload().downcast_ref::<&str>() {
            error!(message = %s);
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            error!(message = %s);
        }

        default_hook(info);
    }));
}

/// A `MakeWriter` for `tracing` that logs to the **main screen** by leaving the alternate screen temporarily.
pub struct MainScreenWriter;

impl<'a> MakeWriter<'a> for MainScreenWriter {
    type Writer = MainScreenWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        MainScreenWriterHandle
    }
}

/// A handle that writes to stdout outside the alternate screen
pub struct MainScreenWriterHandle;

impl Write for MainScreenWriterHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, MoveToColumn(0))?;
        let result = stdout.write(buf);
        stdout.flush()?;
        execute!(stdout, EnterAlternateScreen)?;
        result
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

fn print_help() {
    eprintln!("sheetgrid - A terminal spreadsheet grid with inline editing and style toggles");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    sheetgrid [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -r, --rows <N>         Number of rows (default {})", config::DEFAULT_ROWS);
    eprintln!("    -c, --cols <N>         Number of columns (default {})", config::DEFAULT_COLS);
    eprintln!("    -w, --cell-width <N>   Display width of each cell (default {})", config::DEFAULT_CELL_WIDTH);
    eprintln!("    -t, --theme <NAME>     Built-in theme: {}", ui::style::Theme::builtin_names().join(", "));
    eprintln!("    -a, --active <CELL>    Start with the active cell at an A1 reference");
    eprintln!("    --config <PATH>        Config file (default ~/.config/sheetgrid/config.toml)");
    eprintln!("    -h, --help             Print this help message");
    eprintln!();
    eprintln!("Set SHEETGRID_LOG=debug for verbose logging.");
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(log_level())
        .with_writer(MainScreenWriter)
        .init();

    install_panic_hook();

    let args = parse_args();
    let config = match Config::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let theme = config.resolve_theme().map_err(|e| {
        error!(error = %e, "failed to load theme");
        io::Error::from(e)
    })?;
    let style = Style::with_theme(theme, config.tag_styles());
    let grid = Grid::new(config.grid.rows, config.grid.cols);

    info!(
        rows = grid.row_count(),
        cols = grid.col_count(),
        theme = %style.theme.name,
        "sheetgrid started"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(grid, style, config.grid.cell_width);
    if let Some(cell) = args.start_cell {
        if !app.view.set_active(cell, &app.grid) {
            warn!(%cell, "start cell is outside the grid, using A1");
        }
    }
    let events = input::spawn_event_reader();
    let result = app.run(&mut terminal, events);
    info!("sheetgrid exiting");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
