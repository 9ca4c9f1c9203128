//! Vitrine TUI - terminal browser for the showcase content.
//!
//! Tab cycles the pages (gallery, projects, students, announcements,
//! resources, past teams); `f` cycles the active filter chip, Enter opens
//! the lightbox on the highlighted card, and `n`/`p` step through the
//! visible set.

mod app;
mod views;

use std::env;
use std::io;
use std::path::Path;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use vitrine_content::ContentBundle;

use app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt::init();

    // Optional argument: path to a JSON content bundle.
    let bundle = match env::args().nth(1) {
        Some(path) => ContentBundle::from_json_file(Path::new(&path))?,
        None => ContentBundle::builtin(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(bundle);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}
