use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use strandseq::{
    app::KeyOutcome,
    logging::{init_logging, log_critical_error, log_shutdown, log_system_info, set_log_level},
    ui::render_ui,
    App, Sequencer,
};

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: strandseq <FILE>");
        return ExitCode::from(2);
    };

    set_log_level();
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e}");
    }
    log_system_info();

    let mut sequencer = Sequencer::new();
    if let Err(e) = sequencer.load_file(&path) {
        log_critical_error(&e.to_string(), Some("loading strands"));
        return ExitCode::FAILURE;
    }

    let app = App::new(sequencer, path.display().to_string());
    let result = run(app);
    log_shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_critical_error(&e.to_string(), Some("terminal"));
            ExitCode::FAILURE
        }
    }
}

fn run(mut app: App) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == KeyOutcome::Exit {
                return Ok(());
            }
        }
    }
}
