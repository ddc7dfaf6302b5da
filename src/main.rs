use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use checkgrid::app::{App, Outcome};
use checkgrid::{config, facets};

/// Pick entries from a list of checkboxes
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pick entries from a checkbox grid; selected names are printed on confirm"
)]
struct Args {
    /// Entries file: a JSON array of entries or a facets document
    input: PathBuf,

    /// Preselect an entry by name (repeatable)
    #[arg(short, long = "select", value_name = "NAME")]
    select: Vec<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/checkgrid-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/checkgrid-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== CHECKGRID DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Fail before touching the terminal
    let mut entries = facets::load_entries(&args.input)?;
    let unknown: Vec<String> = facets::preselect(&mut entries, &args.select)
        .into_iter()
        .map(str::to_string)
        .collect();

    let source = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "entries".to_string());
    let mut app = App::new(entries, &config_result.config, source);

    if let Some(warning) = config_result.warning {
        app.show_warning(warning);
    }
    if !unknown.is_empty() {
        app.show_warning(format!("Unknown names: {}", unknown.join(", ")));
    }

    let terminal = init_terminal()?;
    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if app.outcome() == Some(Outcome::Confirmed) {
        for name in app.selected_names() {
            println!("{}", name);
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== CHECKGRID DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
