use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::Duration;

use codearchitect::app::Workbench;
use codearchitect::kernel::services::{load_schema, resolve_config_path, CONFIG_ENV_VAR};
use codearchitect::kernel::IconVariant;
use codearchitect::tui::crossterm::into_input_event;
use codearchitect::tui::terminal_guard::{
    install_termination_signals, InputModes, TerminalGuard, TerminationSignal,
};
use codearchitect::tui::view::View;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod logging;

const THEME_ENV_VAR: &str = "CODEARCHITECT_THEME";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    let log_guard = logging::init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let arg = std::env::args().nth(1);
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));
    let config_path = resolve_config_path(
        &cwd,
        arg.as_deref(),
        env_value.as_deref(),
        exe_dir.as_deref(),
    );

    let schema = match load_schema(&config_path) {
        Ok(schema) => schema,
        Err(err) => {
            tracing::error!(path = %config_path.display(), error = %err, "config rejected");
            eprintln!("codearchitect: {err}");
            if let Some(guard) = &log_guard {
                eprintln!("codearchitect: log files in {}", guard.log_dir().display());
            }
            return ExitCode::FAILURE;
        }
    };

    let icon_variant = std::env::var(THEME_ENV_VAR)
        .ok()
        .and_then(|value| IconVariant::parse(&value))
        .unwrap_or_default();

    match run(Workbench::new(schema, icon_variant)) {
        Ok(Some(signal)) => ExitCode::from(signal.exit_code() as u8),
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "terminal failure");
            eprintln!("codearchitect: {err}");
            if let Some(guard) = &log_guard {
                eprintln!("codearchitect: log files in {}", guard.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(mut workbench: Workbench) -> io::Result<Option<TerminationSignal>> {
    let guard = TerminalGuard::new(InputModes::default())?;
    guard.restorer().install_panic_hook();
    let (signal_tx, signal_rx) = mpsc::channel();
    let _signals = install_termination_signals(guard.restorer(), signal_tx)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }

        terminal.draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
            if let Some(position) = workbench.cursor_position() {
                frame.set_cursor_position(position);
            }
        })?;

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event = into_input_event(crossterm::event::read()?);
        if workbench.handle_input(&event).is_quit() {
            tracing::info!("quit requested");
            return Ok(None);
        }
    }
}
