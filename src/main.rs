use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use momentum::{
    handlers, logging,
    prefs::Prefs,
    services::{worker, ApiGateway, ApiRequest, ApiResponse, HttpTransport},
    state::TICK_MS,
    ui, App,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{error::Error, io, path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Terminal dashboard for the JSONPlaceholder API
#[derive(Parser, Debug)]
#[command(name = "momentum", version, about)]
struct Args {
    /// API root, overrides the preferences file
    #[arg(long)]
    base_url: Option<String>,

    /// Preferences file [default: $HOME/.momentum_prefs.json]
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Log file [default: $HOME/.momentum/momentum.log]
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Application events
enum AppEvent {
    Terminal(CEvent),
    Api(ApiResponse),
    Tick,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let prefs_path = args.prefs.clone().unwrap_or_else(Prefs::config_path);
    let mut prefs = Prefs::load(&prefs_path);
    if let Some(base_url) = args.base_url {
        prefs.base_url = base_url;
    }
    let log_path = args
        .log_file
        .or_else(|| prefs.log_file.clone())
        .unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("logging disabled: {}", e);
    }
    info!(base_url = %prefs.base_url, prefs = %prefs_path.display(), "starting");

    let menu = prefs.menu_items()?;

    // Create event channels
    let (tx_to_worker, rx_from_ui) = mpsc::unbounded_channel::<ApiRequest>();
    let (tx_to_ui, mut rx_from_worker) = mpsc::unbounded_channel::<ApiResponse>();

    let gateway = ApiGateway::new(prefs.base_url.clone(), Arc::new(HttpTransport::new()));
    tokio::spawn(worker::run(gateway, rx_from_ui, tx_to_ui));

    let mut app = App::new(tx_to_worker, prefs.app_config(), menu);

    // Enable terminal raw mode
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event loop channels
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal event handler
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;

            // Check for terminal events (non-blocking)
            while event::poll(Duration::from_millis(0)).unwrap_or(false) {
                match event::read() {
                    Ok(event) => {
                        if event_tx_clone.send(AppEvent::Terminal(event)).is_err() {
                            return;
                        }
                    }
                    Err(_) => break,
                }
            }

            if event_tx_clone.send(AppEvent::Tick).is_err() {
                return;
            }
        }
    });

    // Forward worker responses
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        while let Some(msg) = rx_from_worker.recv().await {
            if event_tx_clone.send(AppEvent::Api(msg)).is_err() {
                break;
            }
        }
    });

    let result = run_loop(&mut app, &mut terminal, &mut event_rx).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "ui loop failed");
    }
    info!("bye");
    result
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), Box<dyn Error>> {
    while !app.ui.should_quit {
        terminal.draw(|f| ui::ui(f, app))?;

        match events.recv().await {
            Some(AppEvent::Terminal(CEvent::Key(key))) => handlers::handle_key_event(key, app),
            Some(AppEvent::Terminal(_)) => {}
            Some(AppEvent::Api(response)) => app.handle_api_response(response),
            Some(AppEvent::Tick) => app.on_tick(),
            None => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["momentum"]).unwrap();
        assert!(args.base_url.is_none());
        assert!(args.prefs.is_none());
    }

    #[test]
    fn base_url_flag_is_read() {
        let args = Args::try_parse_from(["momentum", "--base-url", "http://localhost:3000"]).unwrap();
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["momentum", "--nope"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
