use fraudshield::app::{App, AppMessage};
use fraudshield::cli::{parse_args, run_cli_command};
use fraudshield::config::DashboardConfig;
use fraudshield::feed::spawn_simulated_feed;
use fraudshield::terminal::{setup_panic_hook, TerminalManager};
use fraudshield::{input, logging, ui};

use color_eyre::Result;
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Informational flags exit here, before any initialization
    let options = run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;

    let mut config = match DashboardConfig::load(options.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            if e.is_file_error() {
                eprintln!("Check the file passed with --config, or remove it to use defaults.");
            }
            return Err(e.into());
        }
    };
    config.apply_cli(&options);

    // The dashboard still runs without a log file
    if let Err(e) = logging::init(config.log_path().as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!(
        version = fraudshield::cli::VERSION,
        mode = config.display_mode.name(),
        tab = config.initial_tab.id(),
        feed = config.feed.enabled,
        "starting dashboard"
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(&config);
    let mut manager = match TerminalManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let result = runtime.block_on(async {
        let feed = config
            .feed
            .enabled
            .then(|| spawn_simulated_feed(app.sender(), config.feed.clone()));

        let result = run_app(manager.terminal(), &mut app).await;

        if let Some(handle) = feed {
            handle.abort();
        }
        result
    });

    manager.restore()?;
    if let Err(ref e) = result {
        tracing::error!(error = %e, "dashboard exited with error");
    }
    tracing::info!("dashboard stopped");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = crossterm::event::EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => input::handle_event(app, event),
                    Some(Err(e)) => return Err(e.into()),
                    // Input stream closed
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
