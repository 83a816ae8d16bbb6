use anyhow::Result;
use charla::{api::ApiClient, app::App, chat_view, config, key_handlers, logging};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init()?;

    log::info!(
        "starting charla against {}",
        config::get_config().api_base_url
    );

    let api = Arc::new(ApiClient::from_config());
    let app = Arc::new(Mutex::new(App::new(api)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // One probe at startup; there is no polling or reconnect policy.
    tokio::spawn(chat_view::check_connection(app.clone()));

    let result = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        log::error!("fatal: {:?}", err);
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: Arc<Mutex<App>>) -> Result<()> {
    loop {
        {
            let mut guard = app.lock().await;
            guard.status_indicator.update_spinner();
            terminal.draw(|f| chat_view::draw_chat(f, &mut guard))?;
            // The first frame has been presented; timestamps may render
            // from here on.
            guard.mounted = true;
            if guard.should_quit {
                return Ok(());
            }
        }

        // Short poll so the spinner keeps animating while a request is
        // pending. The lock is never held across the poll.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let mut guard = app.lock().await;
                    key_handlers::handle_key(key, &mut guard, &app);
                }
                Event::Mouse(mouse) => {
                    let mut guard = app.lock().await;
                    key_handlers::handle_mouse(mouse, &mut guard, &app);
                }
                _ => {}
            }
        }
    }
}
