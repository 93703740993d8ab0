use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::info;

use family_calendar::app::App;
use family_calendar::calendar::{EventsApi, HttpClient};
use family_calendar::cli::Cli;
use family_calendar::config::Config;
use family_calendar::{input, logging, theme, tui, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    logging::init(&config.log_path())?;
    theme::init(&config.theme);

    let client = HttpClient::new(&config.server).wrap_err("building HTTP client")?;
    info!(server = %client.base_url(), "starting");

    if cli.check {
        let status = client
            .health()
            .await
            .wrap_err_with(|| format!("{} is not reachable", client.base_url()))?;
        println!("{}: {status}", client.base_url());
        return Ok(());
    }

    eprintln!("Connecting to {}...", client.base_url());
    let mut app = App::new(client, &config);
    app.start().await;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app).await;
    tui::restore()?;
    info!("bye");
    result
}

async fn run<A: EventsApi>(terminal: &mut tui::Tui, app: &mut App<A>) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(key) = tui::next_key_event(Duration::from_millis(100))? {
            input::handle_key(app, key).await;
        }
        app.tick(Instant::now());
    }

    Ok(())
}
