mod common;
mod config;
mod feed;
mod ui;

use clap::Parser;
use common::SystemClock;
use config::AppConfig;
use dotenvy::dotenv;
use feed::{ActivityFeed, ActivityGenerator, RngSource};
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "live_chat",
    version,
    about = "Single-room chat with a simulated activity feed"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Display name for messages you send
    #[arg(long)]
    username: Option<String>,
    /// Seed the activity feed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    match cli.username {
        Some(username) if !username.trim().is_empty() => app_config.username = username,
        Some(_) => log::warn!("Ignoring blank --username"),
        None => {}
    }
    if cli.seed.is_some() {
        app_config.seed = cli.seed;
    }

    run_chat(app_config).await
}

async fn run_chat(app_config: AppConfig) -> Result<(), eframe::Error> {
    // Feed -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let generator =
        ActivityGenerator::from_config(&app_config, RngSource::from_optional_seed(app_config.seed));
    let feed = ActivityFeed::new(generator, SystemClock, app_config.tick_interval(), event_tx).spawn();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Live Chat",
        options,
        Box::new(move |cc| {
            log::info!(
                "Chat started as {} with {} participants",
                app_config.username,
                app_config.participants.len()
            );

            Ok(Box::new(ChatApp::new(
                cc,
                &app_config,
                event_rx,
                feed,
                Box::new(SystemClock),
            )))
        }),
    )
}
