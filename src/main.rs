#![warn(
    clippy::all,
    clippy::nursery,
    clippy::cargo,
)]
use clap::Parser;

use meeting_dashboard::app::{App, Message};
use meeting_dashboard::banner::stock_banners;
use meeting_dashboard::calendar::{ConfigEvents, EventSource, Manager, SampleEvents};
use meeting_dashboard::{config, render};

mod cli;

fn main() {
    env_logger::builder().init();

    let cli = cli::Cli::parse();
    let config = match cli.config {
        Some(path) => config::init(path).expect("Could not load the configuration file"),
        None => config::Config::default(),
    };

    let source: Box<dyn EventSource> = if config.events.is_empty() {
        Box::new(SampleEvents)
    } else {
        Box::new(ConfigEvents::new(
            config.events.into_iter().map(Into::into).collect(),
        ))
    };

    let manager = Manager::new(source.as_ref());
    log::info!("loaded {} events", manager.events().len());

    let banners = if config.banners.is_empty() {
        stock_banners()
    } else {
        config.banners
    };

    let today = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut app = App::new(manager, banners, config.calendar, today);

    if let Some(date) = cli.select {
        app.update(Message::SelectDate(date));
    }

    let output = render::render_dashboard(&app).expect("displayed month is always in range");
    print!("{output}");
}
