use anyhow::Context as _;
use config::Config;
use daw::Daw;
use iced::application;

mod about;
mod config;
mod daw;
mod pane;
mod preferences;
mod theme;
mod time_signature;
mod title_bar;
mod trace;
mod track_panel;
mod widget;
mod zoom_controls;

fn main() -> anyhow::Result<()> {
    trace::setup();

    let config = Config::read();
    log::debug!("starting with {config:?}");

    application(Daw::title, Daw::update, Daw::view)
        .subscription(Daw::subscription)
        .theme(Daw::theme)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .exit_on_close_request(false)
        .antialiasing(true)
        .run_with(move || Daw::create(config))
        .context("the window failed to run")
}
