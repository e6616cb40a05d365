use relm4::prelude::*;
use slider::config;
use slider::gui::app::AppModel;
use slider::sys::runtime;

fn main() {
    env_logger::init();

    let (config, deck) = config::load_or_setup();
    log::info!("Loaded {} cards", deck.len());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.troia.slider");

    app.run::<AppModel>((config, deck, rx));
}
