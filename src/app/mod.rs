mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::guide_loader::GuidePage;
use crate::theme::Theme;
use iced::{Size, window};

/// Helper to launch the app with the loaded guide library.
pub fn run_app(library: Vec<GuidePage>, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Guide Navigator", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| iced::Theme::from(Theme::from(app.config.theme)))
        .run_with(move || App::bootstrap(library, config))
}
