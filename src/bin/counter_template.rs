#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use counterapp::settings::Settings;
use counterapp::template::TemplateWindow;
use iced::{Size, Task};

pub fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let [width, height] = settings.window_size;
    log::info!("starting {} ({})", settings.title, settings.app_id);

    iced::application(TemplateWindow::title, TemplateWindow::update, TemplateWindow::view)
        .window_size(Size::new(width, height))
        .run_with(move || (TemplateWindow::new(settings), Task::none()))
}
