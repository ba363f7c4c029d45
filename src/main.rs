#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use counterapp::frame::custom_window_frame;
use counterapp::settings::Settings;
use counterapp::window::CounterWindow;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let app_name = settings.title.clone();
    let options = eframe::NativeOptions {
        viewport: viewport_builder(&settings, settings.title.clone())
            .with_app_id(settings.app_id.clone()),
        ..Default::default()
    };
    log::info!("starting {} ({})", settings.title, settings.app_id);

    eframe::run_native(
        &app_name,
        options,
        Box::new(|_cc| Ok(Box::new(CounterApp::new(settings)))),
    )
}

fn viewport_builder(settings: &Settings, title: String) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title(title)
        .with_decorations(false)
        .with_inner_size(settings.window_size)
        .with_transparent(true)
}

struct CounterApp {
    settings: Settings,
    main_window: CounterWindow,
    extra_windows: Vec<CounterWindow>,
    next_id: usize,
}

impl CounterApp {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            main_window: CounterWindow::new(0),
            extra_windows: Vec::new(),
            next_id: 1,
        }
    }

    fn open_window(&mut self) {
        let window = CounterWindow::new(self.next_id);
        self.next_id += 1;
        log::info!("opened counter window {}", window.id());
        self.extra_windows.push(window);
    }

    fn show_extra_windows(&mut self, ctx: &egui::Context) {
        let settings = &self.settings;
        let mut requested = 0;

        self.extra_windows.retain_mut(|window| {
            let id = window.id();
            let title = settings.window_title(id);
            let mut open = true;

            ctx.show_viewport_immediate(
                egui::ViewportId::from_hash_of(("counter_window", id)),
                viewport_builder(settings, title.clone()),
                |ctx, _class| {
                    let response = custom_window_frame(ctx, &title, |ui| window.ui(ui, settings));
                    if response.new_window {
                        requested += 1;
                    }
                    if ctx.input(|i| i.viewport().close_requested()) {
                        open = false;
                    }
                },
            );

            if !open {
                log::info!("closed counter window {}", id);
            }
            open
        });

        for _ in 0..requested {
            self.open_window();
        }
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let title = self.settings.window_title(self.main_window.id());
        let settings = &self.settings;
        let main_window = &mut self.main_window;

        let response = custom_window_frame(ctx, &title, |ui| main_window.ui(ui, settings));
        if response.new_window {
            self.open_window();
        }

        self.show_extra_windows(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_windows_get_fresh_counters() {
        let mut app = CounterApp::new(Settings::default());
        app.main_window.on_increase_clicked();
        app.open_window();
        app.open_window();

        assert_eq!(app.extra_windows.len(), 2);
        assert_eq!(app.extra_windows[0].id(), 1);
        assert_eq!(app.extra_windows[1].id(), 2);
        assert!(app.extra_windows.iter().all(|w| w.label() == "0"));

        app.extra_windows[1].on_decrease_clicked();
        assert_eq!(app.main_window.label(), "1");
        assert_eq!(app.extra_windows[0].label(), "0");
        assert_eq!(app.extra_windows[1].label(), "-1");
    }
}
