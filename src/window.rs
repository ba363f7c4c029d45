use egui::RichText;

use crate::counter::{Action, Counter};
use crate::settings::Settings;

/// One counter window: the counter it owns and the label bound to it.
///
/// The label text is rewritten by the click handlers themselves, so it is
/// never behind the counter once a handler has returned.
#[derive(Debug, Clone)]
pub struct CounterWindow {
    id: usize,
    counter: Counter,
    label: String,
}

impl CounterWindow {
    pub fn new(id: usize) -> Self {
        let counter = Counter::new();
        Self {
            id,
            label: counter.current_display(),
            counter,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn on_increase_clicked(&mut self) {
        self.handle(Action::Increment);
    }

    pub fn on_decrease_clicked(&mut self) {
        self.handle(Action::Decrement);
    }

    fn handle(&mut self, action: Action) {
        let value = self.counter.apply(action);
        self.label = self.counter.current_display();
        log::debug!("window {}: {:?} -> {}", self.id, action, value);
    }

    /// Label above an "Increase" and a "Decrease" button, each with the configured margin.
    pub fn ui(&mut self, ui: &mut egui::Ui, settings: &Settings) {
        let margin = settings.margin;
        let button_size = [ui.available_width() - 2.0 * margin, 28.0];

        ui.vertical_centered(|ui| {
            ui.add_space(margin);
            ui.label(RichText::new(&self.label).size(settings.label_size));
            ui.add_space(margin);

            if ui.add_sized(button_size, egui::Button::new(&settings.increase_caption)).clicked() {
                self.on_increase_clicked();
                ui.ctx().request_repaint();
            }
            ui.add_space(margin);

            if ui.add_sized(button_size, egui::Button::new(&settings.decrease_caption)).clicked() {
                self.on_decrease_clicked();
                ui.ctx().request_repaint();
            }
            ui.add_space(margin);
        });
    }
}
