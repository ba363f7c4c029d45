use iced::widget::{Column, button, column, text};
use iced::{Center, Fill};

use crate::counter::{Action, Counter};
use crate::settings::Settings;

/// Declarative counter window: `view` describes the widget tree once and
/// binds each button to an [`Action`]; iced routes presses back into `update`.
#[derive(Debug, Clone)]
pub struct TemplateWindow {
    settings: Settings,
    counter: Counter,
    label: String,
}

impl Default for TemplateWindow {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl TemplateWindow {
    pub fn new(settings: Settings) -> Self {
        let counter = Counter::new();
        Self {
            settings,
            label: counter.current_display(),
            counter,
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn title(&self) -> String {
        self.settings.title.clone()
    }

    pub fn update(&mut self, action: Action) {
        let value = self.counter.apply(action);
        self.label = self.counter.current_display();
        log::debug!("{:?} -> {}", action, value);
    }

    pub fn view(&self) -> Column<'_, Action> {
        let margin = self.settings.margin;

        column![
            text(&self.label).size(self.settings.label_size),
            button(text(&self.settings.increase_caption).width(Fill).align_x(Center))
                .on_press(Action::Increment)
                .width(Fill),
            button(text(&self.settings.decrease_caption).width(Fill).align_x(Center))
                .on_press(Action::Decrement)
                .width(Fill),
        ]
            .padding(margin)
            .spacing(margin)
            .align_x(Center)
    }
}
