use eframe::epaint::Color32;
use egui::ViewportCommand;
use egui::{CentralPanel, UiBuilder};

const TITLE_BAR_HEIGHT: f32 = 20.0;

/// What the user asked for through the title bar during this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TitleBarResponse {
    pub new_window: bool,
}

/// Draws the undecorated window chrome and lays `add_contents` out below the title bar.
pub fn custom_window_frame(
    ctx: &egui::Context,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> TitleBarResponse {
    let panel_frame = egui::Frame::new()
        .fill(ctx.style().visuals.window_fill())
        .corner_radius(10)
        .stroke(ctx.style().visuals.widgets.noninteractive.fg_stroke)
        .outer_margin(1);

    CentralPanel::default()
        .frame(panel_frame)
        .show(ctx, |ui| {
            let app_rect = ui.max_rect();

            let title_bar_rect = {
                let mut r = app_rect;
                r.max.y = r.min.y + TITLE_BAR_HEIGHT;
                r
            };
            let response = title_bar_ui(ui, title_bar_rect, title);

            let content_rect = {
                let mut r = app_rect;
                r.min.y = title_bar_rect.max.y;
                r
            }
                .shrink(4.0);

            let mut content_ui = ui.new_child(UiBuilder::new().max_rect(content_rect));
            add_contents(&mut content_ui);
            response
        })
        .inner
}

fn title_bar_ui(ui: &mut egui::Ui, title_bar_rect: eframe::epaint::Rect, title: &str) -> TitleBarResponse {
    use egui::{Align2, FontId, Id, PointerButton, Sense};

    let response = ui.interact(
        title_bar_rect,
        Id::new("title_bar"),
        Sense::click_and_drag(),
    );
    ui.painter().text(
        title_bar_rect.center(),
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(16.0),
        ui.style().visuals.text_color(),
    );

    if response.drag_started_by(PointerButton::Primary) {
        ui.ctx().send_viewport_cmd(ViewportCommand::StartDrag);
    }

    ui.scope_builder(
        UiBuilder::new()
            .max_rect(title_bar_rect)
            .layout(egui::Layout::right_to_left(egui::Align::Center)),
        |ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.visuals_mut().button_frame = false;
            ui.add_space(8.0);
            window_buttons(ui)
        },
    )
        .inner
}

fn window_buttons(ui: &mut egui::Ui) -> TitleBarResponse {
    use egui::{Button, RichText};

    let size = 14.0;
    if ui.add(Button::new(RichText::new("❌").size(size))).on_hover_text("Close").clicked() {
        ui.ctx().send_viewport_cmd(ViewportCommand::Close);
    }
    if ui.add(Button::new(RichText::new("➖").size(size))).on_hover_text("Minimize").clicked() {
        ui.ctx().send_viewport_cmd(ViewportCommand::Minimized(true));
    }
    let new_window = ui
        .add(Button::new(RichText::new("➕").size(size).color(Color32::from_rgb(0, 200, 0))))
        .on_hover_text("New counter window")
        .clicked();

    TitleBarResponse { new_window }
}
