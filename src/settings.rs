#[derive(Clone, Debug)]
pub struct Settings {
    pub app_id: String,
    pub title: String,
    pub window_size: [f32; 2],
    pub margin: f32,
    pub label_size: f32,
    pub increase_caption: String,
    pub decrease_caption: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_id: "org.gtk_rs.GTK4Counter".to_string(),
            title: "Counter App".to_string(),
            window_size: [300.0, 300.0],
            margin: 12.0,
            label_size: 24.0,
            increase_caption: "Increase".to_string(),
            decrease_caption: "Decrease".to_string(),
        }
    }
}

impl Settings {
    /// Title for the `index`th extra window; index 0 is the main window.
    pub fn window_title(&self, index: usize) -> String {
        if index == 0 {
            self.title.clone()
        } else {
            format!("{} #{}", self.title, index + 1)
        }
    }
}
