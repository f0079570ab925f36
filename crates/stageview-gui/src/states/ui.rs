use std::path::PathBuf;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Path of the image currently being decoded (None = idle).
    pub loading: Option<PathBuf>,

    /// Last load failure, shown on the stage while no image is displayed.
    pub load_error: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.loading.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
