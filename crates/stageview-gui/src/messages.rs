use std::path::PathBuf;
use std::time::Duration;

use stageview_core::io::image_io::ImageHandle;

/// Commands sent from UI thread to the loader thread.
pub enum WorkerCommand {
    /// Decode an image file for display.
    LoadImage { path: PathBuf },
}

/// Results sent from the loader thread back to UI thread.
pub enum WorkerResult {
    /// Path chosen in the open dialog; the UI thread starts the load.
    FilePicked {
        path: PathBuf,
    },
    ImageLoaded {
        path: PathBuf,
        image: ImageHandle,
        elapsed: Duration,
    },
    Error {
        message: String,
    },
}
