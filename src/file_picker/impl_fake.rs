use crate::file_picker::interface::FilePicker;
use crate::selected_file::SelectedFile;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands back a preset file every time and counts how often it was opened.
pub struct FilePickerFake {
    file: Option<SelectedFile>,
    opened: AtomicUsize,
}

impl FilePickerFake {
    pub fn new(file: Option<SelectedFile>) -> Self {
        Self {
            file,
            opened: AtomicUsize::new(0),
        }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl FilePicker for FilePickerFake {
    fn pick(&self) -> Result<Option<SelectedFile>, Box<dyn std::error::Error + Send + Sync>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(self.file.clone())
    }
}
