use crate::selected_file::SelectedFile;

pub trait FilePicker {
    /// `Ok(None)` when the user dismisses the dialog.
    fn pick(&self) -> Result<Option<SelectedFile>, Box<dyn std::error::Error + Send + Sync>>;
}
