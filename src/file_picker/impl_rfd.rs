use crate::file_picker::interface::FilePicker;
use crate::library::logger::interface::Logger;
use crate::selected_file::SelectedFile;
use std::sync::Arc;

// Only a hint for the dialog. Whatever the user ends up choosing is accepted.
const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "tif", "tiff", "dcm", "dicom", "bmp"];

pub struct FilePickerRfd {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FilePickerRfd {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_picker"),
        }
    }
}

impl FilePicker for FilePickerRfd {
    fn pick(&self) -> Result<Option<SelectedFile>, Box<dyn std::error::Error + Send + Sync>> {
        let path = rfd::FileDialog::new()
            .set_title("Select Image")
            .add_filter("Medical images", &IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();

        let Some(path) = path else {
            self.logger.info("Dialog dismissed")?;
            return Ok(None);
        };

        let file = SelectedFile::from_path(&path)?;
        self.logger
            .info(&format!("Picked {} ({})", file.name, file.size_label()))?;
        Ok(Some(file))
    }
}
