pub mod feature_panel;
pub mod prediction_panel;
pub mod preview;
pub mod upload_widget;
