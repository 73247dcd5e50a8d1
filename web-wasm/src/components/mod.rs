//! UIコンポーネント

pub mod header;
pub mod upload_area;
pub mod search_bar;
pub mod result_panel;
pub mod confidence_bar;
pub mod category_panel;
pub mod toast;
