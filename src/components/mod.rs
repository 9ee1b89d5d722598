//! Reusable UI components.

pub mod result_card;
pub mod sidebar;
pub mod status_box;
pub mod upload_widget;
