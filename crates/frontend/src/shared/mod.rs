pub mod api_utils;
pub mod browser;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod session_bridge;
