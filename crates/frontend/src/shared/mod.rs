pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod download;
pub mod files;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod resource_api;
pub mod resource_list;
