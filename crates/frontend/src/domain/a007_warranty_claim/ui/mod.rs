pub mod details;
pub mod edit;
pub mod list;
pub mod stats;
pub mod status;
