pub mod archive;
pub mod batch;
pub mod list_state;
pub mod paged;
pub mod pagination;
pub mod resource;
pub mod temp_images;
