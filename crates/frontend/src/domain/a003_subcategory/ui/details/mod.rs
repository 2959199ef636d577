mod images;
mod model;
mod view;
mod view_model;

pub use view::SubcategoryDetails;
