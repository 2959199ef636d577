//! Product form. Split like the other editors: `view_model.rs` owns state
//! and commands, the views only bind to it.

mod images;
mod variants;
mod view;
mod view_model;

pub use view::ProductDetails;
