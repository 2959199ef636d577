//! Brand form (MVVM): `model.rs` talks to the API, `view_model.rs` holds the
//! form state and the save command, `view.rs` renders.

mod model;
mod view;
mod view_model;

pub use view::BrandDetails;
pub use view_model::BrandDetailsViewModel;
