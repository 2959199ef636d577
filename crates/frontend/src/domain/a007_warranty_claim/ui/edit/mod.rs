//! Full claim editor: customer, proof of purchase, products and status
//! notes. Saving issues `PUT /warrantyclaims/:id` and then, when a proof
//! file is pending, `POST /warrantyclaims/:id/upload-proof`.

mod products;
mod view;
mod view_model;

pub use view::ClaimEditForm;
