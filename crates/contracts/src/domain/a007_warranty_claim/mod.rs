//! Warranty claims: wire format, proof-of-purchase and product
//! representation state machines, status updates and gallery helpers.

pub mod aggregate;
pub mod gallery;
pub mod products;
pub mod proof;
pub mod query;
pub mod status;
