//! Wire contracts and client-side rules shared by the admin console.
//!
//! Everything in this crate is platform neutral: it compiles for the wasm
//! frontend and natively for unit tests.

pub mod domain;
pub mod shared;
pub mod system;
