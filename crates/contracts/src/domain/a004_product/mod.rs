pub mod aggregate;
pub mod specifications;
