pub mod aggregate;
pub mod slug;
