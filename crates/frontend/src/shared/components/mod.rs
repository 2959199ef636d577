pub mod banner;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;

pub use banner::{ErrorBanner, SuccessBanner};
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use status_badge::{ActiveBadge, StatusBadge};
