//! Reusable UI components shared across pages.

pub mod banners;
pub mod navbar;
pub mod sweet_card;
