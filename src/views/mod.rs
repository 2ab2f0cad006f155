//! Catalog-derived list views.

pub(crate) mod closet;
pub(crate) mod history;
pub(crate) mod swipe;
pub(crate) mod wishlist;
