pub mod entries;
pub mod health;
pub mod not_found;
pub mod pages;
