//! Sponsor Management

pub mod sponsors_page;

pub use sponsors_page::SponsorsPage;
