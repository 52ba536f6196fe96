//! Events Dashboard

pub mod design_modal;
pub mod events_page;

pub use design_modal::DesignModal;
pub use events_page::EventsPage;
