//! Attendee Registration Flow
//!
//! Public three-step runtime: details form rendered from the persisted
//! schema, session picking, then the confirmation ticket.

pub mod confirmation_step;
pub mod details_step;
pub mod register_page;
pub mod sessions_step;

pub use confirmation_step::ConfirmationStep;
pub use details_step::DetailsStep;
pub use register_page::RegisterPage;
pub use sessions_step::SessionsStep;
