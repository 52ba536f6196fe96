//! Forms Dashboard Components
//!
//! The per-event forms surface: card grid, create dialog, and the accent
//! styling shared with the builder.

pub mod create_form_modal;
pub mod form_card;
pub mod forms_page;

pub use create_form_modal::CreateFormModal;
pub use form_card::{color_for, FormCard};
pub use forms_page::FormsPage;
