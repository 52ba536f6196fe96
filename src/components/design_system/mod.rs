//! Design System Components
//!
//! A collection of reusable, theme-aware UI components.

mod button;
mod input;
mod textarea;
mod badge;
mod select;
mod modal;
mod loading;
mod markdown;
mod toast;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use textarea::TextArea;
pub use badge::{Badge, BadgeVariant};
pub use select::Select;
pub use modal::Modal;
pub use loading::LoadingSpinner;
pub use markdown::Markdown;
pub use toast::{Toast, ToastContainer};
