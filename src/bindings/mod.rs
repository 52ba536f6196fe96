pub mod attendees;
pub mod comms;
pub mod core;
pub mod events;
pub mod forms;
pub mod sponsors;
pub mod viewer;

#[cfg(test)]
mod tests;

pub use attendees::*;
pub use comms::*;
pub use core::*;
pub use events::*;
pub use forms::*;
pub use sponsors::*;
pub use viewer::*;
