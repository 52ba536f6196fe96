pub mod design_system;
pub mod events;
pub mod form_builder;
pub mod forms;
pub mod landing;
pub mod registration;
pub mod sponsors;
