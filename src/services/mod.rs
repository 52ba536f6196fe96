pub mod notification_service;
pub mod entitlements;
pub mod form_store;
pub mod registration;
