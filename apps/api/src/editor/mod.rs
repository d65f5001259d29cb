//! The editing boundary: request handlers for every form, and the checks a
//! submission must pass before it reaches the store.

pub mod dates;
pub mod handlers;
pub mod validation;
