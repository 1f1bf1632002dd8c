pub mod fields;
pub mod mood;
pub mod sanitize;
