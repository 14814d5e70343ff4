pub mod id;
pub mod store;
pub mod validation;
