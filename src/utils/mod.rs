pub mod domains;
pub mod error;
pub mod logger;
pub mod validation;
