pub mod sanitize;
pub mod value;
