pub mod contact;
pub mod model;
