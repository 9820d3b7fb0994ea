pub mod dish;
pub mod restaurant;
pub mod token;
