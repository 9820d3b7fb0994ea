pub mod dish;
pub mod restaurant;
