pub mod dishes;
pub mod restaurants;
pub mod tokens;
pub mod users;
