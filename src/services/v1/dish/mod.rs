pub mod delete_all;
pub mod index;
pub mod show;
pub mod store;
