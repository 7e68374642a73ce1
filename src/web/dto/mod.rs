pub mod activity;
pub mod catalog;
pub mod pagination;
pub mod users;
