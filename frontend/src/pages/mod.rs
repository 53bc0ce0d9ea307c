pub mod auth;
pub mod case_opener;
pub mod home;
pub mod inventory;
