pub mod auth_state;
