pub mod constants;
pub mod shared_case_game;
pub mod validation;
