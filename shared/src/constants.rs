pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const INVALID_PASSWORD_ERROR: &str = "Password must be at least 8 characters long and contain uppercase, lowercase, number, and special character";
pub const INVALID_PSEUDO_ERROR: &str = "Pseudo must be 3-24 characters (letters, digits, underscore) without offensive language";
pub const NETWORK_ERROR: &str = "Network error. Please try again";

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_PSEUDO_LENGTH: usize = 3;
pub const MAX_PSEUDO_LENGTH: usize = 24;
