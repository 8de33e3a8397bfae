pub mod auth_request;
pub mod signup_request;

pub use auth_request::{LoginRequest, PasswordChange, UpdatePasswordRequest};
pub use signup_request::{NewUser, SignUpRequest};
