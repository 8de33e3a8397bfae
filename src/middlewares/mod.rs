//! # Middlewares
//!
//! - [`AuthMiddleware`]: Bearer JWT 검증 후 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 주입

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
