//! # Repositories
//!
//! 각 컬렉션마다 저장소 포트(trait)와 MongoDB 구현을 제공합니다.
//!
//! | 포트 | MongoDB 구현 | 컬렉션 |
//! |------|--------------|--------|
//! | [`UserStore`] | [`UserRepository`] | `users` |
//! | [`TourStore`] | [`TourRepository`] | `tours` |
//! | [`ReviewStore`] | [`ReviewRepository`] | `reviews` |
//!
//! 서비스는 `Arc<dyn ...Store>` 로 포트에만 의존하므로, 테스트에서는
//! `memory` 모듈의 인메모리 구현을 주입합니다.

pub mod reviews;
pub mod tours;
pub mod users;

#[cfg(test)]
pub mod memory;

pub use reviews::{ReviewRepository, ReviewStore};
pub use tours::{TourRepository, TourStore};
pub use users::{UserRepository, UserStore};
