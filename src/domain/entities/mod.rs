//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1 로 대응되는 엔티티들입니다.
//!
//! ```text
//! entities/
//! ├── users/    ← User, Role, GuideProfile   (users 컬렉션)
//! ├── tours/    ← Tour, TourFields, GeoPoint (tours 컬렉션)
//! └── reviews/  ← Review                     (reviews 컬렉션, 읽기 전용)
//! ```
//!
//! 모든 엔티티는 camelCase 필드 이름으로 저장되며 `_id` 는 `Option<ObjectId>` 로
//! 매핑됩니다. 삽입 전에는 `None` 이고 저장소가 생성된 ID 를 채웁니다.

pub mod reviews;
pub mod tours;
pub mod users;

pub use reviews::Review;
pub use tours::{Difficulty, GeoKind, GeoPoint, Tour, TourFields};
pub use users::{GuideProfile, Role, User};
