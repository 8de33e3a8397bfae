//! 사용자 데이터 액세스 계층
//!
//! 서비스는 [`UserStore`] trait 에만 의존합니다. 운영 환경에서는 MongoDB 구현인
//! [`UserRepository`](user_repo::UserRepository) 가 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(database.clone()));
//! let user = users.find_credentials_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

use async_trait::async_trait;
use mongodb::bson::{DateTime, oid::ObjectId};

use crate::core::errors::AppResult;
use crate::domain::entities::users::{GuideProfile, User};

pub use user_repo::UserRepository;

/// 사용자 저장소 포트
///
/// 기본 조회(`find_by_id`)는 비밀번호 해시를 포함하지 않습니다.
/// 해시가 필요한 경우에만 `find_credentials_*` 를 사용합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자를 저장하고 ID 가 채워진 사용자를 반환합니다.
    ///
    /// 이메일이 중복되면 `AppError::ConflictError`.
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_credentials_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_credentials_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 비밀번호 해시와 변경 시각을 함께 갱신합니다. 대상이 없으면 `AppError::NotFound`.
    async fn update_password(
        &self,
        id: &ObjectId,
        password_hash: &str,
        changed_at: DateTime,
    ) -> AppResult<()>;

    /// 가이드 참조 채우기용 `name`, `photo` projection. 존재하지 않는 ID 는 결과에서 빠집니다.
    async fn find_guides(&self, ids: &[ObjectId]) -> AppResult<Vec<GuideProfile>>;
}
