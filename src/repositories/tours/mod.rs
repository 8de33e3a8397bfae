//! 투어 데이터 액세스 계층

pub mod tour_repo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::tours::Tour;

pub use tour_repo::TourRepository;

/// 투어 저장소 포트
///
/// 저장소는 검증이나 슬러그 계산을 하지 않습니다. 호출 전에 서비스가 끝내야 합니다.
#[async_trait]
pub trait TourStore: Send + Sync {
    /// 이름 또는 슬러그가 중복되면 `AppError::ConflictError`.
    async fn insert(&self, tour: Tour) -> AppResult<Tour>;

    async fn find_all(&self) -> AppResult<Vec<Tour>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Tour>>;

    /// 문서 전체를 교체합니다. 대상이 없으면 `AppError::NotFound`.
    async fn replace(&self, tour: &Tour) -> AppResult<()>;

    /// 삭제 여부를 반환합니다.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}
