pub mod review_repo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::reviews::Review;

pub use review_repo::ReviewRepository;

/// 리뷰 저장소 포트 (읽기 전용)
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// `tour` 필드가 주어진 투어 ID 인 리뷰 목록
    async fn find_by_tour(&self, tour_id: &ObjectId) -> AppResult<Vec<Review>>;
}
