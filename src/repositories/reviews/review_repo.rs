use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};

use super::ReviewStore;
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::reviews::Review,
};

const COLLECTION_NAME: &str = "reviews";

/// `reviews` 컬렉션 읽기 전용 리포지토리
#[derive(Clone)]
pub struct ReviewRepository {
    db: Database,
}

impl ReviewRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Review> {
        self.db.get_database().collection::<Review>(COLLECTION_NAME)
    }

    /// 투어별 리뷰 조회용 `tour` 인덱스
    pub async fn create_indexes(&self) -> AppResult<()> {
        let tour_index = IndexModel::builder()
            .keys(doc! { "tour": 1 })
            .options(IndexOptions::builder().name("tour_lookup".to_string()).build())
            .build();

        self.collection()
            .create_index(tour_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn find_by_tour(&self, tour_id: &ObjectId) -> AppResult<Vec<Review>> {
        self.collection()
            .find(doc! { "tour": tour_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
