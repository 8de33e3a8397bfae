//! # 투어 리포지토리 구현
//!
//! `tours` 컬렉션에 대한 MongoDB 구현입니다.
//!
//! ## 인덱스
//! - `name_unique`: 투어 이름 중복 차단

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};

use super::TourStore;
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::tours::Tour,
};

const COLLECTION_NAME: &str = "tours";
const DUPLICATE_TOUR: &str = "같은 이름의 투어가 이미 존재합니다";

#[derive(Clone)]
pub struct TourRepository {
    db: Database,
}

impl TourRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Tour> {
        self.db.get_database().collection::<Tour>(COLLECTION_NAME)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("name_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TourStore for TourRepository {
    async fn insert(&self, mut tour: Tour) -> AppResult<Tour> {
        let result = self
            .collection()
            .insert_one(&tour)
            .await
            .map_err(|e| AppError::from_write_error(e, DUPLICATE_TOUR))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 투어 ID 를 확인할 수 없습니다".to_string())
        })?;

        tour.id = Some(id);
        Ok(tour)
    }

    async fn find_all(&self) -> AppResult<Vec<Tour>> {
        self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Tour>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn replace(&self, tour: &Tour) -> AppResult<()> {
        let id = tour.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 투어는 교체할 수 없습니다".to_string())
        })?;

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, tour)
            .await
            .map_err(|e| AppError::from_write_error(e, DUPLICATE_TOUR))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("투어를 찾을 수 없습니다: {}", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
