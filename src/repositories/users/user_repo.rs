//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 구현입니다.
//!
//! ## 인덱스
//! - `email_unique`: 이메일 중복 가입을 저장소 수준에서 차단합니다.
//!
//! ## 비밀번호 projection
//! 기본 조회는 `{ "password": 0 }` projection 을 적용합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::IndexOptions,
};

use super::UserStore;
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::{GuideProfile, User},
};

const COLLECTION_NAME: &str = "users";

fn without_password() -> Document {
    doc! { "password": 0 }
}

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION_NAME)
    }

    /// 컬렉션 인덱스를 생성합니다. 애플리케이션 시작 시 한 번 호출합니다.
    ///
    /// 이미 중복 이메일이 저장되어 있으면 unique 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection::<User>()
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_one(&self, filter: Document, projection: Option<Document>) -> AppResult<Option<User>> {
        let collection = self.collection::<User>();
        let mut action = collection.find_one(filter);
        if let Some(projection) = projection {
            action = action.projection(projection);
        }

        action
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::from_write_error(e, "이미 사용 중인 이메일입니다"))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID 를 확인할 수 없습니다".to_string())
        })?;

        user.id = Some(id);
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.find_one(doc! { "_id": id }, Some(without_password())).await
    }

    async fn find_credentials_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { "email": email }, None).await
    }

    async fn find_credentials_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.find_one(doc! { "_id": id }, None).await
    }

    async fn update_password(
        &self,
        id: &ObjectId,
        password_hash: &str,
        changed_at: DateTime,
    ) -> AppResult<()> {
        let result = self
            .collection::<User>()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "password": password_hash, "passwordChangedAt": changed_at } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn find_guides(&self, ids: &[ObjectId]) -> AppResult<Vec<GuideProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection::<GuideProfile>()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .projection(doc! { "name": 1, "photo": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
