//! 테스트용 인메모리 저장소
//!
//! MongoDB 구현과 같은 관찰 가능한 동작을 따릅니다.
//! - unique 제약 위반은 `ConflictError`
//! - 기본 사용자 조회는 비밀번호 해시를 제외
//! - 조회 순서는 삽입 순서

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{DateTime, oid::ObjectId};

use super::{ReviewStore, TourStore, UserStore};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{GuideProfile, Review, Tour, User};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self
            .find_credentials_by_id(id)
            .await?
            .map(User::without_password))
    }

    async fn find_credentials_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_credentials_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id.as_ref() == Some(id)).cloned())
    }

    async fn update_password(
        &self,
        id: &ObjectId,
        password_hash: &str,
        changed_at: DateTime,
    ) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|user| user.id.as_ref() == Some(id))
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        user.password = Some(password_hash.to_string());
        user.password_changed_at = Some(changed_at);
        Ok(())
    }

    async fn find_guides(&self, ids: &[ObjectId]) -> AppResult<Vec<GuideProfile>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|user| user.id.is_some_and(|id| ids.contains(&id)))
            .filter_map(User::guide_profile)
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryTourStore {
    tours: Mutex<Vec<Tour>>,
}

impl MemoryTourStore {
    fn check_unique(tours: &[Tour], candidate: &Tour) -> AppResult<()> {
        let clash = tours
            .iter()
            .any(|existing| existing.id != candidate.id && existing.name == candidate.name);

        if clash {
            return Err(AppError::ConflictError(
                "같은 이름의 투어가 이미 존재합니다".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TourStore for MemoryTourStore {
    async fn insert(&self, mut tour: Tour) -> AppResult<Tour> {
        let mut tours = self.tours.lock().unwrap();
        Self::check_unique(&tours, &tour)?;

        tour.id = Some(ObjectId::new());
        tours.push(tour.clone());
        Ok(tour)
    }

    async fn find_all(&self) -> AppResult<Vec<Tour>> {
        Ok(self.tours.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Tour>> {
        let tours = self.tours.lock().unwrap();
        Ok(tours.iter().find(|tour| tour.id.as_ref() == Some(id)).cloned())
    }

    async fn replace(&self, tour: &Tour) -> AppResult<()> {
        let mut tours = self.tours.lock().unwrap();
        Self::check_unique(&tours, tour)?;

        let slot = tours
            .iter_mut()
            .find(|existing| existing.id.is_some() && existing.id == tour.id)
            .ok_or_else(|| AppError::NotFound("투어를 찾을 수 없습니다".to_string()))?;

        *slot = tour.clone();
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut tours = self.tours.lock().unwrap();
        let before = tours.len();
        tours.retain(|tour| tour.id.as_ref() != Some(id));
        Ok(tours.len() != before)
    }
}

#[derive(Default)]
pub struct MemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
}

impl MemoryReviewStore {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Mutex::new(reviews),
        }
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn find_by_tour(&self, tour_id: &ObjectId) -> AppResult<Vec<Review>> {
        let reviews = self.reviews.lock().unwrap();
        Ok(reviews
            .iter()
            .filter(|review| &review.tour == tour_id)
            .cloned()
            .collect())
    }
}
