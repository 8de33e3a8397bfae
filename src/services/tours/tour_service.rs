//! # 투어 관리 서비스 구현
//!
//! 저장 파이프라인은 항상 같은 순서를 따릅니다.
//!
//! ```text
//! TourDraft ──▶ into_fields (검증) ──▶ Tour::new / Tour::apply ──▶ sync_slug ──▶ TourStore
//! ```
//!
//! 조회 결과는 가이드 참조를 `{id, name, photo}` 요약으로 채운 [`TourResponse`] 입니다.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::tours::{
            request::TourDraft,
            response::{GuideSummary, ReviewResponse, TourResponse},
        },
        entities::tours::Tour,
    },
    repositories::{ReviewStore, TourStore, UserStore},
};

pub struct TourService {
    tours: Arc<dyn TourStore>,
    users: Arc<dyn UserStore>,
    reviews: Arc<dyn ReviewStore>,
}

impl TourService {
    pub fn new(
        tours: Arc<dyn TourStore>,
        users: Arc<dyn UserStore>,
        reviews: Arc<dyn ReviewStore>,
    ) -> Self {
        Self {
            tours,
            users,
            reviews,
        }
    }

    /// 새 투어를 검증하고 슬러그를 계산해 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - 필드 검증 실패 (`priceDiscount >= price` 포함)
    /// * `AppError::ConflictError` - 같은 이름의 투어가 존재
    pub async fn create_tour(&self, draft: TourDraft) -> AppResult<TourResponse> {
        let fields = draft.into_fields()?;

        let mut tour = Tour::new(fields);
        tour.sync_slug();

        let created = self.tours.insert(tour).await?;
        log::info!("투어 생성: {} ({})", created.name, created.slug);

        self.populate_one(created).await
    }

    pub async fn list_tours(&self) -> AppResult<Vec<TourResponse>> {
        let tours = self.tours.find_all().await?;
        let guides = self.load_guides(tours.iter().flat_map(|tour| tour.guides.iter())).await?;

        Ok(tours
            .into_iter()
            .map(|tour| {
                let summaries = ordered_guides(&tour, &guides);
                TourResponse::new(tour, summaries)
            })
            .collect())
    }

    /// 가이드와 리뷰를 채운 단일 투어
    pub async fn get_tour(&self, id: &str) -> AppResult<TourResponse> {
        let tour_id = parse_tour_id(id)?;
        let tour = self
            .tours
            .find_by_id(&tour_id)
            .await?
            .ok_or_else(|| AppError::NotFound("투어를 찾을 수 없습니다".to_string()))?;

        let reviews = self.reviews.find_by_tour(&tour_id).await?;
        Ok(self.populate_one(tour).await?.with_reviews(reviews))
    }

    /// 부분 수정
    ///
    /// 저장된 투어에 요청 값을 덮어쓴 병합 결과 전체를 다시 검증합니다.
    /// 이름이 바뀌지 않아도 슬러그 단계가 실행됩니다.
    pub async fn update_tour(&self, id: &str, patch: TourDraft) -> AppResult<TourResponse> {
        let mut tour = self.find_existing(id).await?;

        let fields = TourDraft::from(&tour).overlay(patch).into_fields()?;
        tour.apply(fields);
        if tour.sync_slug() {
            log::debug!("투어 슬러그 갱신: {}", tour.slug);
        }

        self.tours.replace(&tour).await?;
        log::info!("투어 수정: {} ({})", tour.name, id);

        self.populate_one(tour).await
    }

    pub async fn delete_tour(&self, id: &str) -> AppResult<()> {
        let tour_id = parse_tour_id(id)?;

        if !self.tours.delete(&tour_id).await? {
            return Err(AppError::NotFound("투어를 찾을 수 없습니다".to_string()));
        }

        log::info!("투어 삭제: {}", id);
        Ok(())
    }

    /// 투어에 연결된 리뷰. 투어가 없으면 `AppError::NotFound`.
    pub async fn reviews_for_tour(&self, id: &str) -> AppResult<Vec<ReviewResponse>> {
        let tour_id = parse_tour_id(id)?;
        if self.tours.find_by_id(&tour_id).await?.is_none() {
            return Err(AppError::NotFound("투어를 찾을 수 없습니다".to_string()));
        }

        let reviews = self.reviews.find_by_tour(&tour_id).await?;
        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    async fn find_existing(&self, id: &str) -> AppResult<Tour> {
        let tour_id = parse_tour_id(id)?;
        self.tours
            .find_by_id(&tour_id)
            .await?
            .ok_or_else(|| AppError::NotFound("투어를 찾을 수 없습니다".to_string()))
    }

    async fn populate_one(&self, tour: Tour) -> AppResult<TourResponse> {
        let guides = self.load_guides(tour.guides.iter()).await?;
        let summaries = ordered_guides(&tour, &guides);
        Ok(TourResponse::new(tour, summaries))
    }

    async fn load_guides<'a>(
        &self,
        ids: impl Iterator<Item = &'a ObjectId>,
    ) -> AppResult<HashMap<ObjectId, GuideSummary>> {
        let mut ids: Vec<ObjectId> = ids.copied().collect();
        ids.sort();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let profiles = self.users.find_guides(&ids).await?;
        Ok(profiles
            .into_iter()
            .map(|profile| (profile.id, GuideSummary::from(profile)))
            .collect())
    }
}

/// 투어의 참조 순서를 유지합니다. 삭제된 사용자는 건너뜁니다.
fn ordered_guides(tour: &Tour, guides: &HashMap<ObjectId, GuideSummary>) -> Vec<GuideSummary> {
    tour.guides
        .iter()
        .filter_map(|id| guides.get(id).cloned())
        .collect()
}

fn parse_tour_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 투어 ID 입니다: {}", id)))
}
