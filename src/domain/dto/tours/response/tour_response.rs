use serde::Serialize;

use crate::domain::entities::reviews::Review;
use crate::domain::entities::tours::{Difficulty, GeoPoint, Tour};
use crate::domain::entities::users::GuideProfile;

/// 가이드 참조를 채운 결과 (`name`, `photo`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl From<GuideProfile> for GuideSummary {
    fn from(profile: GuideProfile) -> Self {
        Self {
            id: profile.id.to_hex(),
            name: profile.name,
            photo: profile.photo,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub tour: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.map(|id| id.to_hex()).unwrap_or_default(),
            review: review.review,
            rating: review.rating,
            tour: review.tour.to_hex(),
            user: review.user.map(|id| id.to_hex()),
            created_at: review.created_at.and_then(|at| at.try_to_rfc3339_string().ok()),
        }
    }
}

/// 투어 응답 DTO
///
/// `guides` 는 항상 채워진 요약 목록이고, `reviews` 는 단건 조회에서만 포함됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub duration: f64,
    pub max_group_size: u32,
    pub difficulty: Difficulty,
    pub ratings_average: f64,
    pub rating_quantity: u32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_discount: Option<f64>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_cover: String,
    pub images: Vec<String>,
    /// RFC 3339
    pub start_dates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_location: Option<GeoPoint>,
    pub locations: Vec<GeoPoint>,
    pub guides: Vec<GuideSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewResponse>>,
    pub created_at: String,
    pub updated_at: String,
}

impl TourResponse {
    /// `guides` 는 투어의 참조 순서대로 정렬된 요약이어야 합니다.
    pub fn new(tour: Tour, guides: Vec<GuideSummary>) -> Self {
        let Tour {
            id,
            name,
            slug,
            duration,
            max_group_size,
            difficulty,
            ratings_average,
            rating_quantity,
            price,
            price_discount,
            summary,
            description,
            image_cover,
            images,
            start_dates,
            start_location,
            locations,
            created_at,
            updated_at,
            ..
        } = tour;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            slug,
            duration,
            max_group_size,
            difficulty,
            ratings_average,
            rating_quantity,
            price,
            price_discount,
            summary,
            description,
            image_cover,
            images,
            start_dates: start_dates
                .into_iter()
                .filter_map(|date| date.try_to_rfc3339_string().ok())
                .collect(),
            start_location,
            locations,
            guides,
            reviews: None,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = Some(reviews.into_iter().map(ReviewResponse::from).collect());
        self
    }
}
