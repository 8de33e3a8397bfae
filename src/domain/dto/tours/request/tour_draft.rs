//! 투어 생성/수정 요청 DTO
//!
//! 생성과 부분 수정이 같은 [`TourDraft`] 를 사용합니다.
//!
//! - 생성: 요청 본문을 그대로 검증합니다.
//! - 수정: 저장된 투어를 `TourDraft` 로 되돌린 뒤 요청 본문을 덮어쓴 병합 결과를
//!   다시 검증합니다. 따라서 `priceDiscount < price` 같은 필드 간 규칙은 항상
//!   병합된 문서 기준으로 판단됩니다.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::Deserialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult, FieldViolation};
use crate::domain::entities::tours::{Difficulty, GeoPoint, Tour, TourFields};

/// 투어 요청 본문
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TourDraft {
    #[validate(
        required(message = "투어 이름은 필수입니다"),
        length(min = 1, message = "투어 이름은 필수입니다")
    )]
    pub name: Option<String>,

    #[validate(required(message = "투어 가격은 필수입니다"))]
    pub price: Option<f64>,

    #[validate(required(message = "투어 기간은 필수입니다"))]
    pub duration: Option<f64>,

    /// 음수나 소수도 필드 위반으로 보고하기 위해 숫자로 받은 뒤 정수 여부를 검사합니다.
    #[validate(
        required(message = "최대 인원은 필수입니다"),
        range(min = 1.0, max = 4294967295.0, message = "최대 인원은 1명 이상이어야 합니다")
    )]
    pub max_group_size: Option<f64>,

    /// `easy` | `medium` | `difficult`
    pub difficulty: Option<String>,

    #[validate(range(min = 1.0, max = 5.0, message = "평균 평점은 1 이상 5 이하여야 합니다"))]
    pub ratings_average: Option<f64>,

    pub rating_quantity: Option<u32>,

    pub price_discount: Option<f64>,

    #[validate(
        required(message = "투어 요약은 필수입니다"),
        length(min = 1, message = "투어 요약은 필수입니다")
    )]
    pub summary: Option<String>,

    #[validate(length(min = 20, message = "투어 설명은 20자 이상이어야 합니다"))]
    pub description: Option<String>,

    #[validate(
        required(message = "커버 이미지는 필수입니다"),
        length(min = 1, message = "커버 이미지는 필수입니다")
    )]
    pub image_cover: Option<String>,

    pub images: Option<Vec<String>>,

    pub start_dates: Option<Vec<DateTime<Utc>>>,

    pub start_location: Option<GeoPoint>,

    pub locations: Option<Vec<GeoPoint>>,

    /// 가이드 사용자 ID (24자리 hex)
    pub guides: Option<Vec<String>>,
}

impl TourDraft {
    /// `patch` 에 값이 있는 필드만 덮어씁니다.
    pub fn overlay(self, patch: TourDraft) -> TourDraft {
        TourDraft {
            name: patch.name.or(self.name),
            price: patch.price.or(self.price),
            duration: patch.duration.or(self.duration),
            max_group_size: patch.max_group_size.or(self.max_group_size),
            difficulty: patch.difficulty.or(self.difficulty),
            ratings_average: patch.ratings_average.or(self.ratings_average),
            rating_quantity: patch.rating_quantity.or(self.rating_quantity),
            price_discount: patch.price_discount.or(self.price_discount),
            summary: patch.summary.or(self.summary),
            description: patch.description.or(self.description),
            image_cover: patch.image_cover.or(self.image_cover),
            images: patch.images.or(self.images),
            start_dates: patch.start_dates.or(self.start_dates),
            start_location: patch.start_location.or(self.start_location),
            locations: patch.locations.or(self.locations),
            guides: patch.guides.or(self.guides),
        }
    }

    /// `summary`, `description` 의 앞뒤 공백을 제거합니다.
    fn normalize(&mut self) {
        for field in [&mut self.summary, &mut self.description] {
            if let Some(value) = field.as_mut() {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    *value = trimmed.to_string();
                }
            }
        }
    }

    /// 정규화 → 검증 → [`TourFields`] 변환
    ///
    /// # Errors
    ///
    /// 모든 위반을 모아 필드 이름 순으로 정렬한 `AppError::InvalidFields`.
    pub fn into_fields(mut self) -> AppResult<TourFields> {
        self.normalize();

        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FieldViolation::from_validation_errors(&errors),
        };

        let difficulty = match self.difficulty.as_deref() {
            None => {
                violations.push(FieldViolation::new("difficulty", "난이도는 필수입니다"));
                None
            }
            Some(raw) => {
                let parsed = Difficulty::parse(raw);
                if parsed.is_none() {
                    violations.push(FieldViolation::new(
                        "difficulty",
                        "난이도는 easy, medium, difficult 중 하나여야 합니다",
                    ));
                }
                parsed
            }
        };

        if self.max_group_size.is_some_and(|size| size.fract() != 0.0) {
            violations.push(FieldViolation::new(
                "maxGroupSize",
                "최대 인원은 정수여야 합니다",
            ));
        }

        if let Some(discount) = self.price_discount {
            if !matches!(self.price, Some(price) if price > discount) {
                violations.push(FieldViolation::new(
                    "priceDiscount",
                    "할인 금액은 투어 가격보다 작아야 합니다",
                ));
            }
        }

        if let Some(point) = &self.start_location {
            check_coordinates(point, "startLocation.coordinates", &mut violations);
        }
        for (index, point) in self.locations.iter().flatten().enumerate() {
            check_coordinates(point, &format!("locations[{}].coordinates", index), &mut violations);
        }

        let mut guides = Vec::new();
        for raw in self.guides.iter().flatten() {
            match ObjectId::parse_str(raw) {
                Ok(id) => guides.push(id),
                Err(_) => violations.push(FieldViolation::new(
                    "guides",
                    format!("올바르지 않은 가이드 ID 입니다: {}", raw),
                )),
            }
        }

        if !violations.is_empty() {
            violations.sort_by(|a, b| a.field.cmp(&b.field));
            return Err(AppError::InvalidFields(violations));
        }

        let (
            Some(name),
            Some(price),
            Some(duration),
            Some(max_group_size),
            Some(difficulty),
            Some(summary),
            Some(image_cover),
        ) = (
            self.name,
            self.price,
            self.duration,
            self.max_group_size,
            difficulty,
            self.summary,
            self.image_cover,
        )
        else {
            return Err(AppError::InternalError(
                "검증을 통과한 투어 요청에 필수 값이 없습니다".to_string(),
            ));
        };

        Ok(TourFields {
            name,
            price,
            duration,
            max_group_size: max_group_size as u32,
            difficulty,
            ratings_average: self.ratings_average.unwrap_or(0.0),
            rating_quantity: self.rating_quantity.unwrap_or(0),
            price_discount: self.price_discount,
            summary,
            description: self.description,
            image_cover,
            images: self.images.unwrap_or_default(),
            start_dates: self
                .start_dates
                .unwrap_or_default()
                .into_iter()
                .map(|date| bson::DateTime::from_millis(date.timestamp_millis()))
                .collect(),
            start_location: self.start_location,
            locations: self.locations.unwrap_or_default(),
            guides,
        })
    }
}

fn check_coordinates(point: &GeoPoint, field: &str, violations: &mut Vec<FieldViolation>) {
    if point.coordinates.len() != 2 {
        violations.push(FieldViolation::new(
            field,
            "좌표는 [경도, 위도] 두 개의 값이어야 합니다",
        ));
    }
}

impl From<&Tour> for TourDraft {
    /// 저장된 투어를 병합 기준 문서로 되돌립니다.
    fn from(tour: &Tour) -> Self {
        Self {
            name: Some(tour.name.clone()),
            price: Some(tour.price),
            duration: Some(tour.duration),
            max_group_size: Some(f64::from(tour.max_group_size)),
            difficulty: Some(tour.difficulty.as_str().to_string()),
            // 0 은 미평가 기본값이므로 검증 대상에서 제외
            ratings_average: (tour.ratings_average != 0.0).then_some(tour.ratings_average),
            rating_quantity: Some(tour.rating_quantity),
            price_discount: tour.price_discount,
            summary: Some(tour.summary.clone()),
            description: tour.description.clone(),
            image_cover: Some(tour.image_cover.clone()),
            images: Some(tour.images.clone()),
            start_dates: Some(
                tour.start_dates
                    .iter()
                    .filter_map(|date| DateTime::<Utc>::from_timestamp_millis(date.timestamp_millis()))
                    .collect(),
            ),
            start_location: tour.start_location.clone(),
            locations: Some(tour.locations.clone()),
            guides: Some(tour.guides.iter().map(|id| id.to_hex()).collect()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::forest_hiker_draft;
    use super::*;

    fn violated_fields(result: AppResult<TourFields>) -> Vec<String> {
        match result {
            Err(AppError::InvalidFields(violations)) => {
                violations.into_iter().map(|v| v.field).collect()
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_draft_is_normalized_and_defaulted() {
        let fields = forest_hiker_draft().into_fields().unwrap();

        assert_eq!(
            fields.summary,
            "Breathtaking hike through the Canadian Banff National Park"
        );
        assert_eq!(fields.difficulty, Difficulty::Easy);
        assert_eq!(fields.ratings_average, 0.0);
        assert_eq!(fields.rating_quantity, 0);
        assert!(fields.images.is_empty());
    }

    #[test]
    fn test_empty_draft_reports_required_fields() {
        let fields = violated_fields(TourDraft::default().into_fields());

        assert_eq!(
            fields,
            vec![
                "difficulty",
                "duration",
                "imageCover",
                "maxGroupSize",
                "name",
                "price",
                "summary"
            ]
        );
    }

    #[test]
    fn test_price_discount_must_be_below_price() {
        let draft = TourDraft {
            price_discount: Some(397.0),
            ..forest_hiker_draft()
        };
        assert_eq!(violated_fields(draft.into_fields()), vec!["priceDiscount"]);

        let draft = TourDraft {
            price_discount: Some(100.0),
            ..forest_hiker_draft()
        };
        assert_eq!(draft.into_fields().unwrap().price_discount, Some(100.0));
    }

    #[test]
    fn test_ratings_average_range() {
        for rating in [0.5, 5.5] {
            let draft = TourDraft {
                ratings_average: Some(rating),
                ..forest_hiker_draft()
            };
            assert_eq!(violated_fields(draft.into_fields()), vec!["ratingsAverage"]);
        }

        let draft = TourDraft {
            ratings_average: Some(4.7),
            ..forest_hiker_draft()
        };
        assert!(draft.into_fields().is_ok());
    }

    #[test]
    fn test_description_is_trimmed_before_length_check() {
        let draft = TourDraft {
            description: Some("   too short        ".to_string()),
            ..forest_hiker_draft()
        };
        assert_eq!(violated_fields(draft.into_fields()), vec!["description"]);

        let draft = TourDraft {
            description: Some("  A long enough description of the tour.  ".to_string()),
            ..forest_hiker_draft()
        };
        assert_eq!(
            draft.into_fields().unwrap().description.as_deref(),
            Some("A long enough description of the tour.")
        );
    }

    #[test]
    fn test_group_size_and_difficulty_rules() {
        let draft = TourDraft {
            max_group_size: Some(0.0),
            difficulty: Some("extreme".to_string()),
            ..forest_hiker_draft()
        };

        assert_eq!(
            violated_fields(draft.into_fields()),
            vec!["difficulty", "maxGroupSize"]
        );
    }

    #[test]
    fn test_negative_or_fractional_group_size_is_a_field_violation() {
        for size in [-3.0, 2.5] {
            let draft: TourDraft = serde_json::from_value(serde_json::json!({
                "name": "The Snow Adventurer",
                "price": 997,
                "duration": 4,
                "maxGroupSize": size,
                "difficulty": "difficult",
                "summary": "Exciting adventure in the snow with snowboarding and skiing",
                "imageCover": "tour-3-cover.jpg"
            }))
            .unwrap();

            assert_eq!(violated_fields(draft.into_fields()), vec!["maxGroupSize"]);
        }

        let draft = TourDraft {
            max_group_size: Some(12.0),
            ..forest_hiker_draft()
        };
        assert_eq!(draft.into_fields().unwrap().max_group_size, 12);
    }

    #[test]
    fn test_guides_and_coordinates_are_checked() {
        let draft: TourDraft = serde_json::from_value(serde_json::json!({
            "name": "The Sea Explorer",
            "price": 497,
            "duration": 7,
            "maxGroupSize": 15,
            "difficulty": "medium",
            "summary": "Exploring the jaw-dropping US east coast",
            "imageCover": "tour-2-cover.jpg",
            "startLocation": { "type": "Point", "coordinates": [-80.18] },
            "guides": ["not-an-id"]
        }))
        .unwrap();

        assert_eq!(
            violated_fields(draft.into_fields()),
            vec!["guides", "startLocation.coordinates"]
        );
    }

    #[test]
    fn test_overlay_revalidates_discount_against_merged_price() {
        let mut existing = crate::domain::entities::tours::Tour::new(
            TourDraft {
                price_discount: Some(100.0),
                ..forest_hiker_draft()
            }
            .into_fields()
            .unwrap(),
        );
        existing.sync_slug();

        let patch = TourDraft {
            price: Some(50.0),
            ..TourDraft::default()
        };

        let merged = TourDraft::from(&existing).overlay(patch);
        assert_eq!(violated_fields(merged.into_fields()), vec!["priceDiscount"]);
    }

    #[test]
    fn test_round_trip_of_unrated_tour_stays_valid() {
        let tour = Tour::new(forest_hiker_draft().into_fields().unwrap());

        let fields = TourDraft::from(&tour).into_fields().unwrap();

        assert_eq!(fields.ratings_average, 0.0);
        assert_eq!(fields.name, tour.name);
    }
}
