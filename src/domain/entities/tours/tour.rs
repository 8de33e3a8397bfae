//! Tour Entity Implementation
//!
//! `tours` 컬렉션 문서와 저장 전에 실행되는 슬러그 단계를 정의합니다.
//! 필드 검증은 요청 DTO(`TourDraft`) 쪽에서 끝나고, 이 엔티티는 검증을 통과한
//! [`TourFields`] 로만 생성/갱신됩니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::slugify;

/// 투어 난이도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Difficult,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Difficult];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Difficult => "difficult",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// GeoJSON geometry 타입. 현재는 `Point` 만 허용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeoKind {
    #[default]
    Point,
}

/// GeoJSON Point 와 부가 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default)]
    pub kind: GeoKind,
    /// `[경도, 위도]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 검증을 통과한 투어 필드 값
///
/// `slug`, 타임스탬프처럼 파생되는 값은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct TourFields {
    pub name: String,
    pub price: f64,
    pub duration: f64,
    pub max_group_size: u32,
    pub difficulty: Difficulty,
    pub ratings_average: f64,
    pub rating_quantity: u32,
    pub price_discount: Option<f64>,
    pub summary: String,
    pub description: Option<String>,
    pub image_cover: String,
    pub images: Vec<String>,
    pub start_dates: Vec<DateTime>,
    pub start_location: Option<GeoPoint>,
    pub locations: Vec<GeoPoint>,
    pub guides: Vec<ObjectId>,
}

/// 투어 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub duration: f64,
    pub max_group_size: u32,
    pub difficulty: Difficulty,
    /// 0 은 아직 평가되지 않은 투어를 뜻합니다.
    #[serde(default)]
    pub ratings_average: f64,
    #[serde(default)]
    pub rating_quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_discount: Option<f64>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_cover: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub start_dates: Vec<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<GeoPoint>,
    #[serde(default)]
    pub locations: Vec<GeoPoint>,
    /// 가이드(User) 참조
    #[serde(default)]
    pub guides: Vec<ObjectId>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Tour {
    pub fn new(fields: TourFields) -> Self {
        let now = DateTime::now();

        let mut tour = Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            duration: 0.0,
            max_group_size: 0,
            difficulty: fields.difficulty,
            ratings_average: 0.0,
            rating_quantity: 0,
            price: 0.0,
            price_discount: None,
            summary: String::new(),
            description: None,
            image_cover: String::new(),
            images: Vec::new(),
            start_dates: Vec::new(),
            start_location: None,
            locations: Vec::new(),
            guides: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        tour.assign(fields);
        tour
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 검증된 필드 값으로 갱신합니다. `id`, `createdAt` 은 유지됩니다.
    pub fn apply(&mut self, fields: TourFields) {
        self.assign(fields);
        self.updated_at = DateTime::now();
    }

    fn assign(&mut self, fields: TourFields) {
        let TourFields {
            name,
            price,
            duration,
            max_group_size,
            difficulty,
            ratings_average,
            rating_quantity,
            price_discount,
            summary,
            description,
            image_cover,
            images,
            start_dates,
            start_location,
            locations,
            guides,
        } = fields;

        self.name = name;
        self.price = price;
        self.duration = duration;
        self.max_group_size = max_group_size;
        self.difficulty = difficulty;
        self.ratings_average = ratings_average;
        self.rating_quantity = rating_quantity;
        self.price_discount = price_discount;
        self.summary = summary;
        self.description = description;
        self.image_cover = image_cover;
        self.images = images;
        self.start_dates = start_dates;
        self.start_location = start_location;
        self.locations = locations;
        self.guides = guides;
    }

    /// 슬러그 단계
    ///
    /// `slug` 가 `slugify(name)` 과 다를 때만 다시 계산해 대입하고, 변경 여부를 반환합니다.
    /// 저장 직전에 항상 호출되므로 저장된 투어는 `slug == slugify(name)` 을 만족합니다.
    pub fn sync_slug(&mut self) -> bool {
        let derived = slugify(&self.name);
        if self.slug == derived {
            return false;
        }

        self.slug = derived;
        true
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn forest_hiker_fields() -> TourFields {
        TourFields {
            name: "The Forest Hiker".to_string(),
            price: 397.0,
            duration: 5.0,
            max_group_size: 25,
            difficulty: Difficulty::Easy,
            ratings_average: 0.0,
            rating_quantity: 0,
            price_discount: None,
            summary: "Breathtaking hike through the Canadian Banff National Park".to_string(),
            description: None,
            image_cover: "tour-1-cover.jpg".to_string(),
            images: vec!["tour-1-1.jpg".to_string()],
            start_dates: Vec::new(),
            start_location: None,
            locations: Vec::new(),
            guides: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::forest_hiker_fields;
    use super::*;

    #[test]
    fn test_new_tour_derives_slug_on_sync() {
        let mut tour = Tour::new(forest_hiker_fields());
        assert!(tour.slug.is_empty());

        assert!(tour.sync_slug());
        assert_eq!(tour.slug, "the-forest-hiker");
        assert!(!tour.sync_slug());
    }

    #[test]
    fn test_sync_slug_repairs_stale_slug_without_name_change() {
        let mut tour = Tour::new(forest_hiker_fields());
        tour.slug = "outdated".to_string();

        assert!(tour.sync_slug());
        assert_eq!(tour.slug, slugify(&tour.name));
    }

    #[test]
    fn test_apply_keeps_identity_and_creation_time() {
        let mut tour = Tour::new(forest_hiker_fields());
        let id = ObjectId::new();
        tour.id = Some(id);
        let created_at = tour.created_at;

        let mut fields = forest_hiker_fields();
        fields.name = "The Sea Explorer".to_string();
        tour.apply(fields);
        tour.sync_slug();

        assert_eq!(tour.id, Some(id));
        assert_eq!(tour.created_at, created_at);
        assert_eq!(tour.slug, "the-sea-explorer");
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("Medium"), None);
        assert_eq!(Difficulty::parse("extreme"), None);
    }

    #[test]
    fn test_geo_point_serializes_type_field() {
        let point = GeoPoint {
            kind: GeoKind::Point,
            coordinates: vec![-115.57, 51.17],
            address: None,
            description: Some("Banff, CAN".to_string()),
        };

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][1], 51.17);
        assert!(json.get("address").is_none());
    }
}
