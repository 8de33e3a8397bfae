//! # 서비스 레지스트리
//!
//! 애플리케이션 시작 시 저장소와 서비스를 한 번 조립하고, `web::Data<ServiceRegistry>` 로
//! 핸들러와 미들웨어에 공유합니다.
//!
//! ```text
//! Database ──▶ UserRepository ─┐
//!          ──▶ TourRepository ─┼──▶ UserService / TourService ──▶ ServiceRegistry
//!          ──▶ ReviewRepository┘         TokenService ─────────────┘
//! ```
//!
//! 서비스는 저장소 trait 에만 의존하므로 테스트는 [`ServiceRegistry::new`] 에
//! 인메모리 저장소를 넣어 같은 조립 경로를 사용합니다.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    config::{PasswordConfig, PasswordPolicy},
    core::errors::AppResult,
    db::Database,
    repositories::{
        ReviewRepository, ReviewStore, TourRepository, TourStore, UserRepository, UserStore,
    },
    services::{TokenService, TourService, UserService},
};

#[derive(Clone)]
pub struct ServiceRegistry {
    pub users: Arc<UserService>,
    pub tours: Arc<TourService>,
    pub tokens: Arc<TokenService>,
}

impl ServiceRegistry {
    pub fn new(
        users: Arc<dyn UserStore>,
        tours: Arc<dyn TourStore>,
        reviews: Arc<dyn ReviewStore>,
        policy: PasswordPolicy,
        tokens: TokenService,
    ) -> Self {
        Self {
            users: Arc::new(UserService::new(users.clone(), policy)),
            tours: Arc::new(TourService::new(tours, users, reviews)),
            tokens: Arc::new(tokens),
        }
    }

    /// MongoDB 저장소를 생성하고 인덱스를 보장한 뒤 서비스를 조립합니다.
    ///
    /// 비밀번호 정책과 JWT 설정은 환경 변수에서 읽습니다.
    pub async fn initialize(database: &Database) -> AppResult<Self> {
        let start_time = Instant::now();

        let user_repo = UserRepository::new(database.clone());
        let tour_repo = TourRepository::new(database.clone());
        let review_repo = ReviewRepository::new(database.clone());

        user_repo.create_indexes().await?;
        log::info!("users 인덱스 준비 완료");
        tour_repo.create_indexes().await?;
        log::info!("tours 인덱스 준비 완료");
        review_repo.create_indexes().await?;
        log::info!("reviews 인덱스 준비 완료");

        let policy = PasswordConfig::policy();
        log::info!(
            "비밀번호 정책: 최소 {}자, bcrypt cost {}",
            policy.min_length,
            policy.bcrypt_cost
        );

        let registry = Self::new(
            Arc::new(user_repo),
            Arc::new(tour_repo),
            Arc::new(review_repo),
            policy,
            TokenService::from_env(),
        );

        log::info!("서비스 초기화 완료 ({:?})", start_time.elapsed());
        Ok(registry)
    }
}
