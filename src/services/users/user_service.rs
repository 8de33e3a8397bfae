//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 비밀번호 변경, 사용자 조회를 담당합니다.
//!
//! ## 비밀번호 처리 순서
//!
//! ```text
//! 요청 DTO 검증 ──▶ User::set_password ──▶ User::hash_password ──▶ UserStore
//!                      (평문 대기)            (bcrypt, blocking 풀)
//! ```
//!
//! 평문은 저장소에 도달하기 전에 항상 해시로 교체됩니다.
//! 로그인 실패는 이메일 부재와 비밀번호 불일치를 구분하지 않습니다.

use std::sync::Arc;
use std::time::Instant;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    config::PasswordPolicy,
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::{LoginRequest, SignUpRequest, UpdatePasswordRequest},
        entities::users::User,
    },
    repositories::UserStore,
};

const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

pub struct UserService {
    users: Arc<dyn UserStore>,
    policy: PasswordPolicy,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, policy: PasswordPolicy) -> Self {
        Self { users, policy }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// 반환되는 사용자에는 비밀번호 해시가 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - 필드 검증 실패
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<User> {
        let start_time = Instant::now();

        let new_user = request.into_new_user(self.policy.min_length)?;

        let mut user = User::new(new_user.name, new_user.email, new_user.photo, new_user.role);
        user.set_password(new_user.password);
        user.hash_password(self.policy.bcrypt_cost).await?;

        let created = self.users.insert(user).await?;

        log::info!(
            "회원가입 완료: {} ({}), {:?}",
            created.email,
            created.role.as_str(),
            start_time.elapsed()
        );

        Ok(created.without_password())
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let email = request.normalized_email();
        let user = self
            .users
            .find_credentials_by_email(&email)
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패 (존재하지 않는 이메일): {}", email);
                AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
            })?;

        let Some(stored_hash) = user.password.as_deref() else {
            log::warn!("로그인 실패 (비밀번호 해시 없음): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        if !User::correct_password(&request.password, stored_hash).await? {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        log::info!("로그인 성공: {}", email);
        Ok(user.without_password())
    }

    /// 현재 비밀번호를 확인한 뒤 새 비밀번호로 교체합니다.
    ///
    /// `passwordChangedAt` 이 갱신되므로 이전에 발급된 토큰은 더 이상 사용할 수 없습니다.
    pub async fn update_password(
        &self,
        user_id: &str,
        request: UpdatePasswordRequest,
    ) -> AppResult<User> {
        let id = parse_user_id(user_id)?;
        let mut user = self
            .users
            .find_credentials_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let change = request.into_password_change(self.policy.min_length)?;

        let stored_hash = user.password.clone().unwrap_or_default();
        if !User::correct_password(&change.current, &stored_hash).await? {
            log::warn!("비밀번호 변경 거부 (현재 비밀번호 불일치): {}", user.email);
            return Err(AppError::AuthenticationError(
                "현재 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        user.set_password(change.new_password);
        user.hash_password(self.policy.bcrypt_cost).await?;
        user.mark_password_changed();

        let (Some(hash), Some(changed_at)) = (user.password.as_deref(), user.password_changed_at)
        else {
            return Err(AppError::InternalError(
                "비밀번호 해시를 생성하지 못했습니다".to_string(),
            ));
        };
        self.users.update_password(&id, hash, changed_at).await?;

        log::info!("비밀번호 변경 완료: {}", user.email);
        Ok(user.without_password())
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        let id = parse_user_id(id)?;
        self.users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

fn parse_user_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 사용자 ID 입니다: {}", id)))
}
