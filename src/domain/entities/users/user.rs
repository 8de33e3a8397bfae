//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 엔티티와 비밀번호 관련 도메인 로직입니다.
//!
//! 비밀번호는 두 단계로 다룹니다.
//!
//! 1. [`User::set_password`] 는 평문을 저장되지 않는 대기 슬롯에 넣습니다.
//! 2. [`User::hash_password`] 는 대기 중인 평문이 있을 때만 bcrypt 해시로 교체합니다.
//!    변경된 비밀번호가 없으면 아무 일도 하지 않습니다.
//!
//! 따라서 평문은 어떤 경로로도 영속화되거나 응답에 포함되지 않습니다.

use actix_web::web;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppResult, ErrorContext};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    User,
    Admin,
    Guide,
    LeadGuide,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::User, Role::Admin, Role::Guide, Role::LeadGuide];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Guide => "guide",
            Role::LeadGuide => "lead-guide",
        }
    }

    /// 저장/전송 형식(`lead-guide` 등)의 문자열을 역할로 변환합니다.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 소문자로 정규화된 이메일 (unique)
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// bcrypt 해시
    ///
    /// 기본 조회는 projection 으로 이 필드를 제외하므로 `None` 입니다.
    /// 자격 증명 확인용 조회에서만 채워집니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_changed_at: Option<DateTime>,
    /// 아직 해시되지 않은 새 비밀번호
    #[serde(skip)]
    pending_password: Option<String>,
}

impl User {
    pub fn new(name: String, email: String, photo: Option<String>, role: Role) -> Self {
        Self {
            id: None,
            name,
            email,
            photo,
            role,
            password: None,
            password_changed_at: None,
            pending_password: None,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 새 비밀번호를 지정합니다. 해시는 [`User::hash_password`] 에서 수행됩니다.
    pub fn set_password(&mut self, plain: String) {
        self.pending_password = Some(plain);
    }

    pub fn is_password_modified(&self) -> bool {
        self.pending_password.is_some()
    }

    /// 비밀번호 해시 단계
    ///
    /// 대기 중인 평문 비밀번호가 있으면 bcrypt 해시로 교체하고, 없으면 아무것도 하지 않습니다.
    /// 해싱은 actix blocking 풀에서 실행됩니다.
    pub async fn hash_password(&mut self, cost: u32) -> AppResult<()> {
        let Some(plain) = self.pending_password.take() else {
            return Ok(());
        };

        let started = std::time::Instant::now();
        let hash = web::block(move || bcrypt::hash(plain, cost))
            .await
            .context("비밀번호 해싱 작업 실행 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("비밀번호 해싱 완료 (cost={}, {:?})", cost, started.elapsed());

        self.password = Some(hash);
        Ok(())
    }

    /// 후보 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 불일치는 `Ok(false)` 입니다. 저장된 해시가 bcrypt 형식이 아니어도
    /// 일치할 수 없으므로 `Ok(false)` 를 반환합니다.
    pub async fn correct_password(candidate: &str, stored_hash: &str) -> AppResult<bool> {
        let candidate = candidate.to_owned();
        let stored_hash = stored_hash.to_owned();

        let verified = web::block(move || bcrypt::verify(candidate, &stored_hash))
            .await
            .context("비밀번호 검증 작업 실행 실패")?;

        match verified {
            Ok(matches) => Ok(matches),
            Err(e) => {
                log::warn!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
                Ok(false)
            }
        }
    }

    /// 토큰 발급(`iat`, 초 단위) 이후 비밀번호가 변경되었는지 확인합니다.
    ///
    /// `passwordChangedAt` 이 없으면 항상 `false` 입니다.
    pub fn changed_password_after(&self, jwt_issued_at: i64) -> bool {
        match self.password_changed_at {
            Some(changed_at) => changed_at.timestamp_millis() / 1000 > jwt_issued_at,
            None => false,
        }
    }

    /// 비밀번호 변경 시각을 기록합니다.
    ///
    /// 변경 직후 발급하는 토큰의 `iat` 가 변경 시각보다 앞서지 않도록 1초 앞당겨 기록합니다.
    pub fn mark_password_changed(&mut self) {
        let now = DateTime::now().timestamp_millis();
        self.password_changed_at = Some(DateTime::from_millis(now - 1000));
    }

    /// 가이드 참조 채우기에 사용하는 요약. 저장되지 않은 사용자는 `None` 입니다.
    pub fn guide_profile(&self) -> Option<GuideProfile> {
        self.id.map(|id| GuideProfile {
            id,
            name: self.name.clone(),
            photo: self.photo.clone(),
        })
    }

    /// 해시를 제거한 사본을 반환합니다.
    pub fn without_password(mut self) -> Self {
        self.password = None;
        self.pending_password = None;
        self
    }
}

/// 투어 조회 시 가이드 참조를 채우는 데 사용하는 사용자 요약 (`name`, `photo` projection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideProfile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}
