//! 배분 시스템의 에러 타입.
//!
//! 이 모듈은 청약 배분 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 배분 에러.
#[derive(Debug, Error)]
pub enum IpoError {
    /// 잘못된 공모주 정의 (예: 1手 가격이 0 이하)
    #[error("잘못된 공모주: {0}")]
    InvalidStock(String),

    /// 잘못된 증권사 정의 (예: 융자 배수가 1 미만)
    #[error("잘못된 증권사: {0}")]
    InvalidBroker(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 탐색 결과에 후보가 없음 (빈 배분도 항상 후보이므로 불변식 위반)
    #[error("배분 후보 없음: {0}")]
    NoCandidate(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 배분 작업을 위한 Result 타입.
pub type IpoResult<T> = Result<T, IpoError>;

impl IpoError {
    /// 객체 생성 시점에 발생하는 복구 불가능한 에러인지 확인합니다.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            IpoError::InvalidStock(_) | IpoError::InvalidBroker(_) | IpoError::Config(_)
        )
    }

    /// 불변식 위반인지 확인합니다.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, IpoError::NoCandidate(_) | IpoError::Internal(_))
    }
}

impl From<config::ConfigError> for IpoError {
    fn from(err: config::ConfigError) -> Self {
        IpoError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for IpoError {
    fn from(err: serde_json::Error) -> Self {
        IpoError::Internal(err.to_string())
    }
}
