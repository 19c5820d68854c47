//! # IPO Engine
//!
//! 공모주 청약 예산 배분 탐색 엔진.
//!
//! 예산을 증권사별 현금/융자 청약으로 나누는 모든 유효한 조합을
//! 열거하고, 증권사별 비용/수익 모델로 평가해 예상 수익이 가장 큰
//! 배분을 선택합니다:
//! - 청약 비용 모델 (현금 수수료, 융자 이자)
//! - 예상 수익 모델 (선형 당첨률)
//! - 증권사별 청약 플랜
//! - 재귀 배분 탐색 및 선택기
//! - 탐색 관찰 훅

pub mod cost;
pub mod earning;
pub mod engine;
pub mod observer;
pub mod plan;
pub mod search;
pub mod selector;

pub use cost::*;
pub use earning::*;
pub use engine::*;
pub use observer::*;
pub use plan::*;
pub use search::*;
pub use selector::*;
