//! CLI 명령어 구현 모듈.

pub mod arrange;
pub mod plan;
pub mod tiers;
