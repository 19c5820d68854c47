//! 시나리오 설정 관리.
//!
//! 공모주/증권사/예산 시나리오를 TOML 파일과 환경 변수에서 로드합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::domain::{Broker, Stock};
use crate::error::{IpoError, IpoResult};

/// 배분 시나리오 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// 총 예산
    pub budget: Decimal,
    /// 공모주 정의
    pub stock: StockConfig,
    /// 증권사 목록 (탐색 순서 그대로)
    pub brokers: Vec<BrokerConfig>,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingSection,
}

/// 공모주 설정 항목.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StockConfig {
    /// 종목명
    pub name: String,
    /// 1랏 가격
    pub lot_price: Decimal,
    /// 자금 동결 일수
    pub freeze_days: u32,
    /// 상장 후 예상 상승률
    pub growth_rate: Decimal,
    /// 1랏 당첨률
    pub base_lot_winning_rate: Decimal,
    /// 랏당 당첨률 증가분
    pub winning_rate_slope: Decimal,
}

/// 증권사 설정 항목.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrokerConfig {
    /// 증권사명
    pub name: String,
    /// 현금 청약 수수료
    pub cash_fee: Decimal,
    /// 융자 청약 수수료
    pub financing_fee: Decimal,
    /// 융자 이율 (연리)
    pub financing_rate: Decimal,
    /// 융자 배수
    pub leverage: u32,
}

/// 로깅 설정 섹션.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSection {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl ScenarioConfig {
    /// 파일과 환경 변수에서 시나리오를 로드합니다.
    ///
    /// `IPO__BUDGET=...` 형태의 환경 변수가 파일 값을 덮어씁니다.
    pub fn load<P: AsRef<Path>>(path: P) -> IpoResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("IPO")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let scenario: ScenarioConfig = config.try_deserialize()?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// 기본 경로에서 시나리오를 로드합니다.
    pub fn load_default() -> IpoResult<Self> {
        Self::load("config/default.toml")
    }

    /// 도메인 객체로 변환하면서 생성 시점 검증을 수행합니다.
    pub fn into_domain(self) -> IpoResult<(Arc<Stock>, Vec<Arc<Broker>>, Decimal)> {
        let stock = Arc::new(Stock::new(
            self.stock.name,
            self.stock.lot_price,
            self.stock.freeze_days,
            self.stock.growth_rate,
            self.stock.base_lot_winning_rate,
            self.stock.winning_rate_slope,
        )?);

        let brokers = self
            .brokers
            .into_iter()
            .map(|b| {
                Broker::new(
                    b.name,
                    b.cash_fee,
                    b.financing_fee,
                    b.financing_rate,
                    b.leverage,
                )
                .map(Arc::new)
            })
            .collect::<IpoResult<Vec<_>>>()?;

        Ok((stock, brokers, self.budget))
    }

    fn validate(&self) -> IpoResult<()> {
        if self.budget < Decimal::ZERO {
            return Err(IpoError::Config(format!(
                "예산은 음수일 수 없습니다: {}",
                self.budget
            )));
        }
        if self.brokers.is_empty() {
            return Err(IpoError::Config("증권사 목록이 비어 있습니다".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_toml() -> &'static str {
        r#"
            budget = 100000

            [stock]
            name = "테스트"
            lot_price = 10700
            freeze_days = 5
            growth_rate = 0.06
            base_lot_winning_rate = 0.05
            winning_rate_slope = 0.007

            [[brokers]]
            name = "미래에셋"
            cash_fee = 50
            financing_fee = 100
            financing_rate = 0.03
            leverage = 10

            [[brokers]]
            name = "한국투자"
            cash_fee = 0
            financing_fee = 0
            financing_rate = 0.03
            leverage = 10
        "#
    }

    #[test]
    fn test_deserialize_scenario() {
        let scenario: ScenarioConfig = toml::from_str(sample_toml()).unwrap();
        assert_eq!(scenario.budget, dec!(100000));
        assert_eq!(scenario.brokers.len(), 2);
        assert_eq!(scenario.logging.level, "info");
    }

    #[test]
    fn test_into_domain_builds_shared_records() {
        let scenario: ScenarioConfig = toml::from_str(sample_toml()).unwrap();
        let (stock, brokers, budget) = scenario.into_domain().unwrap();
        assert_eq!(stock.lot_price, dec!(10700));
        assert_eq!(brokers[0].name, "미래에셋");
        assert_eq!(budget, dec!(100000));
    }

    #[test]
    fn test_into_domain_rejects_bad_stock() {
        let mut scenario: ScenarioConfig = toml::from_str(sample_toml()).unwrap();
        scenario.stock.lot_price = dec!(0);
        assert!(scenario.into_domain().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_budget() {
        let mut scenario: ScenarioConfig = toml::from_str(sample_toml()).unwrap();
        scenario.budget = dec!(-1);
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_brokers() {
        let mut scenario: ScenarioConfig = toml::from_str(sample_toml()).unwrap();
        scenario.brokers.clear();
        assert!(scenario.validate().is_err());
    }
}
