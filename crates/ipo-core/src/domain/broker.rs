//! 증권사 수수료 및 융자 조건 정의.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IpoError, IpoResult};

/// 증권사 정보.
///
/// 현금/융자 청약 수수료와 융자 조건을 담습니다. 생성 이후 불변이며
/// 모든 청약 플랜이 읽기 전용으로 공유합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broker {
    /// 증권사명
    pub name: String,
    /// 현금 청약 수수료
    pub cash_fee: Decimal,
    /// 융자 청약 수수료
    pub financing_fee: Decimal,
    /// 융자 이율 (연리, 소수)
    pub financing_rate: Decimal,
    /// 융자 배수 (자기자본 대비)
    pub leverage: u32,
}

impl Broker {
    /// 새 증권사를 생성합니다.
    ///
    /// 융자 배수가 1 미만이면 즉시 실패합니다. 수량 계산의 나눗셈이
    /// 배수에 의존하기 때문입니다.
    pub fn new(
        name: impl Into<String>,
        cash_fee: Decimal,
        financing_fee: Decimal,
        financing_rate: Decimal,
        leverage: u32,
    ) -> IpoResult<Self> {
        let name = name.into();
        if leverage < 1 {
            return Err(IpoError::InvalidBroker(format!(
                "{}: 융자 배수는 1 이상이어야 합니다: {}",
                name, leverage
            )));
        }
        if cash_fee < Decimal::ZERO || financing_fee < Decimal::ZERO {
            return Err(IpoError::InvalidBroker(format!(
                "{}: 수수료는 음수일 수 없습니다",
                name
            )));
        }
        if financing_rate < Decimal::ZERO {
            return Err(IpoError::InvalidBroker(format!(
                "{}: 융자 이율은 음수일 수 없습니다: {}",
                name, financing_rate
            )));
        }

        Ok(Self {
            name,
            cash_fee,
            financing_fee,
            financing_rate,
            leverage,
        })
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, 현금청약수수료:{}, 융자청약수수료:{}, 융자이율:{}, 융자배수:{}",
            self.name, self.cash_fee, self.financing_fee, self.financing_rate, self.leverage
        )
    }
}
