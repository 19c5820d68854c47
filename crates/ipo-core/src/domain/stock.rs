//! 공모주 정의 및 당첨률 모델.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IpoError, IpoResult};

/// 공모주 정보.
///
/// 생성 이후 불변이며, 모든 청약 플랜이 읽기 전용으로 공유합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// 종목명
    pub name: String,
    /// 1랏 가격
    pub lot_price: Decimal,
    /// 자금 동결 일수 (청약 ~ 상장/환불 사이 자금이 묶이는 기간)
    pub freeze_days: u32,
    /// 상장 후 예상 상승률 (소수, 예: 0.06 = 6%)
    pub growth_rate: Decimal,
    /// 1랏 당첨률
    pub base_lot_winning_rate: Decimal,
    /// 랏당 당첨률 증가분 (선형 모델)
    pub winning_rate_slope: Decimal,
}

impl Stock {
    /// 새 공모주를 생성합니다.
    ///
    /// 1랏 가격이 0 이하이면 즉시 실패합니다. 이후의 모든 수량 계산이
    /// 가격 나눗셈에 의존하기 때문입니다.
    pub fn new(
        name: impl Into<String>,
        lot_price: Decimal,
        freeze_days: u32,
        growth_rate: Decimal,
        base_lot_winning_rate: Decimal,
        winning_rate_slope: Decimal,
    ) -> IpoResult<Self> {
        if lot_price <= Decimal::ZERO {
            return Err(IpoError::InvalidStock(format!(
                "1랏 가격은 0보다 커야 합니다: {}",
                lot_price
            )));
        }

        Ok(Self {
            name: name.into(),
            lot_price,
            freeze_days,
            growth_rate,
            base_lot_winning_rate,
            winning_rate_slope,
        })
    }

    /// 청약 수량에 따른 예상 전체 당첨률.
    ///
    /// 1랏은 기본 당첨률, 그 이상은 랏당 증가분을 더한 선형 모델입니다.
    /// 수량이 커지면 1을 넘을 수 있으나 의도적으로 잘라내지 않습니다.
    /// 잘라내면 선택 결과가 달라지므로 호출자가 모델 한계로 취급합니다.
    pub fn winning_rate(&self, lot_count: u32) -> Decimal {
        if lot_count == 1 {
            return self.base_lot_winning_rate;
        }
        self.base_lot_winning_rate + Decimal::from(lot_count - 1) * self.winning_rate_slope
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, 가격:{}, 동결일수:{}, 상승률:{}, 1랏당첨률:{}, 당첨률증가:{}",
            self.name,
            self.lot_price,
            self.freeze_days,
            self.growth_rate,
            self.base_lot_winning_rate,
            self.winning_rate_slope
        )
    }
}
