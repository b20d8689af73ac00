// src/gacha/src/rates.rs

use error::GachaError;
use roster::Rarity;
use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

/// 稀有度概率表（整数百分比，三项之和必须为100）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub star5: u32,
    pub star4: u32,
    pub star3: u32,
}

impl RateTable {
    /// 创建并校验概率表
    pub fn new(star5: u32, star4: u32, star3: u32) -> Result<Self, GachaError> {
        let table = Self {
            star5,
            star4,
            star3,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), GachaError> {
        let total = self
            .star5
            .checked_add(self.star4)
            .and_then(|sum| sum.checked_add(self.star3))
            .ok_or_else(|| {
                GachaError::config(format!(
                    "rate table {}/{}/{} overflows",
                    self.star5, self.star4, self.star3
                ))
            })?;
        if total != 100 {
            return Err(GachaError::config(format!(
                "rate table {}/{}/{} sums to {}, expected 100",
                self.star5, self.star4, self.star3, total
            )));
        }
        Ok(())
    }

    /// 指定稀有度的百分比
    pub fn rate(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Five => self.star5,
            Rarity::Four => self.star4,
            Rarity::Three => self.star3,
        }
    }

    /// 掷出稀有度
    ///
    /// r ∈ [0,100)：5★ 占最低区间，其次 4★，剩余为 3★。
    /// 概率表须先通过 `validate`，否则区间边界没有意义。
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Rarity {
        let r = rng.next_unit() * 100.0;
        if r < self.star5 as f64 {
            Rarity::Five
        } else if r < self.star5.saturating_add(self.star4) as f64 {
            Rarity::Four
        } else {
            Rarity::Three
        }
    }
}
