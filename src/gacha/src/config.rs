// src/gacha/src/config.rs
//! 卡池配置（费用、概率、保底规则、初始货币）

use std::path::Path;

use error::GachaError;
use roster::Rarity;
use serde::{Deserialize, Serialize};

use crate::banner::{Banner, Currency};
use crate::pity::PityRule;
use crate::rates::RateTable;

/// 十连抽的次数
pub const BATCH_SIZE: usize = 10;

/// 单个卡池的配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    pub currency: Currency,
    pub single_cost: u32,
    /// 十连价格，独立于单抽价格
    pub ten_cost: u32,
    pub rates: RateTable,
    pub pity: PityRule,
    /// 十连至少出现的稀有度（None 表示无十连保底）
    #[serde(default)]
    pub batch_guarantee: Option<Rarity>,
}

impl BannerConfig {
    pub fn standard() -> Self {
        Self {
            currency: Currency::Shards,
            single_cost: 25,
            ten_cost: 240,
            rates: RateTable {
                star5: 1,
                star4: 9,
                star3: 90,
            },
            pity: PityRule {
                threshold: 50,
                floor: Rarity::Four,
            },
            batch_guarantee: None,
        }
    }

    pub fn advanced() -> Self {
        Self {
            currency: Currency::AdvancedStones,
            single_cost: 50,
            ten_cost: 460,
            rates: RateTable {
                star5: 3,
                star4: 17,
                star3: 80,
            },
            pity: PityRule {
                threshold: 30,
                floor: Rarity::Four,
            },
            batch_guarantee: Some(Rarity::Four),
        }
    }

    fn validate(&self, banner: Banner) -> Result<(), GachaError> {
        self.rates
            .validate()
            .map_err(|e| GachaError::config(format!("{} banner: {}", banner, e)))?;
        if self.single_cost == 0 || self.ten_cost == 0 {
            return Err(GachaError::config(format!(
                "{} banner: draw costs must be positive",
                banner
            )));
        }
        if self.pity.threshold == 0 {
            return Err(GachaError::config(format!(
                "{} banner: pity threshold must be positive",
                banner
            )));
        }
        if self.currency == Currency::Gold {
            return Err(GachaError::config(format!(
                "{} banner: gold cannot be spent on draws",
                banner
            )));
        }
        Ok(())
    }
}

/// 新存档的初始货币
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartingBalances {
    pub shards: u32,
    pub advanced_stones: u32,
    pub gold: u32,
}

impl Default for StartingBalances {
    fn default() -> Self {
        Self {
            shards: 120,
            advanced_stones: 6,
            gold: 200,
        }
    }
}

impl StartingBalances {
    pub fn get(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Shards => self.shards,
            Currency::AdvancedStones => self.advanced_stones,
            Currency::Gold => self.gold,
        }
    }
}

/// 抽卡系统完整配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GachaConfig {
    pub standard: BannerConfig,
    pub advanced: BannerConfig,
    #[serde(default)]
    pub starting: StartingBalances,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            standard: BannerConfig::standard(),
            advanced: BannerConfig::advanced(),
            starting: StartingBalances::default(),
        }
    }
}

impl GachaConfig {
    pub fn banner(&self, banner: Banner) -> &BannerConfig {
        match banner {
            Banner::Standard => &self.standard,
            Banner::Advanced => &self.advanced,
        }
    }

    /// 启动时校验，失败即为致命错误
    pub fn validate(&self) -> Result<(), GachaError> {
        self.standard.validate(Banner::Standard)?;
        self.advanced.validate(Banner::Advanced)?;
        Ok(())
    }

    /// 从JSON解析并校验
    pub fn from_json_str(json: &str) -> Result<Self, GachaError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GachaError::config(format!("invalid config json: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GachaError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
