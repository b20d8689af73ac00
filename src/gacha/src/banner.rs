// src/gacha/src/banner.rs

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// 卡池
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Banner {
    /// 常驻池，消耗碎片
    Standard,
    /// 高级池，消耗高级石
    Advanced,
}

impl Banner {
    /// 保底计数在存档中的键
    pub fn pity_key(self) -> &'static str {
        match self {
            Banner::Standard => "pity_standard",
            Banner::Advanced => "pity_advanced",
        }
    }
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Banner::Standard => "常驻池",
                Banner::Advanced => "高级池",
            }
        )
    }
}

/// 货币种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
    Shards,
    AdvancedStones,
    /// 仅用于展示，抽卡不会修改
    Gold,
}

impl Currency {
    /// 存档中的键
    pub fn key(self) -> &'static str {
        match self {
            Currency::Shards => "shards",
            Currency::AdvancedStones => "advancedStones",
            Currency::Gold => "gold",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
