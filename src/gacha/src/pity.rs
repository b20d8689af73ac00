// src/gacha/src/pity.rs

use roster::Rarity;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::banner::Banner;

/// 保底规则：连续 `threshold` 次未达到 `floor` 时强制给出 `floor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityRule {
    pub threshold: u32,
    pub floor: Rarity,
}

/// 保底修正结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PityOutcome {
    pub rarity: Rarity,
    pub reset: bool,
}

/// 各卡池独立的保底计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityTracker {
    pub standard: u32,
    pub advanced: u32,
}

impl PityTracker {
    pub fn count(&self, banner: Banner) -> u32 {
        match banner {
            Banner::Standard => self.standard,
            Banner::Advanced => self.advanced,
        }
    }

    fn counter_mut(&mut self, banner: Banner) -> &mut u32 {
        match banner {
            Banner::Standard => &mut self.standard,
            Banner::Advanced => &mut self.advanced,
        }
    }

    /// 记录一次单抽，返回新的计数
    pub fn record_draw(&mut self, banner: Banner) -> u32 {
        let counter = self.counter_mut(banner);
        *counter = counter.saturating_add(1);
        *counter
    }

    /// 根据保底规则修正掷出的稀有度
    pub fn apply_guarantee(
        &mut self,
        banner: Banner,
        rolled: Rarity,
        rule: PityRule,
    ) -> PityOutcome {
        let count = self.count(banner);
        if rolled < rule.floor && count >= rule.threshold {
            debug!(%banner, count, floor = %rule.floor, "pity guarantee fired");
            *self.counter_mut(banner) = 0;
            PityOutcome {
                rarity: rule.floor,
                reset: true,
            }
        } else if rolled >= rule.floor {
            *self.counter_mut(banner) = 0;
            PityOutcome {
                rarity: rolled,
                reset: true,
            }
        } else {
            PityOutcome {
                rarity: rolled,
                reset: false,
            }
        }
    }

    /// 距离保底触发还需的抽数
    pub fn remaining(&self, banner: Banner, rule: PityRule) -> u32 {
        rule.threshold.saturating_sub(self.count(banner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: PityRule = PityRule {
        threshold: 50,
        floor: Rarity::Four,
    };

    const ADVANCED: PityRule = PityRule {
        threshold: 30,
        floor: Rarity::Four,
    };

    #[test]
    fn counters_are_independent() {
        let mut pity = PityTracker::default();
        assert_eq!(pity.record_draw(Banner::Standard), 1);
        assert_eq!(pity.record_draw(Banner::Standard), 2);
        assert_eq!(pity.record_draw(Banner::Advanced), 1);
        assert_eq!(pity.count(Banner::Standard), 2);
        assert_eq!(pity.count(Banner::Advanced), 1);
    }

    #[test]
    fn below_threshold_keeps_roll_and_count() {
        let mut pity = PityTracker {
            standard: 49,
            advanced: 0,
        };
        let outcome = pity.apply_guarantee(Banner::Standard, Rarity::Three, STANDARD);
        assert_eq!(outcome.rarity, Rarity::Three);
        assert!(!outcome.reset);
        assert_eq!(pity.standard, 49);
    }

    #[test]
    fn threshold_forces_floor_and_resets() {
        let mut pity = PityTracker {
            standard: 49,
            advanced: 7,
        };
        pity.record_draw(Banner::Standard);
        let outcome = pity.apply_guarantee(Banner::Standard, Rarity::Three, STANDARD);
        assert_eq!(outcome.rarity, Rarity::Four);
        assert!(outcome.reset);
        assert_eq!(pity.standard, 0);
        assert_eq!(pity.advanced, 7);
    }

    #[test]
    fn natural_hit_resets_regardless_of_threshold() {
        let mut pity = PityTracker {
            standard: 3,
            advanced: 0,
        };
        let outcome = pity.apply_guarantee(Banner::Standard, Rarity::Five, STANDARD);
        assert_eq!(outcome.rarity, Rarity::Five);
        assert!(outcome.reset);
        assert_eq!(pity.standard, 0);
    }

    #[test]
    fn remaining_counts_down() {
        let pity = PityTracker {
            standard: 20,
            advanced: 40,
        };
        assert_eq!(pity.remaining(Banner::Standard, STANDARD), 30);
        assert_eq!(pity.remaining(Banner::Advanced, ADVANCED), 0);
        let fresh = PityTracker::default();
        assert_eq!(fresh.remaining(Banner::Advanced, ADVANCED), 30);
    }
}
