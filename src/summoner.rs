// src/summoner.rs
//! 面向展示层的抽卡入口

use std::path::Path;

use error::GachaError;
use gacha::{
    Banner, Currency, DrawEngine, GachaConfig, GachaRng, Ledger, PityRule, RandomSource,
};
use roster::{CharacterInstance, Roster};
use save::{FileBackend, InventoryStore};
use serde::Serialize;
use tracing::info;

/// 一次召唤的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummonOutcome {
    Single(CharacterInstance),
    Batch(Vec<CharacterInstance>),
}

impl SummonOutcome {
    pub fn instances(&self) -> &[CharacterInstance] {
        match self {
            SummonOutcome::Single(c) => std::slice::from_ref(c),
            SummonOutcome::Batch(batch) => batch,
        }
    }
}

/// 当前余额快照（展示层在每次抽卡后刷新）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    pub shards: u32,
    pub advanced_stones: u32,
    pub gold: u32,
}

/// 保底进度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PityStatus {
    pub count: u32,
    pub remaining: u32,
    pub rule: PityRule,
}

pub struct Summoner<L: Ledger, R: RandomSource> {
    engine: DrawEngine<R>,
    ledger: L,
}

impl Summoner<InventoryStore<FileBackend>, GachaRng> {
    /// 使用内置图鉴与文件存档
    pub fn open_file(path: impl AsRef<Path>, config: GachaConfig) -> Result<Self, GachaError> {
        let starting = config.starting;
        let rng = GachaRng::from_entropy();
        let seed = rng.seed();
        let engine = DrawEngine::new(config, Roster::builtin()?, rng)?;
        let ledger = InventoryStore::open_file(path, starting)?;
        info!(seed, "summoner ready");
        Ok(Self { engine, ledger })
    }
}

impl<L: Ledger, R: RandomSource> Summoner<L, R> {
    pub fn new(engine: DrawEngine<R>, ledger: L) -> Self {
        Self { engine, ledger }
    }

    /// 常驻池召唤，`count` 只能为1或10
    ///
    /// 货币不足时返回 `Ok(None)`，不修改任何状态。
    pub fn do_summon_standard(&mut self, count: u32) -> Result<Option<SummonOutcome>, GachaError> {
        self.summon(Banner::Standard, count)
    }

    /// 高级池召唤，`count` 只能为1或10
    pub fn do_summon_advanced(&mut self, count: u32) -> Result<Option<SummonOutcome>, GachaError> {
        self.summon(Banner::Advanced, count)
    }

    pub fn summon(
        &mut self,
        banner: Banner,
        count: u32,
    ) -> Result<Option<SummonOutcome>, GachaError> {
        let result = match count {
            1 => self
                .engine
                .draw_single(&mut self.ledger, banner)
                .map(SummonOutcome::Single),
            10 => self
                .engine
                .draw_ten(&mut self.ledger, banner)
                .map(SummonOutcome::Batch),
            other => {
                return Err(GachaError::config(format!(
                    "summon count must be 1 or 10, got {}",
                    other
                )));
            }
        };

        match result {
            Ok(outcome) => Ok(Some(outcome)),
            Err(GachaError::InsufficientCurrency { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// 补充货币
    pub fn grant(&mut self, currency: Currency, amount: u32) -> Result<u32, GachaError> {
        self.ledger.credit(currency, amount)
    }

    pub fn balances(&self) -> Balances {
        Balances {
            shards: self.ledger.balance(Currency::Shards),
            advanced_stones: self.ledger.balance(Currency::AdvancedStones),
            gold: self.ledger.balance(Currency::Gold),
        }
    }

    pub fn pity_status(&self, banner: Banner) -> PityStatus {
        let rule = self.engine.config().banner(banner).pity;
        let pity = &self.ledger.account().pity;
        PityStatus {
            count: pity.count(banner),
            remaining: pity.remaining(banner, rule),
            rule,
        }
    }

    /// 已拥有角色（按获得顺序）
    pub fn collection(&self) -> &[CharacterInstance] {
        self.ledger.list_instances()
    }

    pub fn owned_count(&self, template_id: &str) -> usize {
        self.ledger.account().owned_count(template_id)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn engine(&self) -> &DrawEngine<R> {
        &self.engine
    }
}
