// src/gacha/src/engine.rs
//! 抽卡引擎
//!
//! 每次抽卡依次经过：扣费 → 掷稀有度 → 保底修正 → 选取模板 → 生成实例 → 存档。
//! 整个过程在一次 `Ledger::transact` 中完成，任何一步失败都不会留下部分修改。

use chrono::Utc;
use error::GachaError;
use roster::{CharacterInstance, Rarity, Roster};
use tracing::{debug, info, warn};

use crate::account::{Account, Ledger};
use crate::banner::Banner;
use crate::config::{BATCH_SIZE, BannerConfig, GachaConfig};
use crate::rng::RandomSource;

pub struct DrawEngine<R: RandomSource> {
    config: GachaConfig,
    roster: Roster,
    rng: R,
}

impl<R: RandomSource> DrawEngine<R> {
    /// 配置在此处校验一次，之后每次抽卡不再检查
    pub fn new(config: GachaConfig, roster: Roster, rng: R) -> Result<Self, GachaError> {
        config.validate()?;
        Ok(Self {
            config,
            roster,
            rng,
        })
    }

    pub fn config(&self) -> &GachaConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// 单抽
    pub fn draw_single<L: Ledger>(
        &mut self,
        ledger: &mut L,
        banner: Banner,
    ) -> Result<CharacterInstance, GachaError> {
        let cfg = self.config.banner(banner).clone();
        let result = ledger.transact(|account| {
            account.debit(cfg.currency, cfg.single_cost)?;
            self.pull(account, banner, &cfg)
        });

        match &result {
            Ok(instance) => info!(
                %banner,
                template = %instance.template_id,
                rarity = %instance.rarity,
                "single draw"
            ),
            Err(e) => warn!(%banner, error = %e, "single draw rejected"),
        }
        result
    }

    /// 十连抽：一次性扣除十连价格，随后进行10次不再扣费的抽取
    pub fn draw_ten<L: Ledger>(
        &mut self,
        ledger: &mut L,
        banner: Banner,
    ) -> Result<Vec<CharacterInstance>, GachaError> {
        let cfg = self.config.banner(banner).clone();
        let result = ledger.transact(|account| {
            account.debit(cfg.currency, cfg.ten_cost)?;

            let mut batch = Vec::with_capacity(BATCH_SIZE);
            for _ in 0..BATCH_SIZE {
                batch.push(self.pull(account, banner, &cfg)?);
            }

            if let Some(floor) = cfg.batch_guarantee {
                if !batch.iter().any(|c| c.is_at_least(floor)) {
                    let slot = self.rng.pick_index(batch.len());
                    let forced = self.instantiate(floor)?;
                    // 被替换的实例仍保留在账户中
                    account.append_instance(forced.clone());
                    info!(
                        %banner,
                        slot,
                        replaced = %batch[slot].template_id,
                        forced = %forced.template_id,
                        "batch guarantee correction"
                    );
                    batch[slot] = forced;
                }
            }
            Ok(batch)
        });

        match &result {
            Ok(batch) => info!(
                %banner,
                best = %batch.iter().map(|c| c.rarity).max().unwrap_or(Rarity::Three),
                "ten draw"
            ),
            Err(e) => warn!(%banner, error = %e, "ten draw rejected"),
        }
        result
    }

    /// 一次不扣费的抽取：推进保底、掷稀有度、保底修正、生成并记录实例
    fn pull(
        &mut self,
        account: &mut Account,
        banner: Banner,
        cfg: &BannerConfig,
    ) -> Result<CharacterInstance, GachaError> {
        let count = account.pity.record_draw(banner);
        let rolled = cfg.rates.roll(&mut self.rng);
        let outcome = account.pity.apply_guarantee(banner, rolled, cfg.pity);
        debug!(
            %banner,
            count,
            rolled = %rolled,
            rarity = %outcome.rarity,
            reset = outcome.reset,
            "rarity roll"
        );

        let instance = self.instantiate(outcome.rarity)?;
        account.append_instance(instance.clone());
        Ok(instance)
    }

    /// 在指定稀有度中均匀选取模板并生成实例
    fn instantiate(&mut self, rarity: Rarity) -> Result<CharacterInstance, GachaError> {
        let group = self.roster.templates_of_rarity(rarity);
        let idx = self.rng.pick_index(group.len());
        let template = group
            .get(idx)
            .ok_or_else(|| GachaError::config(format!("no templates for rarity {}", rarity)))?;
        Ok(CharacterInstance::from_template(template, Utc::now()))
    }
}
