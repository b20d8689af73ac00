//! Chakra Rogue 抽卡系统
//!
//! 两个卡池（常驻/高级）、加权稀有度、保底机制与持久化仓库。

pub mod summoner;

pub use error::{GachaError, handle_error};
pub use gacha::{
    Banner, Currency, DrawEngine, GachaConfig, GachaRng, Ledger, RandomSource, ScriptedRng,
    StartingBalances,
};
pub use roster::{CharacterInstance, CharacterTemplate, Rarity, Roster};
pub use save::{FileBackend, InventoryStore, MemoryBackend};
pub use summoner::{Balances, PityStatus, SummonOutcome, Summoner};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 安装日志订阅者，`RUST_LOG` 优先于默认过滤规则
pub fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chakra_gacha=info,gacha=info,save=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_installs_once() {
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
