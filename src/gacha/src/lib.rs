//! 抽卡核心：稀有度掷骰、保底计数与抽卡引擎

pub mod account;
pub mod banner;
pub mod config;
pub mod engine;
pub mod pity;
pub mod rates;
pub mod rng;

pub use account::{Account, Ledger};
pub use banner::{Banner, Currency};
pub use config::{BATCH_SIZE, BannerConfig, GachaConfig, StartingBalances};
pub use engine::DrawEngine;
pub use pity::{PityOutcome, PityRule, PityTracker};
pub use rates::RateTable;
pub use rng::{GachaRng, RandomSource, ScriptedRng};
