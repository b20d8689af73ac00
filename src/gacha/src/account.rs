// src/gacha/src/account.rs

use error::GachaError;
use roster::CharacterInstance;
use serde::{Deserialize, Serialize};

use crate::banner::Currency;
use crate::config::StartingBalances;
use crate::pity::PityTracker;

/// 玩家账户：货币余额、保底计数与已拥有角色
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub shards: u32,
    pub advanced_stones: u32,
    pub gold: u32,
    pub pity: PityTracker,
    /// 按获得顺序排列
    pub characters: Vec<CharacterInstance>,
}

impl Account {
    pub fn new(starting: StartingBalances) -> Self {
        Self {
            shards: starting.shards,
            advanced_stones: starting.advanced_stones,
            gold: starting.gold,
            pity: PityTracker::default(),
            characters: Vec::new(),
        }
    }

    pub fn balance(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Shards => self.shards,
            Currency::AdvancedStones => self.advanced_stones,
            Currency::Gold => self.gold,
        }
    }

    fn balance_mut(&mut self, currency: Currency) -> &mut u32 {
        match currency {
            Currency::Shards => &mut self.shards,
            Currency::AdvancedStones => &mut self.advanced_stones,
            Currency::Gold => &mut self.gold,
        }
    }

    /// 扣除货币，余额不足时不做任何修改
    pub fn debit(&mut self, currency: Currency, amount: u32) -> Result<u32, GachaError> {
        let balance = self.balance_mut(currency);
        if *balance < amount {
            return Err(GachaError::InsufficientCurrency {
                currency: currency.to_string(),
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(*balance)
    }

    /// 增加货币，返回新余额
    pub fn credit(&mut self, currency: Currency, amount: u32) -> u32 {
        let balance = self.balance_mut(currency);
        *balance = balance.saturating_add(amount);
        *balance
    }

    pub fn append_instance(&mut self, instance: CharacterInstance) {
        self.characters.push(instance);
    }

    pub fn instances(&self) -> &[CharacterInstance] {
        &self.characters
    }

    /// 拥有某模板的实例数量
    pub fn owned_count(&self, template_id: &str) -> usize {
        self.characters
            .iter()
            .filter(|c| c.template_id == template_id)
            .count()
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(StartingBalances::default())
    }
}

/// 账户存储接口
///
/// 抽卡引擎只通过 `transact` 修改账户：闭包在账户副本上执行，
/// 成功且提交成功后才生效，否则账户保持不变。
pub trait Ledger {
    fn account(&self) -> &Account;

    fn transact<T, F>(&mut self, f: F) -> Result<T, GachaError>
    where
        F: FnOnce(&mut Account) -> Result<T, GachaError>;

    fn balance(&self, currency: Currency) -> u32 {
        self.account().balance(currency)
    }

    fn debit(&mut self, currency: Currency, amount: u32) -> Result<u32, GachaError> {
        self.transact(|account| account.debit(currency, amount))
    }

    fn credit(&mut self, currency: Currency, amount: u32) -> Result<u32, GachaError> {
        self.transact(|account| Ok(account.credit(currency, amount)))
    }

    fn append_instance(&mut self, instance: CharacterInstance) -> Result<(), GachaError> {
        self.transact(|account| {
            account.append_instance(instance);
            Ok(())
        })
    }

    fn list_instances(&self) -> &[CharacterInstance] {
        self.account().instances()
    }
}

/// 纯内存账户
impl Ledger for Account {
    fn account(&self) -> &Account {
        self
    }

    fn transact<T, F>(&mut self, f: F) -> Result<T, GachaError>
    where
        F: FnOnce(&mut Account) -> Result<T, GachaError>,
    {
        let mut scratch = self.clone();
        let out = f(&mut scratch)?;
        *self = scratch;
        Ok(out)
    }
}
