//! 货币与角色仓库
//!
//! 唯一产生持久化副作用的组件。存档为字符串键值表：
//! `characters` 为JSON数组，`shards`/`advancedStones`/`gold`/`pity_standard`/`pity_advanced`
//! 为字符串形式的整数。读取时缺失或损坏的值回退为默认值并记录警告，不会报错给调用方。

pub mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use error::GachaError;
use gacha::{Account, Banner, Currency, Ledger, PityTracker, StartingBalances};
use roster::CharacterInstance;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// 角色列表的键
pub const CHARACTERS_KEY: &str = "characters";

/// 持久化的玩家仓库
pub struct InventoryStore<B: StorageBackend> {
    backend: B,
    account: Account,
}

impl InventoryStore<MemoryBackend> {
    /// 全新的内存仓库
    pub fn in_memory(starting: StartingBalances) -> Result<Self, GachaError> {
        Self::open(MemoryBackend::new(), starting)
    }
}

impl InventoryStore<FileBackend> {
    pub fn open_file(
        path: impl AsRef<Path>,
        starting: StartingBalances,
    ) -> Result<Self, GachaError> {
        Self::open(FileBackend::open(path)?, starting)
    }
}

impl<B: StorageBackend> InventoryStore<B> {
    /// 打开仓库
    ///
    /// 缺失的货币键写入初始值；已存在的值（即使损坏）不会被覆盖。
    /// 存档整体损坏时不写入初始值，也不在打开时写回存储。
    pub fn open(mut backend: B, starting: StartingBalances) -> Result<Self, GachaError> {
        if backend.recovered_from_corruption() {
            warn!("save recovered from corruption, skipping default balances");
        } else {
            seed_defaults(&mut backend, starting)?;
        }
        let account = load_account(&backend);
        Ok(Self { backend, account })
    }

    /// 从存储重新读取
    pub fn reload(&mut self) {
        self.account = load_account(&self.backend);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: StorageBackend> Ledger for InventoryStore<B> {
    fn account(&self) -> &Account {
        &self.account
    }

    fn transact<T, F>(&mut self, f: F) -> Result<T, GachaError>
    where
        F: FnOnce(&mut Account) -> Result<T, GachaError>,
    {
        let mut scratch = self.account.clone();
        let out = f(&mut scratch)?;

        let entries = to_entries(&scratch)?;
        self.backend.put_all(&entries)?;

        self.account = scratch;
        Ok(out)
    }
}

fn seed_defaults<B: StorageBackend>(
    backend: &mut B,
    starting: StartingBalances,
) -> Result<(), GachaError> {
    let mut missing = Vec::new();
    for currency in Currency::iter() {
        match backend.get(currency.key()) {
            Ok(Some(_)) => {}
            Ok(None) => missing.push((currency.key(), starting.get(currency).to_string())),
            Err(e) => warn!(
                key = currency.key(),
                error = %e,
                "failed to read currency, not seeding"
            ),
        }
    }

    if !missing.is_empty() {
        let keys: Vec<&str> = missing.iter().map(|(k, _)| *k).collect();
        debug!(?keys, "seeding default balances");
        backend.put_all(&missing)?;
    }
    Ok(())
}

fn load_account<B: StorageBackend>(backend: &B) -> Account {
    Account {
        shards: read_counter(backend, Currency::Shards.key()),
        advanced_stones: read_counter(backend, Currency::AdvancedStones.key()),
        gold: read_counter(backend, Currency::Gold.key()),
        pity: PityTracker {
            standard: read_counter(backend, Banner::Standard.pity_key()),
            advanced: read_counter(backend, Banner::Advanced.pity_key()),
        },
        characters: read_characters(backend),
    }
}

fn read_raw<B: StorageBackend>(backend: &B, key: &str) -> Option<String> {
    match backend.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "storage read failed, using fallback");
            None
        }
    }
}

fn parse_counter(key: &str, raw: &str) -> Result<u32, GachaError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| GachaError::PersistenceRead(format!("{} = {:?}: {}", key, raw, e)))
}

/// 读取整数值，缺失或损坏时为0
fn read_counter<B: StorageBackend>(backend: &B, key: &str) -> u32 {
    let Some(raw) = read_raw(backend, key) else {
        return 0;
    };
    parse_counter(key, &raw).unwrap_or_else(|e| {
        warn!(error = %e, "malformed counter, using 0");
        0
    })
}

/// 读取角色列表
///
/// 整体不是JSON数组时回退为空列表；单个条目损坏时跳过该条目。
fn read_characters<B: StorageBackend>(backend: &B) -> Vec<CharacterInstance> {
    let Some(raw) = read_raw(backend, CHARACTERS_KEY) else {
        return Vec::new();
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            let err = GachaError::PersistenceRead(format!("{}: {}", CHARACTERS_KEY, e));
            warn!(error = %err, "malformed character list, using empty list");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value(value) {
            Ok(instance) => Some(instance),
            Err(e) => {
                let err =
                    GachaError::PersistenceRead(format!("{}[{}]: {}", CHARACTERS_KEY, idx, e));
                warn!(error = %err, "skipping malformed character");
                None
            }
        })
        .collect()
}

fn to_entries(account: &Account) -> Result<Vec<(&'static str, String)>, GachaError> {
    let characters = serde_json::to_string(&account.characters)
        .map_err(|e| GachaError::PersistenceWrite(anyhow::Error::new(e)))?;
    Ok(vec![
        (CHARACTERS_KEY, characters),
        (Currency::Shards.key(), account.shards.to_string()),
        (Currency::AdvancedStones.key(), account.advanced_stones.to_string()),
        (Currency::Gold.key(), account.gold.to_string()),
        (Banner::Standard.pity_key(), account.pity.standard.to_string()),
        (Banner::Advanced.pity_key(), account.pity.advanced.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use gacha::{DrawEngine, GachaConfig, ScriptedRng};
    use pretty_assertions::assert_eq;
    use roster::Roster;

    fn engine() -> DrawEngine<ScriptedRng> {
        DrawEngine::new(
            GachaConfig::default(),
            Roster::builtin().unwrap(),
            ScriptedRng::constant(0.99),
        )
        .unwrap()
    }

    #[test]
    fn fresh_store_is_seeded() {
        let store = InventoryStore::in_memory(StartingBalances::default()).unwrap();
        assert_eq!(store.balance(Currency::Shards), 120);
        assert_eq!(store.balance(Currency::AdvancedStones), 6);
        assert_eq!(store.balance(Currency::Gold), 200);
        assert_eq!(store.backend().raw("shards"), Some("120"));
        assert!(store.list_instances().is_empty());
    }

    #[test]
    fn seeding_never_overwrites_existing_values() {
        let mut backend = MemoryBackend::new();
        backend.insert("shards", "7");
        backend.insert("gold", "not-a-number");

        let store = InventoryStore::open(backend, StartingBalances::default()).unwrap();

        assert_eq!(store.balance(Currency::Shards), 7);
        assert_eq!(store.balance(Currency::AdvancedStones), 6);
        // 损坏的值保持原样，读取时回退为0
        assert_eq!(store.balance(Currency::Gold), 0);
        assert_eq!(store.backend().raw("gold"), Some("not-a-number"));
    }

    #[test]
    fn reopening_does_not_reseed() {
        let mut store = InventoryStore::in_memory(StartingBalances::default()).unwrap();
        store.debit(Currency::Shards, 100).unwrap();

        let store =
            InventoryStore::open(store.into_backend(), StartingBalances::default()).unwrap();
        assert_eq!(store.balance(Currency::Shards), 20);
    }

    #[test]
    fn malformed_values_fall_back() {
        let mut backend = MemoryBackend::new();
        backend.insert("pity_standard", "-3");
        backend.insert("pity_advanced", " 12 ");
        backend.insert(CHARACTERS_KEY, "{not json");

        let store = InventoryStore::open(backend, StartingBalances::default()).unwrap();

        assert_eq!(store.account().pity.standard, 0);
        assert_eq!(store.account().pity.advanced, 12);
        assert!(store.list_instances().is_empty());
    }

    #[test]
    fn corrupt_character_entries_are_skipped() {
        let mut store = InventoryStore::in_memory(StartingBalances::default()).unwrap();
        engine().draw_single(&mut store, Banner::Standard).unwrap();
        let good = store.list_instances()[0].clone();

        let mut backend = store.into_backend();
        let list = format!("[{}, {{\"uid\": 5}}]", serde_json::to_string(&good).unwrap());
        backend.insert(CHARACTERS_KEY, list);

        let store = InventoryStore::open(backend, StartingBalances::default()).unwrap();
        assert_eq!(store.list_instances(), &[good]);
    }

    #[test]
    fn draws_are_written_through() {
        let mut store = InventoryStore::in_memory(StartingBalances::default()).unwrap();
        engine().draw_single(&mut store, Banner::Standard).unwrap();

        assert_eq!(store.backend().raw("shards"), Some("95"));
        assert_eq!(store.backend().raw("pity_standard"), Some("1"));

        let mut copy =
            InventoryStore::open(store.backend().clone(), StartingBalances::default()).unwrap();
        copy.reload();
        assert_eq!(copy.account(), store.account());
    }

    #[test]
    fn character_list_roundtrip_keeps_order() {
        let mut store = InventoryStore::in_memory(StartingBalances::default()).unwrap();
        store.credit(Currency::Shards, 240).unwrap();
        let mut engine = DrawEngine::new(
            GachaConfig::default(),
            Roster::builtin().unwrap(),
            gacha::GachaRng::new(77),
        )
        .unwrap();
        engine.draw_ten(&mut store, Banner::Standard).unwrap();

        let reloaded =
            InventoryStore::open(store.backend().clone(), StartingBalances::default()).unwrap();
        assert_eq!(reloaded.list_instances(), store.list_instances());
    }

    #[test]
    fn failed_draw_writes_nothing() {
        let mut store = InventoryStore::in_memory(StartingBalances::default()).unwrap();
        let before = store.backend().clone();

        let err = engine().draw_ten(&mut store, Banner::Advanced).unwrap_err();

        assert!(err.is_recoverable());
        assert_eq!(store.backend(), &before);
        assert!(store.list_instances().is_empty());
    }

    #[test]
    fn corrupted_file_is_not_reseeded_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gacha.sav");

        let mut store = InventoryStore::open_file(&path, StartingBalances::default()).unwrap();
        store.debit(Currency::Shards, 100).unwrap();
        drop(store);

        let bytes = std::fs::read(&path).unwrap();
        let truncated = &bytes[..bytes.len() - 3];
        std::fs::write(&path, truncated).unwrap();

        let store = InventoryStore::open_file(&path, StartingBalances::default()).unwrap();

        assert_ne!(store.balance(Currency::Shards), 120);
        assert_eq!(store.balance(Currency::Shards), 0);
        assert!(!path.exists(), "nothing is written on open");
        let aside = std::fs::read(path.with_extension("corrupt")).unwrap();
        assert_eq!(aside.as_slice(), truncated);
    }

    #[test]
    fn file_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gacha.sav");

        let mut store = InventoryStore::open_file(&path, StartingBalances::default()).unwrap();
        let drawn = engine().draw_single(&mut store, Banner::Standard).unwrap();
        drop(store);

        let store = InventoryStore::open_file(&path, StartingBalances::default()).unwrap();
        assert_eq!(store.balance(Currency::Shards), 95);
        assert_eq!(store.list_instances(), &[drawn]);
    }
}
