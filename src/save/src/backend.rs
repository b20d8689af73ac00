// src/save/src/backend.rs

use anyhow::{Context, Result};
use bincode::config;
use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::warn;

/// 字符串键值存储
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 一次写入多个键值，要么全部成功，要么全部不生效
    fn put_all(&mut self, entries: &[(&str, String)]) -> Result<()>;

    /// 打开时存档已损坏并回退为空表
    fn recovered_from_corruption(&self) -> bool {
        false
    }
}

/// 内存存储，用于测试
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接写入原始值（绕过校验，可写入损坏数据）
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}

/// 存档文件解码上限
pub const SAVE_SIZE_LIMIT: usize = 16 * 1024 * 1024;

/// 单文件存储：整个键值表以bincode编码写入一个文件
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    recovered: bool,
}

impl FileBackend {
    /// 打开存档文件，不存在时创建空表
    ///
    /// 文件损坏时回退为空表并记录警告，原文件移到 `.corrupt` 以便恢复。
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).context("Failed to create save directory")?;
            }
        }

        let mut recovered = false;
        let entries = if path.is_file() {
            let mut file =
                fs::File::open(&path).context(format!("Failed to open save file: {:?}", path))?;
            let decoded: Result<BTreeMap<String, String>, _> = bincode::decode_from_std_read(
                &mut file,
                config::standard().with_limit::<SAVE_SIZE_LIMIT>(),
            );
            drop(file);
            match decoded {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = ?path, error = %e, "corrupted save file, starting empty");
                    let aside = path.with_extension("corrupt");
                    if let Err(e) = fs::rename(&path, &aside) {
                        warn!(path = ?aside, error = %e, "failed to move corrupted save aside");
                    }
                    recovered = true;
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries,
            recovered,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        // 创建临时文件
        let temp_path = self.path.with_extension("tmp");
        let mut file =
            fs::File::create(&temp_path).context("Failed to create temporary save file")?;

        bincode::encode_into_std_write(entries, &mut file, config::standard())
            .context("Failed to serialize save data")?;

        // 确保数据写入磁盘
        file.flush().context("Failed to flush save data")?;

        // 原子性重命名
        fs::rename(temp_path, &self.path).context("Failed to commit save file")?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        let mut next = self.entries.clone();
        for (key, value) in entries {
            next.insert(key.to_string(), value.clone());
        }
        self.write(&next)?;
        self.entries = next;
        Ok(())
    }

    fn recovered_from_corruption(&self) -> bool {
        self.recovered
    }
}
