// src/gacha/src/rng.rs

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// 随机源：产生 [0,1) 区间内均匀分布的实数
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// 在 `0..len` 中均匀选取一个下标
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// 抽卡专用的确定性RNG
#[derive(Debug, Clone)]
pub struct GachaRng {
    rng: Pcg32,
    seed: u64,
}

impl GachaRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// 使用随机种子创建
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// 当前种子（用于日志与回放）
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GachaRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// 按固定序列循环返回数值的随机源，用于测试和回放
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedRng {
    /// 数值会被限制在 [0,1) 内
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 0.999_999_999))
            .collect();
        Self { values, index: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// 已消耗的数值个数
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
