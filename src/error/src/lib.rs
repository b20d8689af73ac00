//! 抽卡系统错误处理模块
//!
//! 统一描述配置、货币结算与存档读写过程中可能出现的错误。

use thiserror::Error;

/// 抽卡过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GachaError {
    /// 配置错误（概率表总和不为100、稀有度分组为空等），只会在启动时出现
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 货币不足，调用方可在补充货币后重试
    #[error("Insufficient {currency}: need {required}, have {available}")]
    InsufficientCurrency {
        currency: String,
        required: u32,
        available: u32,
    },

    /// 存档数据损坏（读取时回退为默认值，不会传递给抽卡调用方）
    #[error("Corrupted persisted value: {0}")]
    PersistenceRead(String),

    /// 存档写入失败
    #[error("Persistence error: {0}")]
    PersistenceWrite(#[from] anyhow::Error),

    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GachaError {
    /// 构造配置错误
    pub fn config(msg: impl Into<String>) -> Self {
        GachaError::Configuration(msg.into())
    }

    /// 是否可由玩家自行恢复
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GachaError::InsufficientCurrency { .. })
    }
}

/// 处理错误并转换为用户友好的消息
pub fn handle_error(error: &GachaError) -> String {
    match error {
        GachaError::InsufficientCurrency {
            currency,
            required,
            available,
        } => format!("{}不足：需要 {}，当前 {}", currency, required, available),
        GachaError::Configuration(msg) => format!("卡池配置错误: {}", msg),
        GachaError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "存档文件不存在".to_string(),
            std::io::ErrorKind::PermissionDenied => "没有权限访问存档文件".to_string(),
            _ => format!("IO错误: {}", e),
        },
        _ => error.to_string(),
    }
}
