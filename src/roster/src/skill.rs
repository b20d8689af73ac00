// src/roster/src/skill.rs

use serde::{Deserialize, Serialize};

/// 技能类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Ultimate,
    Skill,
    Utility,
    Aoe,
    Ultimate2,
}

/// 角色技能（模板中不可变，实例中为独立副本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    /// 辅助技能为0
    pub power: u32,
    /// 冷却回合数
    pub cooldown: u32,
    pub desc: String,
}

impl Skill {
    pub fn new(
        id: &str,
        name: &str,
        kind: SkillKind,
        power: u32,
        cooldown: u32,
        desc: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            power,
            cooldown,
            desc: desc.to_string(),
        }
    }
}
