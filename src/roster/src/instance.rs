// src/roster/src/instance.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rarity::Rarity;
use crate::skill::Skill;
use crate::template::{CharacterTemplate, TemplateFlag};

/// 玩家拥有的角色实例
///
/// 只在抽卡成功时由模板生成。`skills` 是模板技能的深拷贝，
/// 之后对实例技能的强化不会影响图鉴。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInstance {
    pub uid: Uuid,
    /// 指向图鉴模板的id（仅引用，不持有模板）
    pub template_id: String,
    pub name: String,
    pub rarity: Rarity,
    pub skills: Vec<Skill>,
    pub level: u32,
    pub xp: u32,
    pub atk: u32,
    pub hp: u32,
    pub hp_max: u32,
    pub obtained_at: DateTime<Utc>,
    #[serde(default)]
    pub flags: Vec<TemplateFlag>,
}

impl CharacterInstance {
    /// 从模板生成新实例（新uid，属性取模板基础值）
    pub fn from_template(template: &CharacterTemplate, obtained_at: DateTime<Utc>) -> Self {
        Self {
            uid: Uuid::new_v4(),
            template_id: template.id.clone(),
            name: template.name.clone(),
            rarity: template.rarity,
            skills: template.skills.clone(),
            level: 1,
            xp: 0,
            atk: template.base_atk,
            hp: template.base_hp,
            hp_max: template.base_hp,
            obtained_at,
            flags: template.special_flags.clone(),
        }
    }

    pub fn is_at_least(&self, rarity: Rarity) -> bool {
        self.rarity >= rarity
    }
}
