// src/roster/src/template.rs

use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;
use crate::skill::Skill;

/// 元素属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Lightning,
    Shadow,
    Light,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Element::Fire => "火",
                Element::Water => "水",
                Element::Wind => "风",
                Element::Earth => "土",
                Element::Lightning => "雷",
                Element::Shadow => "暗",
                Element::Light => "光",
            }
        )
    }
}

/// 模板特殊标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateFlag {
    /// 神话级角色
    Mythic,
    /// 拥有稀有技能组的3★角色
    Rare3Skill,
}

/// 角色模板（图鉴静态定义，不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTemplate {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub element: Element,
    pub skills: Vec<Skill>,
    pub base_atk: u32,
    pub base_hp: u32,
    /// 仅用于展示的战力评分
    pub power: u32,
    #[serde(default)]
    pub special_flags: Vec<TemplateFlag>,
}

impl CharacterTemplate {
    pub fn has_flag(&self, flag: TemplateFlag) -> bool {
        self.special_flags.contains(&flag)
    }

    /// 技能数量是否符合该稀有度的设计
    pub fn has_valid_skill_count(&self) -> bool {
        self.rarity
            .allowed_skill_counts()
            .contains(&self.skills.len())
    }
}
