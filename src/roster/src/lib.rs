//! 角色图鉴
//!
//! 启动时构建一次的只读注册表，按稀有度分为 3★/4★/5★ 三组。

pub mod catalog;
pub mod instance;
pub mod rarity;
pub mod skill;
pub mod template;

pub use instance::CharacterInstance;
pub use rarity::Rarity;
pub use skill::{Skill, SkillKind};
pub use template::{CharacterTemplate, Element, TemplateFlag};

use error::GachaError;
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// 按稀有度分组的角色图鉴
#[derive(Debug, Clone)]
pub struct Roster {
    three: Vec<CharacterTemplate>,
    four: Vec<CharacterTemplate>,
    five: Vec<CharacterTemplate>,
}

impl Roster {
    /// 校验并构建图鉴
    ///
    /// 任一稀有度为空、id重复或技能数量不符合设计时返回配置错误。
    pub fn new(templates: Vec<CharacterTemplate>) -> Result<Self, GachaError> {
        let mut seen = HashSet::new();
        let mut roster = Self {
            three: Vec::new(),
            four: Vec::new(),
            five: Vec::new(),
        };

        for template in templates {
            if !seen.insert(template.id.clone()) {
                return Err(GachaError::config(format!(
                    "duplicate template id '{}'",
                    template.id
                )));
            }
            if !template.has_valid_skill_count() {
                return Err(GachaError::config(format!(
                    "template '{}' has {} skills, {} allows {:?}",
                    template.id,
                    template.skills.len(),
                    template.rarity,
                    template.rarity.allowed_skill_counts()
                )));
            }
            roster.group_mut(template.rarity).push(template);
        }

        for rarity in Rarity::iter() {
            if roster.group(rarity).is_empty() {
                return Err(GachaError::config(format!(
                    "no templates for rarity {}",
                    rarity
                )));
            }
        }

        Ok(roster)
    }

    /// 内置图鉴
    pub fn builtin() -> Result<Self, GachaError> {
        Self::new(catalog::all_templates())
    }

    /// 获取指定稀有度的全部模板（非空，按定义顺序）
    pub fn templates_of_rarity(&self, rarity: Rarity) -> &[CharacterTemplate] {
        self.group(rarity)
    }

    /// 按id查找模板
    pub fn find(&self, id: &str) -> Option<&CharacterTemplate> {
        self.iter().find(|t| t.id == id)
    }

    /// 遍历全部模板（按稀有度从高到低）
    pub fn iter(&self) -> impl Iterator<Item = &CharacterTemplate> {
        self.five.iter().chain(self.four.iter()).chain(self.three.iter())
    }

    pub fn len(&self) -> usize {
        self.three.len() + self.four.len() + self.five.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn group(&self, rarity: Rarity) -> &[CharacterTemplate] {
        match rarity {
            Rarity::Three => &self.three,
            Rarity::Four => &self.four,
            Rarity::Five => &self.five,
        }
    }

    fn group_mut(&mut self, rarity: Rarity) -> &mut Vec<CharacterTemplate> {
        match rarity {
            Rarity::Three => &mut self.three,
            Rarity::Four => &mut self.four,
            Rarity::Five => &mut self.five,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_roster_covers_every_tier() {
        let roster = Roster::builtin().unwrap();
        for rarity in Rarity::iter() {
            let group = roster.templates_of_rarity(rarity);
            assert!(!group.is_empty());
            assert!(group.iter().all(|t| t.rarity == rarity));
        }
        assert_eq!(roster.len(), catalog::all_templates().len());
    }

    #[test]
    fn skill_counts_follow_tier_pattern() {
        let roster = Roster::builtin().unwrap();
        for template in roster.iter() {
            assert!(template.has_valid_skill_count(), "{}", template.id);
        }
        let mythic = roster.find("amaterasu_voidfang").unwrap();
        assert_eq!(mythic.skills.len(), 4);
        assert!(mythic.has_flag(TemplateFlag::Mythic));
    }

    #[test]
    fn empty_tier_is_rejected() {
        let templates: Vec<_> = catalog::all_templates()
            .into_iter()
            .filter(|t| t.rarity != Rarity::Four)
            .collect();
        let err = Roster::new(templates).unwrap_err();
        assert!(matches!(err, GachaError::Configuration(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut templates = catalog::all_templates();
        templates.push(templates[0].clone());
        assert!(Roster::new(templates).is_err());
    }

    #[test]
    fn four_star_with_four_skills_is_rejected() {
        let mut templates = catalog::all_templates();
        let extra = templates[0].skills[0].clone();
        let kira = templates
            .iter_mut()
            .find(|t| t.id == "kira_stormleaf")
            .unwrap();
        kira.skills.push(extra);
        assert!(Roster::new(templates).is_err());
    }

    #[test]
    fn find_unknown_returns_none() {
        assert!(Roster::builtin().unwrap().find("nobody").is_none());
    }
}
