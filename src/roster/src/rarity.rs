// src/roster/src/rarity.rs

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// 稀有度（3★最常见，5★最稀有）
///
/// 存档中以整数 3/4/5 表示。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rarity {
    Three,
    Four,
    Five,
}

impl Rarity {
    /// 星级数值
    pub fn stars(self) -> u8 {
        match self {
            Rarity::Three => 3,
            Rarity::Four => 4,
            Rarity::Five => 5,
        }
    }

    /// 该稀有度允许的技能数量
    pub fn allowed_skill_counts(self) -> &'static [usize] {
        match self {
            Rarity::Five => &[3, 4],
            Rarity::Four | Rarity::Three => &[3],
        }
    }
}

impl TryFrom<u8> for Rarity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Rarity::Three),
            4 => Ok(Rarity::Four),
            5 => Ok(Rarity::Five),
            other => Err(format!("unknown rarity {}", other)),
        }
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> Self {
        rarity.stars()
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}★", self.stars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ordering_follows_stars() {
        assert!(Rarity::Five > Rarity::Four);
        assert!(Rarity::Four > Rarity::Three);
        let stars: Vec<u8> = Rarity::iter().map(Rarity::stars).collect();
        assert_eq!(stars, vec![3, 4, 5]);
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Rarity::Four).unwrap(), "4");
        let parsed: Rarity = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, Rarity::Five);
        assert!(serde_json::from_str::<Rarity>("6").is_err());
    }
}
