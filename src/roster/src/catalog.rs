// src/roster/src/catalog.rs
//! 内置角色图鉴

use crate::rarity::Rarity;
use crate::skill::{Skill, SkillKind};
use crate::template::{CharacterTemplate, Element, TemplateFlag};

fn template(
    id: &str,
    name: &str,
    rarity: Rarity,
    element: Element,
    stats: (u32, u32, u32), // (攻击, 生命, 战力)
    skills: Vec<Skill>,
    special_flags: Vec<TemplateFlag>,
) -> CharacterTemplate {
    let (base_atk, base_hp, power) = stats;
    CharacterTemplate {
        id: id.to_string(),
        name: name.to_string(),
        rarity,
        element,
        skills,
        base_atk,
        base_hp,
        power,
        special_flags,
    }
}

/// 全部可抽取角色
pub fn all_templates() -> Vec<CharacterTemplate> {
    vec![
        // 5★
        template(
            "ryou_shadowborn",
            "Ryou Shadowborn",
            Rarity::Five,
            Element::Shadow,
            (142, 1180, 2950),
            vec![
                Skill::new(
                    "shadow_step",
                    "Shadow Step",
                    SkillKind::Skill,
                    160,
                    2,
                    "Blink behind the target and strike.",
                ),
                Skill::new(
                    "veil_of_night",
                    "Veil of Night",
                    SkillKind::Utility,
                    0,
                    4,
                    "Become untargetable for one turn.",
                ),
                Skill::new(
                    "thousand_blades",
                    "Thousand Blades",
                    SkillKind::Ultimate,
                    420,
                    6,
                    "A storm of shadow blades.",
                ),
            ],
            vec![],
        ),
        template(
            "amaterasu_voidfang",
            "Amaterasu Voidfang",
            Rarity::Five,
            Element::Light,
            (150, 1240, 3320),
            vec![
                Skill::new(
                    "dawn_lance",
                    "Dawn Lance",
                    SkillKind::Skill,
                    175,
                    2,
                    "Pierce a single foe with light.",
                ),
                Skill::new(
                    "solar_flare",
                    "Solar Flare",
                    SkillKind::Aoe,
                    210,
                    3,
                    "Scorch every enemy on the field.",
                ),
                Skill::new(
                    "heavenly_judgement",
                    "Heavenly Judgement",
                    SkillKind::Ultimate,
                    460,
                    6,
                    "Call down the sun.",
                ),
                Skill::new(
                    "eclipse",
                    "Eclipse",
                    SkillKind::Ultimate2,
                    520,
                    8,
                    "Swallow the light and release it at once.",
                ),
            ],
            vec![TemplateFlag::Mythic],
        ),
        // 4★
        template(
            "kira_stormleaf",
            "Kira Stormleaf",
            Rarity::Four,
            Element::Wind,
            (108, 920, 1980),
            vec![
                Skill::new("gale_cut", "Gale Cut", SkillKind::Skill, 120, 1, "A fast wind slash."),
                Skill::new("tailwind", "Tailwind", SkillKind::Utility, 0, 3, "Raise ally speed."),
                Skill::new(
                    "cyclone_dance",
                    "Cyclone Dance",
                    SkillKind::Ultimate,
                    300,
                    5,
                    "Spin into a razor cyclone.",
                ),
            ],
            vec![],
        ),
        template(
            "jin_emberfist",
            "Jin Emberfist",
            Rarity::Four,
            Element::Fire,
            (115, 880, 2010),
            vec![
                Skill::new("ember_jab", "Ember Jab", SkillKind::Skill, 125, 1, "A burning punch."),
                Skill::new(
                    "firewall",
                    "Firewall",
                    SkillKind::Aoe,
                    140,
                    3,
                    "Raise flames across the front line.",
                ),
                Skill::new(
                    "phoenix_rising",
                    "Phoenix Rising",
                    SkillKind::Ultimate,
                    310,
                    5,
                    "Erupt in a pillar of fire.",
                ),
            ],
            vec![],
        ),
        template(
            "hana_tidecaller",
            "Hana Tidecaller",
            Rarity::Four,
            Element::Water,
            (96, 1010, 1940),
            vec![
                Skill::new(
                    "riptide",
                    "Riptide",
                    SkillKind::Skill,
                    110,
                    1,
                    "Drag the target with a current.",
                ),
                Skill::new(
                    "healing_rain",
                    "Healing Rain",
                    SkillKind::Utility,
                    0,
                    4,
                    "Restore allies' health.",
                ),
                Skill::new(
                    "tsunami",
                    "Tsunami",
                    SkillKind::Ultimate,
                    290,
                    5,
                    "Flood the battlefield.",
                ),
            ],
            vec![],
        ),
        // 3★
        template(
            "sora_mistveil",
            "Sora Mistveil",
            Rarity::Three,
            Element::Water,
            (72, 700, 1210),
            vec![
                Skill::new(
                    "mist_needle",
                    "Mist Needle",
                    SkillKind::Skill,
                    80,
                    1,
                    "A needle of condensed mist.",
                ),
                Skill::new(
                    "fog_screen",
                    "Fog Screen",
                    SkillKind::Utility,
                    0,
                    3,
                    "Lower enemy accuracy.",
                ),
                Skill::new(
                    "drizzle_burst",
                    "Drizzle Burst",
                    SkillKind::Ultimate,
                    190,
                    5,
                    "Burst a cloud of cold rain.",
                ),
            ],
            vec![],
        ),
        template(
            "taro_stonepaw",
            "Taro Stonepaw",
            Rarity::Three,
            Element::Earth,
            (68, 780, 1190),
            vec![
                Skill::new("rock_paw", "Rock Paw", SkillKind::Skill, 75, 1, "A heavy stone swipe."),
                Skill::new(
                    "stone_skin",
                    "Stone Skin",
                    SkillKind::Utility,
                    0,
                    3,
                    "Harden and reduce damage taken.",
                ),
                Skill::new(
                    "landslide",
                    "Landslide",
                    SkillKind::Ultimate,
                    185,
                    5,
                    "Bring the hillside down.",
                ),
            ],
            vec![],
        ),
        template(
            "genji_sparkwhistle",
            "Genji Sparkwhistle",
            Rarity::Three,
            Element::Lightning,
            (75, 690, 1260),
            vec![
                Skill::new(
                    "static_shot",
                    "Static Shot",
                    SkillKind::Skill,
                    82,
                    1,
                    "A crackling dart.",
                ),
                Skill::new(
                    "chain_spark",
                    "Chain Spark",
                    SkillKind::Aoe,
                    95,
                    3,
                    "Lightning hops between enemies.",
                ),
                Skill::new(
                    "thunderclap",
                    "Thunderclap",
                    SkillKind::Ultimate,
                    200,
                    5,
                    "Stun the front line.",
                ),
            ],
            vec![TemplateFlag::Rare3Skill],
        ),
    ]
}
