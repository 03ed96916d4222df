//! Hero roster tables: canonical ids and localized display names.

use phf::phf_map;

/// Canonical hero id to localized display name.
pub static HERO_DISPLAY: phf::Map<&'static str, &'static str> = phf_map! {
    "vendetta" => "斩仇",
    "wuyang" => "无漾",
    "freja" => "弗蕾娅",
    "hazard" => "骇灾",
    "juno" => "朱诺",
    "illari" => "伊拉锐",
    "mauga" => "毛加",
    "venture" => "探奇",
    "lifeweaver" => "生命之梭",
    "ana" => "安娜",
    "kiriko" => "雾子",
    "moira" => "莫伊拉",
    "baptiste" => "巴蒂斯特",
    "zenyatta" => "禅雅塔",
    "mercy" => "天使",
    "lucio" => "卢西奥",
    "brigitte" => "布丽吉塔",
    "sigma" => "西格玛",
    "ramattra" => "拉玛刹",
    "orisa" => "奥丽莎",
    "winston" => "温斯顿",
    "dva" => "D.Va",
    "reinhardt" => "莱因哈特",
    "zarya" => "查莉娅",
    "roadhog" => "路霸",
    "junker-queen" => "渣客女王",
    "doomfist" => "末日铁拳",
    "wrecking-ball" => "破坏球",
    "cassidy" => "卡西迪",
    "genji" => "源氏",
    "soldier-76" => "士兵：76",
    "bastion" => "堡垒",
    "ashe" => "艾什",
    "reaper" => "死神",
    "sojourn" => "索杰恩",
    "hanzo" => "半藏",
    "symmetra" => "秩序之光",
    "pharah" => "法老之鹰",
    "widowmaker" => "黑百合",
    "echo" => "回声",
    "junkrat" => "狂鼠",
    "mei" => "小美",
    "torbjorn" => "托比昂",
    "tracer" => "猎空",
    "sombra" => "黑影",
};

/// Hero lookup tokens: both the English id and the localized name of every
/// hero map to the canonical id.
pub static HERO_TOKENS: phf::Map<&'static str, &'static str> = phf_map! {
    "vendetta" => "vendetta", "斩仇" => "vendetta",
    "wuyang" => "wuyang", "无漾" => "wuyang",
    "freja" => "freja", "弗蕾娅" => "freja",
    "hazard" => "hazard", "骇灾" => "hazard",
    "juno" => "juno", "朱诺" => "juno",
    "illari" => "illari", "伊拉锐" => "illari",
    "mauga" => "mauga", "毛加" => "mauga",
    "venture" => "venture", "探奇" => "venture",
    "lifeweaver" => "lifeweaver", "生命之梭" => "lifeweaver",
    "ana" => "ana", "安娜" => "ana",
    "kiriko" => "kiriko", "雾子" => "kiriko",
    "moira" => "moira", "莫伊拉" => "moira",
    "baptiste" => "baptiste", "巴蒂斯特" => "baptiste",
    "zenyatta" => "zenyatta", "禅雅塔" => "zenyatta",
    "mercy" => "mercy", "天使" => "mercy",
    "lucio" => "lucio", "卢西奥" => "lucio",
    "brigitte" => "brigitte", "布丽吉塔" => "brigitte",
    "sigma" => "sigma", "西格玛" => "sigma",
    "ramattra" => "ramattra", "拉玛刹" => "ramattra",
    "orisa" => "orisa", "奥丽莎" => "orisa",
    "winston" => "winston", "温斯顿" => "winston",
    "dva" => "dva", "D.Va" => "dva",
    "reinhardt" => "reinhardt", "莱因哈特" => "reinhardt",
    "zarya" => "zarya", "查莉娅" => "zarya",
    "roadhog" => "roadhog", "路霸" => "roadhog",
    "junker-queen" => "junker-queen", "渣客女王" => "junker-queen",
    "doomfist" => "doomfist", "末日铁拳" => "doomfist",
    "wrecking-ball" => "wrecking-ball", "破坏球" => "wrecking-ball",
    "cassidy" => "cassidy", "卡西迪" => "cassidy",
    "genji" => "genji", "源氏" => "genji",
    "soldier-76" => "soldier-76", "士兵：76" => "soldier-76",
    "bastion" => "bastion", "堡垒" => "bastion",
    "ashe" => "ashe", "艾什" => "ashe",
    "reaper" => "reaper", "死神" => "reaper",
    "sojourn" => "sojourn", "索杰恩" => "sojourn",
    "hanzo" => "hanzo", "半藏" => "hanzo",
    "symmetra" => "symmetra", "秩序之光" => "symmetra",
    "pharah" => "pharah", "法老之鹰" => "pharah",
    "widowmaker" => "widowmaker", "黑百合" => "widowmaker",
    "echo" => "echo", "回声" => "echo",
    "junkrat" => "junkrat", "狂鼠" => "junkrat",
    "mei" => "mei", "小美" => "mei",
    "torbjorn" => "torbjorn", "托比昂" => "torbjorn",
    "tracer" => "tracer", "猎空" => "tracer",
    "sombra" => "sombra", "黑影" => "sombra",
};

/// Canonical hero id for a token in either language, if any.
pub fn lookup_hero_token(token: &str) -> Option<&'static str> {
    HERO_TOKENS.get(token).copied()
}

/// Localized display name for a hero id; unknown ids display as themselves.
pub fn hero_display_name(hero_id: &str) -> &str {
    HERO_DISPLAY.get(hero_id).copied().unwrap_or(hero_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_language_forms_resolve() {
        assert_eq!(lookup_hero_token("genji"), Some("genji"));
        assert_eq!(lookup_hero_token("源氏"), Some("genji"));
        assert_eq!(lookup_hero_token("D.Va"), Some("dva"));
        assert_eq!(lookup_hero_token("士兵：76"), Some("soldier-76"));
        assert_eq!(lookup_hero_token("tracer"), Some("tracer"));
        assert_eq!(lookup_hero_token("widow"), None);
    }

    #[test]
    fn display_names_round_trip() {
        assert_eq!(hero_display_name("genji"), "源氏");
        assert_eq!(hero_display_name("dva"), "D.Va");
        // Unknown upstream ids fall back to the raw id
        assert_eq!(hero_display_name("newhero"), "newhero");
    }

    #[test]
    fn every_display_entry_has_both_tokens() {
        for (&id, &display) in HERO_DISPLAY.entries() {
            assert_eq!(lookup_hero_token(id), Some(id), "missing id token for {id}");
            assert_eq!(
                lookup_hero_token(display),
                Some(id),
                "missing localized token for {id}"
            );
        }
        assert_eq!(HERO_TOKENS.len(), HERO_DISPLAY.len() * 2);
    }
}
