use std::collections::HashSet;
use std::sync::LazyLock;

/// 声母；空串表示零声母。
pub const INITIALS: &[&str] = &[
    "", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "zh", "ch", "sh",
    "r", "z", "c", "s",
];

/// 韵母的全部拼写：同一韵母的四个声调各占一种写法。
pub const FINALS: &[&str] = &[
    "a", "ar", "aa", "ah", //
    "ai", "air", "ae", "ay", //
    "an", "arn", "aan", "am", //
    "ang", "arng", "aang", "amg", //
    "ao", "aor", "au", "aw", //
    "e", "er", "ee", "eh", //
    "ei", "eir", "ea", "ey", //
    "en", "ern", "een", "em", //
    "eng", "erng", "eeng", "emg", //
    "el", "erl", "eel", "ehl", //
    "m", "n", "ng", //
    "o", "or", "oo", "oh", //
    "ong", "orng", "oong", "omg", //
    "ou", "our", "oa", "ow", //
    "i", "ir", "yi", "ih", //
    "in", "irn", "yin", "im", //
    "ing", "irng", "ying", "img", //
    "ia", "ya", "iaa", "iah", //
    "ian", "yan", "iaan", "iam", //
    "iang", "yang", "iaang", "iamg", //
    "iao", "yao", "iau", "iaw", //
    "ie", "ye", "iee", "ieh", //
    "iong", "yong", "ioong", "iomg", //
    "iou", "you", "ioa", "iow", //
    "u", "ur", "wu", "uh", //
    "ua", "wa", "uaa", "uah", //
    "uai", "wai", "uae", "uay", //
    "uan", "wan", "uaan", "uam", //
    "uang", "wang", "uaang", "uamg", //
    "uei", "wei", "uea", "uey", //
    "uen", "wen", "ueen", "uem", //
    "ueng", "weng", "ueeng", "uemg", //
    "uo", "wo", "uoo", "uoh", //
    "eu", "eur", "yu", "ew", //
    "eue", "yue", "euee", "eueh", //
    "euen", "yuen", "eueen", "euem", //
    "euan", "yuan", "euaan", "euam", //
];

/// 非词首、以元音开头的音节前加的隔音字母。
pub const SEPARATOR: char = 'v';

/// 单个音节的最大字符数（`zh` + `uaang`）。
pub const MAX_SYLLABLE_LEN: usize = 7;

static TABLE: LazyLock<SyllableTable> = LazyLock::new(SyllableTable::build);

/// 合法音节集合，进程内只构造一次。
#[derive(Debug, Clone)]
pub struct SyllableTable {
    set: HashSet<String>,
}

impl SyllableTable {
    /// 进程级共享实例。
    pub fn global() -> &'static SyllableTable {
        &TABLE
    }

    /// 声母 × 韵母，`j/q/x` 后的 `eu` 写作 `u`，外加 `v` + 韵母。
    pub fn build() -> Self {
        let mut set = HashSet::with_capacity(INITIALS.len() * FINALS.len() + FINALS.len());
        for initial in INITIALS {
            for fin in FINALS {
                set.insert(normalize(&format!("{initial}{fin}")));
            }
        }
        for fin in FINALS {
            set.insert(format!("{SEPARATOR}{fin}"));
        }
        Self { set }
    }

    pub fn contains(&self, syllable: &str) -> bool {
        self.set.contains(syllable)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// 按字典序遍历（便于输出稳定）。
    pub fn sorted(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.set.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}

/// `[jqx]eu` -> `[jqx]u`
fn normalize(syllable: &str) -> String {
    let mut out = String::with_capacity(syllable.len());
    let mut prev: Option<char> = None;
    let mut chars = syllable.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == 'e' && matches!(prev, Some('j' | 'q' | 'x')) && chars.peek() == Some(&'u') {
            prev = Some(ch);
            continue;
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_common_syllables() {
        let t = SyllableTable::global();
        for s in ["nyi", "hau", "uoo", "ay", "zay", "jiam", "xieh", "heen", "kam", "cherng", "shan"] {
            assert!(t.contains(s), "{s} 应当是合法音节");
        }
    }

    #[test]
    fn separator_prefixed_finals() {
        let t = SyllableTable::global();
        assert!(t.contains("vuam"));
        assert!(t.contains("vay"));
        assert!(!t.contains("vb"));
    }

    #[test]
    fn jqx_eu_is_written_u() {
        let t = SyllableTable::global();
        assert!(t.contains("jueh"));
        assert!(!t.contains("jeueh"));
        assert!(!t.contains("qeu"));
        // 其他声母保留 eu
        assert!(t.contains("neu"));
        assert!(t.contains("leue"));
    }

    #[test]
    fn rejects_non_syllables() {
        let t = SyllableTable::global();
        for s in ["", "y", "h", "cy", "th", "lucy"] {
            assert!(!t.contains(s), "{s:?} 不应是音节");
        }
    }

    #[test]
    fn longest_syllable_fits_limit() {
        let t = SyllableTable::global();
        let longest = t.sorted().iter().map(|s| s.chars().count()).max().unwrap();
        assert_eq!(longest, MAX_SYLLABLE_LEN);
        assert!(!t.is_empty());
    }

    #[test]
    fn normalize_only_touches_jqx() {
        assert_eq!(normalize("jeu"), "ju");
        assert_eq!(normalize("xeuan"), "xuan");
        assert_eq!(normalize("leu"), "leu");
        assert_eq!(normalize("eu"), "eu");
    }
}
