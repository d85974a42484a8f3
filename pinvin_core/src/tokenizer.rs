//! `tokenizer`：把一行输入切成 token 序列。
//!
//! - 标点（Unicode 标点类，或出现在半角→全角映射表里的字符）单独成 token，
//!   文本替换为映射后的全角标点
//! - 其余字符按空白切分，保留大小写

use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::model::Token;

/// 半角标点 → 全角标点。
static PUNCTUATION_MAP: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (',', "，"),
        ('.', "。"),
        ('?', "？"),
        ('!', "！"),
        (':', "："),
        (';', "；"),
        ('"', "“"),
        ('\'', "‘"),
        ('(', "（"),
        (')', "）"),
        ('[', "【"),
        (']', "】"),
        ('{', "｛"),
        ('}', "｝"),
        ('<', "《"),
        ('>', "》"),
    ])
});

/// 查询半角标点对应的全角标点。
pub fn map_punctuation(ch: char) -> Option<&'static str> {
    PUNCTUATION_MAP.get(&ch).copied()
}

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION_MAP.contains_key(&ch)
        || ch.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// 切分一行；空行（或只有空白）返回空序列。
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending = String::new();

    for ch in line.chars() {
        if is_punctuation(ch) {
            flush_literal(&mut pending, &mut tokens);
            let text = match map_punctuation(ch) {
                Some(mapped) => mapped.to_string(),
                None => ch.to_string(),
            };
            tokens.push(Token::punctuation(text));
        } else {
            pending.push(ch);
        }
    }
    flush_literal(&mut pending, &mut tokens);
    tokens
}

fn flush_literal(pending: &mut String, tokens: &mut Vec<Token>) {
    if pending.is_empty() {
        return;
    }
    tokens.extend(pending.split_whitespace().map(Token::literal));
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn splits_words_and_punctuation() {
        let tokens = tokenize("uoo zay jiam, Lucy!");
        assert_eq!(texts(&tokens), ["uoo", "zay", "jiam", "，", "Lucy", "！"]);
        assert!(tokens[3].is_punctuation);
        assert!(!tokens[4].is_punctuation);
    }

    #[test]
    fn multiple_sentences() {
        let tokens = tokenize("uoo zay jiam, Lucy! xieh xieh!");
        assert_eq!(
            texts(&tokens),
            ["uoo", "zay", "jiam", "，", "Lucy", "！", "xieh", "xieh", "！"]
        );
    }

    #[test]
    fn unmapped_punctuation_passes_through() {
        let tokens = tokenize("hau-hau");
        assert_eq!(texts(&tokens), ["hau", "-", "hau"]);
        assert!(tokens[1].is_punctuation);
    }

    #[test]
    fn mapped_symbols_count_as_punctuation() {
        // `<` `>` 属于 Symbol 类，但在映射表里
        let tokens = tokenize("<shu>");
        assert_eq!(texts(&tokens), ["《", "shu", "》"]);
        assert!(tokens[0].is_punctuation && tokens[2].is_punctuation);
    }

    #[test]
    fn empty_and_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn preserves_case_and_collapses_whitespace() {
        let tokens = tokenize("  nyihau   John Smith ");
        assert_eq!(texts(&tokens), ["nyihau", "John", "Smith"]);
    }
}
