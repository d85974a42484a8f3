//! `formatter`：拼接解码结果。
//!
//! 只有当前一片段的末字符与后一片段的首字符都是 ASCII 字母或数字时才插入一个空格，
//! 汉字与标点之间不留空白，原样保留的拉丁片段仍然可读。

fn is_latin_alnum(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_ascii_alphanumeric())
}

pub fn format_output<S: AsRef<str>>(pieces: &[S]) -> String {
    let mut out = String::new();
    let mut prev_last: Option<char> = None;
    for piece in pieces {
        let piece = piece.as_ref();
        if is_latin_alnum(prev_last) && is_latin_alnum(piece.chars().next()) {
            out.push(' ');
        }
        out.push_str(piece);
        prev_last = piece.chars().next_back();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_between_latin_pieces() {
        assert_eq!(format_output(&["你好", "John", "Smith"]), "你好John Smith");
        assert_eq!(format_output(&["R2", "D2"]), "R2 D2");
    }

    #[test]
    fn no_spaces_around_native_text_and_punctuation() {
        assert_eq!(format_output(&["謝謝", "，", "Lucy", "！"]), "謝謝，Lucy！");
        assert_eq!(format_output(&["我", "愛你"]), "我愛你");
    }

    #[test]
    fn empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(format_output(&empty), "");
    }
}
