//! pinvin 音节：合法音节表 + 自右向左的重切分器。
//!
//! 音节 = 声母（可为空）+ 韵母；韵母按声调有多种拼写（例如 `a ar aa ah`）。
//! 词典无法直接命中的连写编码（例如 `hauhaukam`）靠这里拆回音节后再解码。

pub mod resyllabify;
pub mod table;

pub use resyllabify::SyllableSplitter;
pub use table::{MAX_SYLLABLE_LEN, SyllableTable};
