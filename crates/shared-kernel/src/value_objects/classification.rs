// crates/shared-kernel/src/value_objects/classification.rs
//! 行分類タグ
//!
//! 1行はちょうど1つの分類を持ちます。ヒアドキュメント本体や
//! 埋め込みドキュメント内部の行は、`#` を含んでいても
//! コメント/コードとして再解釈されません。

use serde::{Deserialize, Serialize};

/// 1行に対する字句分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// コード行 (行内コメント付きのコード行を含む)
    Code,
    /// コメント行 (`#` 行頭コメント、`=begin`～`=end` の各行)
    Comment,
    /// 空白のみの行
    Blank,
    /// 文字列リテラル/ヒアドキュメント本体の行
    StringContent,
}

impl Classification {
    #[must_use]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Code)
    }

    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment)
    }

    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    #[must_use]
    pub const fn is_string_content(self) -> bool {
        matches!(self, Self::StringContent)
    }
}
