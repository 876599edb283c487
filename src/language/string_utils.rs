// src/language/string_utils.rs
//! 文字列リテラル検出ユーティリティ
//!
//! 引用領域 (`"…"` / `'…'`) の内側に現れたコメントマーカーを
//! 無視するための検索ヘルパ。

/// `pat` が引用領域の外側で最初に現れるバイト位置を返す
///
/// 二重引用符・単一引用符の両方でバックスラッシュエスケープを処理します
/// (C系の規則。Rubyの単一引用符はスキャナ側で別途扱う)。
#[must_use]
pub fn find_outside_string(line: &str, pat: &str) -> Option<usize> {
    if pat.is_empty() {
        return None;
    }

    let mut quote: Option<char> = None;
    let mut chars = line.char_indices();
    while let Some((i, c)) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
            }
            None => {
                if line[i..].starts_with(pat) {
                    return Some(i);
                }
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
            }
        }
    }
    None
}
