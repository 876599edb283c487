// src/language/processors/c_style.rs
//! C系言語の行分類 (`//`, `/* */`)
//!
//! C/C++ を対象とした非ネストのブロックコメント処理。
//! 文字列・文字リテラル内のマーカーはリテラルとして扱います。
//! C系には複数行文字列の形式がないため `StringContent` は生成されません。

use classify_lines_shared_kernel::{Classification, ScanDiagnostic};

use super::super::scanner_trait::LineScanner;
use super::super::string_utils::find_outside_string;

/// C系スキャナ
#[derive(Debug, Clone, Default)]
pub struct CStyleScanner {
    line_no: usize,
    block_comment_opened_at: Option<usize>,
}

impl LineScanner for CStyleScanner {
    fn scan_line(&mut self, line: &str) -> Classification {
        self.scan(line)
    }

    fn finish(&mut self) -> Vec<ScanDiagnostic> {
        match self.block_comment_opened_at.take() {
            Some(opened_at) => vec![ScanDiagnostic::UnterminatedBlockComment { opened_at }],
            None => Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.line_no = 0;
        self.block_comment_opened_at = None;
    }

    fn in_multiline_region(&self) -> bool {
        self.block_comment_opened_at.is_some()
    }
}

impl CStyleScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_no: 0,
            block_comment_opened_at: None,
        }
    }

    /// 行を処理し、分類を返す
    pub fn scan(&mut self, line: &str) -> Classification {
        self.line_no += 1;

        if line.trim().is_empty() {
            return Classification::Blank;
        }

        // ブロックコメント継続中: 終端を探す
        if self.block_comment_opened_at.is_some() {
            if let Some(pos) = line.find("*/") {
                self.block_comment_opened_at = None;
                let rest = line[pos + 2..].trim();
                if !rest.is_empty() && !rest.starts_with("//") {
                    return Classification::Code;
                }
            }
            return Classification::Comment;
        }

        let line_pos = find_outside_string(line, "//");
        let block_pos = find_outside_string(line, "/*");

        match (line_pos, block_pos) {
            // 行コメントがブロック開始より先に現れる
            (Some(lp), bp) if bp.is_none_or(|b| lp < b) => {
                if line[..lp].trim().is_empty() {
                    Classification::Comment
                } else {
                    Classification::Code
                }
            }
            (_, Some(bp)) => self.scan_block_comment(line, bp),
            _ => Classification::Code,
        }
    }

    /// 行内で始まるブロックコメントの処理
    fn scan_block_comment(&mut self, line: &str, start: usize) -> Classification {
        let has_code_before = !line[..start].trim().is_empty();

        if let Some(end) = line[start + 2..].find("*/") {
            // 同一行内で閉じる
            let after = line[start + 2 + end + 2..].trim();
            let has_code_after = !after.is_empty() && !after.starts_with("//");
            if has_code_before || has_code_after {
                Classification::Code
            } else {
                Classification::Comment
            }
        } else {
            self.block_comment_opened_at = Some(self.line_no);
            if has_code_before {
                Classification::Code
            } else {
                Classification::Comment
            }
        }
    }
}
