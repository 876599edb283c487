// src/language/processors/ruby_style.rs
//! Ruby言語の行分類
//!
//! Ruby固有の対応:
//! - `#` 行コメント (引用領域内の `#` はリテラル)
//! - 埋め込みドキュメント: `=begin` ～ `=end`
//! - ヒアドキュメント: `<<EOF`, `<<-EOF`, `<<~EOF`、
//!   識別子は裸・`'…'`・`"…"` の3形式 (本体の分類はいずれも同じ)
//! - 1行に複数のヒアドキュメント開始 (`foo(<<A, <<B)`) をFIFOで消費

use classify_lines_shared_kernel::{Classification, ScanDiagnostic};
use regex::Regex;

use super::super::heredoc_utils::{HeredocQueue, HeredocSpec, QuoteKind};
use super::super::scanner_trait::LineScanner;

/// Rubyスキャナ
#[derive(Debug, Clone)]
pub struct RubyScanner {
    line_no: usize,
    block_comment_opened_at: Option<usize>,
    heredocs: HeredocQueue,
    opener_re: Regex,
}

impl LineScanner for RubyScanner {
    fn scan_line(&mut self, line: &str) -> Classification {
        self.scan(line)
    }

    fn finish(&mut self) -> Vec<ScanDiagnostic> {
        let mut diagnostics = Vec::new();
        for spec in self.heredocs.drain() {
            diagnostics.push(ScanDiagnostic::UnterminatedHeredoc {
                delimiter: spec.delimiter,
                opened_at: spec.opened_at,
            });
        }
        if let Some(opened_at) = self.block_comment_opened_at.take() {
            diagnostics.push(ScanDiagnostic::UnterminatedBlockComment { opened_at });
        }
        diagnostics
    }

    fn reset(&mut self) {
        self.line_no = 0;
        self.block_comment_opened_at = None;
        self.heredocs.reset();
    }

    fn in_multiline_region(&self) -> bool {
        self.block_comment_opened_at.is_some() || self.heredocs.is_active()
    }
}

impl Default for RubyScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RubyScanner {
    /// Creates a new `RubyScanner`.
    ///
    /// # Panics
    ///
    /// Panics if the internal regex pattern fails to compile (should never happen with hardcoded patterns).
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_no: 0,
            block_comment_opened_at: None,
            heredocs: HeredocQueue::new(),
            // 識別子は数字開始を認めない (1 << 8 のようなシフトを誤検出しない)
            opener_re: Regex::new(
                r"^<<([-~]?)(?:([A-Za-z_]\w*)|'([A-Za-z_]\w*)'|\x22([A-Za-z_]\w*)\x22)",
            )
            .unwrap(),
        }
    }

    /// 行を処理し、分類を返す
    pub fn scan(&mut self, line: &str) -> Classification {
        self.line_no += 1;

        // 1. ヒアドキュメント本体の処理 (最優先)
        //    本体行はコメントマーカーを含んでいても再解釈しない
        if self.heredocs.is_active() {
            if self.heredocs.check_end(line) {
                // 終端行は開始式 (代入など) の一部としてコード扱い。
                // 終端識別子以降は再走査しない。
                return Classification::Code;
            }
            return Classification::StringContent;
        }

        // 2. 埋め込みドキュメント (=begin ... =end)
        if self.block_comment_opened_at.is_some() {
            if line.trim() == "=end" {
                self.block_comment_opened_at = None;
            }
            return Classification::Comment;
        }

        let trimmed = line.trim();
        if trimmed.starts_with("=begin") {
            self.block_comment_opened_at = Some(self.line_no);
            return Classification::Comment;
        }

        if trimmed.is_empty() {
            return Classification::Blank;
        }

        self.scan_code_line(line)
    }

    /// 通常コンテキストの行を左から右へ走査する
    ///
    /// 引用領域を追跡し、最初の非引用 `#` でコメント開始と判定。
    /// 走査中にヒアドキュメント開始トークンを検出したら出現順に登録する。
    fn scan_code_line(&mut self, line: &str) -> Classification {
        let mut quote: Option<char> = None;
        let mut has_code = false;
        let mut chars = line.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match quote {
                Some('\'') => {
                    // 単一引用符内のエスケープは \' と \\ のみ
                    if c == '\\' {
                        if matches!(chars.peek(), Some(&(_, '\'' | '\\'))) {
                            chars.next();
                        }
                    } else if c == '\'' {
                        quote = None;
                    }
                }
                Some(_) => {
                    if c == '\\' {
                        chars.next();
                    } else if c == '"' {
                        quote = None;
                    }
                }
                None => {
                    if c == '#' {
                        // コメント開始: 行末までコメント尾部。
                        // 手前にコードがあれば行全体としてはコード行。
                        return if has_code {
                            Classification::Code
                        } else {
                            Classification::Comment
                        };
                    }

                    if !c.is_whitespace() {
                        has_code = true;
                    }

                    if c == '"' || c == '\'' {
                        quote = Some(c);
                    } else if c == '<' && matches!(chars.peek(), Some(&(_, '<'))) {
                        if let Some(caps) = self.opener_re.captures(&line[i..]) {
                            self.push_heredoc(&caps);
                            // マッチした開始トークンを読み飛ばす
                            // (識別子を再走査しないため)
                            let end = i + caps.get(0).unwrap().len();
                            while let Some(&(j, _)) = chars.peek() {
                                if j >= end {
                                    break;
                                }
                                chars.next();
                            }
                        }
                    }
                }
            }
        }

        // 引用領域の状態は行をまたいで持ち越さない
        Classification::Code
    }

    fn push_heredoc(&mut self, caps: &regex::Captures<'_>) {
        let indent_flag = caps.get(1).map_or("", |m| m.as_str());
        let (delimiter, quote_kind) = if let Some(m) = caps.get(2) {
            (m.as_str(), QuoteKind::None)
        } else if let Some(m) = caps.get(3) {
            (m.as_str(), QuoteKind::Single)
        } else {
            (caps.get(4).unwrap().as_str(), QuoteKind::Double)
        };

        self.heredocs.push(HeredocSpec {
            delimiter: delimiter.to_string(),
            indent_allowed: indent_flag == "-" || indent_flag == "~",
            squiggly: indent_flag == "~",
            quote_kind,
            opened_at: self.line_no,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classify_lines_shared_kernel::Classification::{Blank, Code, Comment, StringContent};

    #[test]
    fn test_line_comment_and_code() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("# comment"), Comment);
        assert_eq!(s.scan("  # indented comment"), Comment);
        assert_eq!(s.scan("x = 1 # trailing"), Code);
        assert_eq!(s.scan("x = 1"), Code);
        assert_eq!(s.scan("   "), Blank);
    }

    #[test]
    fn test_hash_inside_strings_is_literal() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("str1 = \"这个 # 不是注释\""), Code);
        assert_eq!(s.scan("str2 = '这个 # 也不是注释'"), Code);
        assert_eq!(s.scan("str3 = \"a\\\"# still string\""), Code);
    }

    #[test]
    fn test_embedded_doc() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("=begin"), Comment);
        assert_eq!(s.scan("any text, even with # marker"), Comment);
        assert_eq!(s.scan(""), Comment);
        assert_eq!(s.scan("=end"), Comment);
        assert_eq!(s.scan("x = 1"), Code);
        assert!(s.finish().is_empty());
    }

    #[test]
    fn test_begin_needs_line_start() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("x = 5 # =begin is not a delimiter here"), Code);
        assert_eq!(s.scan("x = 1"), Code);
    }

    #[test]
    fn test_heredoc_plain() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("doc = <<EOF"), Code);
        assert_eq!(s.scan("# not a comment"), StringContent);
        assert_eq!(s.scan("  EOF"), StringContent); // indented terminator does not close
        assert_eq!(s.scan("EOF"), Code);
        assert_eq!(s.scan("x = 1"), Code);
    }

    #[test]
    fn test_heredoc_dash_and_squiggly() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("sql = <<-SQL"), Code);
        assert_eq!(s.scan("  SELECT *"), StringContent);
        assert_eq!(s.scan("  SQL"), Code);

        assert_eq!(s.scan("doc = <<~TILDE"), Code);
        assert_eq!(s.scan("  content"), StringContent);
        assert_eq!(s.scan("    TILDE"), Code);
        assert!(s.finish().is_empty());
    }

    #[test]
    fn test_heredoc_quoted_delimiters() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("text = <<-\"TEXT\""), Code);
        assert_eq!(s.scan("# 这不是注释"), StringContent);
        assert_eq!(s.scan("TEXT"), Code);

        assert_eq!(s.scan("text2 = <<-'LITERAL'"), Code);
        assert_eq!(s.scan("# 这也不是注释"), StringContent);
        assert_eq!(s.scan("  LITERAL"), Code);
    }

    #[test]
    fn test_stacked_heredocs_fifo() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("foo(<<A, <<B)"), Code);
        assert_eq!(s.scan("content A"), StringContent);
        assert_eq!(s.scan("B"), StringContent); // still inside A's body
        assert_eq!(s.scan("A"), Code);
        assert_eq!(s.scan("content B"), StringContent);
        assert_eq!(s.scan("B"), Code);
        assert!(s.finish().is_empty());
    }

    #[test]
    fn test_shift_operator_is_not_heredoc() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("x = 1 << 8"), Code);
        assert_eq!(s.scan("y = a << b"), Code);
        assert_eq!(s.scan("# plain comment"), Comment);
        assert!(s.finish().is_empty());
    }

    #[test]
    fn test_opener_inside_string_is_ignored() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("x = \"<<EOF\""), Code);
        assert_eq!(s.scan("# comment, not heredoc body"), Comment);
    }

    #[test]
    fn test_unterminated_heredoc_diagnostic() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("x = 1"), Code);
        assert_eq!(s.scan("sql = <<-SQL"), Code);
        assert_eq!(s.scan("SELECT *"), StringContent);
        let diagnostics = s.finish();
        assert_eq!(
            diagnostics,
            vec![ScanDiagnostic::UnterminatedHeredoc {
                delimiter: "SQL".to_string(),
                opened_at: 2,
            }]
        );
    }

    #[test]
    fn test_unterminated_block_comment_diagnostic() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("=begin"), Comment);
        assert_eq!(s.scan("still open"), Comment);
        let diagnostics = s.finish();
        assert_eq!(
            diagnostics,
            vec![ScanDiagnostic::UnterminatedBlockComment { opened_at: 1 }]
        );
    }

    #[test]
    fn test_reset_clears_state() {
        let mut s = RubyScanner::default();
        assert_eq!(s.scan("doc = <<EOF"), Code);
        assert!(s.in_multiline_region());
        s.reset();
        assert!(!s.in_multiline_region());
        assert_eq!(s.scan("# comment"), Comment);
    }
}
