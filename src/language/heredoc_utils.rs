// src/language/heredoc_utils.rs
//! ヒアドキュメント状態管理
//!
//! 開始済み・未終端のヒアドキュメントをFIFOで保持します。
//! 1行に複数のヒアドキュメントが開かれた場合 (`foo(<<A, <<B)`) も、
//! 本体は出現順に消費されます。

use std::collections::VecDeque;

/// ヒアドキュメント識別子の引用形式
///
/// 引用形式は本体の式展開有無にのみ影響し、行分類には影響しません
/// (本体はいずれも不透明な文字列内容として扱う)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteKind {
    #[default]
    None,
    Double,
    Single,
}

/// 未終端ヒアドキュメント1件の仕様
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeredocSpec {
    /// 終了識別子 (例: "EOF", "SQL")
    pub delimiter: String,
    /// 終端行のインデントを許可するか (`<<-` / `<<~`)
    pub indent_allowed: bool,
    /// `<<~` 形式 (本体のインデント除去を伴うが、分類上は indent_allowed と同じ)
    pub squiggly: bool,
    /// 識別子の引用形式
    pub quote_kind: QuoteKind,
    /// 開始行番号 (1始まり、診断用)
    pub opened_at: usize,
}

impl HeredocSpec {
    /// この行が終端行かどうか
    ///
    /// プレーン形式は行頭 (列0) からの一致が必要。`<<-`/`<<~` は
    /// 任意の先頭空白を許可します。末尾の空白はいずれも無視します。
    #[must_use]
    pub fn terminates(&self, line: &str) -> bool {
        if self.indent_allowed {
            line.trim() == self.delimiter
        } else {
            line == self.delimiter || line.trim_end() == self.delimiter
        }
    }
}

/// 未終端ヒアドキュメントのFIFOキュー
#[derive(Debug, Default, Clone)]
pub struct HeredocQueue {
    pending: VecDeque<HeredocSpec>,
}

impl HeredocQueue {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// ヒアドキュメント本体の内側かどうか
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 新しいヒアドキュメントを開始 (出現順に末尾へ追加)
    pub fn push(&mut self, spec: HeredocSpec) {
        self.pending.push_back(spec);
    }

    /// 現在の行が最先頭 (最も早く開かれた) ヒアドキュメントの終端か
    /// どうかをチェックし、終端ならキューから取り除いて true を返す。
    pub fn check_end(&mut self, line: &str) -> bool {
        let Some(front) = self.pending.front() else {
            return false;
        };
        if front.terminates(line) {
            self.pending.pop_front();
            return true;
        }
        false
    }

    /// 残っている未終端ヒアドキュメントをすべて取り出す (EOF診断用)
    pub fn drain(&mut self) -> Vec<HeredocSpec> {
        self.pending.drain(..).collect()
    }

    /// 強制リセット
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}
