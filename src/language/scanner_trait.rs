// src/language/scanner_trait.rs
//! 行走査トレイト
//!
//! 各言語の行スキャナに共通のインターフェースを提供します。
//! スキャナは1ファイル分の状態を持ち、行を先頭から順に1回ずつ
//! 受け取ります (先読みなし)。

use classify_lines_shared_kernel::{Classification, ScanDiagnostic};

/// 行走査トレイト
///
/// `scan_line` は行を1つ受け取り、ちょうど1つの分類を返します。
/// 入力終端では `finish` を呼び、未終端領域の診断を回収します。
pub trait LineScanner: Send {
    /// 行を処理し、分類を返す
    ///
    /// # Arguments
    ///
    /// * `line` - 処理対象の行（改行を含まない）
    fn scan_line(&mut self, line: &str) -> Classification;

    /// 入力終端に達したことを通知し、未終端領域の診断を返す
    ///
    /// 診断は非致命的で、分類結果はすべての行について確定済みです。
    fn finish(&mut self) -> Vec<ScanDiagnostic> {
        Vec::new()
    }

    /// 処理状態をリセット
    ///
    /// 新しいファイルの処理を開始する前に呼び出します。
    fn reset(&mut self);

    /// 複数行領域 (ヒアドキュメント/埋め込みドキュメント) の内側かどうか
    fn in_multiline_region(&self) -> bool {
        false
    }
}

impl LineScanner for Box<dyn LineScanner> {
    fn scan_line(&mut self, line: &str) -> Classification {
        (**self).scan_line(line)
    }

    fn finish(&mut self) -> Vec<ScanDiagnostic> {
        (**self).finish()
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn in_multiline_region(&self) -> bool {
        (**self).in_multiline_region()
    }
}
