// src/classify.rs
//! 分類ドライバ
//!
//! 1ファイル分の行列をスキャナへ順に通し、行ごとの分類・集計・
//! EOF診断をまとめて返します。スキャナ状態はファイルごとに独立で、
//! 複数ファイルは呼び出し側で自由に並列化できます
//! (`parallel` フィーチャの `classify_many` 参照)。

use serde::{Deserialize, Serialize};

use classify_lines_shared_kernel::{Classification, LineTally, ScanDiagnostic};

use crate::config::ScanConfig;
use crate::language::{LineScanner, scanner_for};

/// 1行分の分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// 行番号 (1始まり)
    pub line_no: usize,
    pub classification: Classification,
}

/// 1ファイル分の走査結果
///
/// 診断が残っていても分類は全行について確定しています (非致命的)。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub lines: Vec<ClassifiedLine>,
    pub tally: LineTally,
    pub diagnostics: Vec<ScanDiagnostic>,
}

impl ScanOutcome {
    /// 指定行 (1始まり) の分類
    #[must_use]
    pub fn classification_of(&self, line_no: usize) -> Option<Classification> {
        self.lines
            .get(line_no.checked_sub(1)?)
            .map(|l| l.classification)
    }
}

/// 行の列を分類する
///
/// これはライブラリの中核エントリポイントです。入力は改行を含まない
/// 行の列で、1パス・先読みなしで処理されます。
pub fn classify_lines<'a, I>(lines: I, config: &ScanConfig) -> ScanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = scanner_for(config.language);
    drive(scanner.as_mut(), lines)
}

/// バイト列を分類する
///
/// 不正なUTF-8は置換文字に置き換えて処理します (多バイト内容は透過)。
#[must_use]
pub fn classify_bytes(input: &[u8], config: &ScanConfig) -> ScanOutcome {
    let text = String::from_utf8_lossy(input);
    classify_lines(text.lines(), config)
}

/// 複数ファイルを並列に分類する
///
/// ファイルごとに独立したスキャナを使うため、共有可変状態はありません。
#[cfg(feature = "parallel")]
pub fn classify_many(files: &[&str], config: &ScanConfig) -> Vec<ScanOutcome> {
    use rayon::prelude::*;

    files
        .par_iter()
        .map(|content| classify_lines(content.lines(), config))
        .collect()
}

fn drive<'a, I>(scanner: &mut dyn LineScanner, lines: I) -> ScanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let mut classified = Vec::new();
    let mut tally = LineTally::new();

    for (index, line) in lines.into_iter().enumerate() {
        let classification = scanner.scan_line(line);
        tally.record(classification);
        classified.push(ClassifiedLine {
            line_no: index + 1,
            classification,
        });
    }
    tally.increment_files();

    ScanOutcome {
        lines: classified,
        tally,
        diagnostics: scanner.finish(),
    }
}
