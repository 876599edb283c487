// src/lib.rs
//! # classify_lines
//!
//! 行単位の字句分類ライブラリ。1ファイル分の行の列を受け取り、
//! 各行を `Code` / `Comment` / `Blank` / `StringContent` のいずれかに
//! 分類します。Rubyの字句エッジケース (`#` コメント、`=begin`～`=end`、
//! 引用文字列内のマーカー、各種ヒアドキュメント) を正しく扱います。
//!
//! ```
//! use classify_lines::{Classification, ScanConfig, classify_lines};
//!
//! let src = "sql = <<-SQL\n# ヒアドキュメント内\nSQL\n";
//! let outcome = classify_lines(src.lines(), &ScanConfig::default());
//! assert_eq!(outcome.classification_of(2), Some(Classification::StringContent));
//! assert!(outcome.diagnostics.is_empty());
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod config;
pub mod language;

pub use classify::{ClassifiedLine, ScanOutcome, classify_bytes, classify_lines};
pub use config::{Language, ScanConfig};
pub use language::{LineScanner, scanner_for};

#[cfg(feature = "parallel")]
pub use classify::classify_many;

pub use classify_lines_shared_kernel::{
    Classification, ClassifyError, ErrorContext, LineTally, Result, ScanDiagnostic,
};
