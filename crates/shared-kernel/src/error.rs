// crates/shared-kernel/src/error.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClassifyError>,
    },

    #[error("Unknown language: {name}")]
    UnknownLanguage { name: String },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;

/// 走査の非致命的な診断
///
/// 入力終端で閉じられていない領域が残っていた場合に報告されます。
/// いずれも分類結果と併せて返され、`Err` にはなりません。
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanDiagnostic {
    /// 終端されないままEOFに達したヒアドキュメント
    #[error("unterminated heredoc <<{delimiter} opened at line {opened_at}")]
    UnterminatedHeredoc { delimiter: String, opened_at: usize },

    /// `=end` されないままEOFに達した埋め込みドキュメント
    #[error("unterminated block comment opened at line {opened_at}")]
    UnterminatedBlockComment { opened_at: usize },
}

impl ScanDiagnostic {
    /// 問題の領域が開いた行番号 (1始まり)
    #[must_use]
    pub const fn opened_at(&self) -> usize {
        match self {
            Self::UnterminatedHeredoc { opened_at, .. }
            | Self::UnterminatedBlockComment { opened_at } => *opened_at,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ClassifyError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClassifyError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClassifyError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
