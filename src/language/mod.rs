// src/language/mod.rs
pub mod heredoc_utils;
pub mod processors;
pub mod scanner_trait;
pub mod string_utils;

pub use scanner_trait::LineScanner;

use crate::config::Language;
use processors::{CStyleScanner, RubyScanner};

fn new_box<T: LineScanner + 'static>(s: T) -> Box<dyn LineScanner> {
    Box::new(s)
}

/// 言語に応じたスキャナを生成する
///
/// 拡張子からの自動判別は行いません。呼び出し側が言語を明示します。
#[must_use]
pub fn scanner_for(language: Language) -> Box<dyn LineScanner> {
    match language {
        Language::Ruby => new_box(RubyScanner::new()),
        Language::CFamily => new_box(CStyleScanner::new()),
    }
}
