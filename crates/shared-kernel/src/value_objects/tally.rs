// crates/shared-kernel/src/value_objects/tally.rs
//! 分類結果の集計値オブジェクト

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::classification::Classification;

/// ファイル単位の行分類集計
///
/// 複数ファイルの集計は `merge` または `+` で合算します。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTally {
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
    pub string_content: usize,
    pub files: usize,
}

impl LineTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            comment: 0,
            blank: 0,
            string_content: 0,
            files: 0,
        }
    }

    /// 1ファイル分の集計を直接構築する (files = 1)
    #[must_use]
    pub const fn single_file(
        code: usize,
        comment: usize,
        blank: usize,
        string_content: usize,
    ) -> Self {
        Self {
            code,
            comment,
            blank,
            string_content,
            files: 1,
        }
    }

    /// 分類1件を加算する
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Code => self.code += 1,
            Classification::Comment => self.comment += 1,
            Classification::Blank => self.blank += 1,
            Classification::StringContent => self.string_content += 1,
        }
    }

    pub fn increment_files(&mut self) {
        self.files += 1;
    }

    /// 集計済み行数の合計 (ファイル数は含まない)
    #[must_use]
    pub const fn total(&self) -> usize {
        self.code + self.comment + self.blank + self.string_content
    }

    pub fn merge(&mut self, other: &Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
        self.string_content += other.string_content;
        self.files += other.files;
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Add for LineTally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.merge(&rhs);
        self
    }
}

impl AddAssign for LineTally {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Sum for LineTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}
