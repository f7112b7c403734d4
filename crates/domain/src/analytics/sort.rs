// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::ResultRecord;

/// ソート順序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// ソートされた新しいベクタを返す
///
/// Records are compared by their formatted text, code point by code point.
/// The sort is stable, so equal records keep their input order.
pub fn sorted_records(records: &[ResultRecord], order: SortOrder) -> Vec<ResultRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| order.apply(a.as_str().cmp(b.as_str())));
    sorted
}
