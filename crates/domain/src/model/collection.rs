use super::ResultRecord;

/// Append-only, insertion-ordered results of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultCollection {
    records: Vec<ResultRecord>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { records: Vec::with_capacity(capacity) }
    }

    pub fn append(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    /// Snapshot of everything appended so far, in append order.
    pub fn to_sequence(&self) -> Vec<ResultRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }
}

impl IntoIterator for ResultCollection {
    type Item = ResultRecord;
    type IntoIter = std::vec::IntoIter<ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
