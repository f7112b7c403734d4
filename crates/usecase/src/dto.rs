/// Outcome of one full analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents supplied by the source.
    pub documents: usize,
    /// Report lines handed to the sink.
    pub printed: usize,
}
