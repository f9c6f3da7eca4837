use super::normalize::NormalizeError;

/// A listing record that failed normalization and was left out.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRecord {
    pub id: Option<String>,
    pub error: NormalizeError,
}

/// Receives the records a listing drops.
pub trait DiagnosticsSink: Send {
    fn dropped(&mut self, record: DroppedRecord);
}

/// Logs every dropped record as a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn dropped(&mut self, record: DroppedRecord) {
        tracing::warn!(
            record_id = record.id.as_deref().unwrap_or("<none>"),
            error = %record.error,
            "dropping malformed listing record"
        );
    }
}

/// Collects dropped records, e.g. for assertions.
impl DiagnosticsSink for Vec<DroppedRecord> {
    fn dropped(&mut self, record: DroppedRecord) {
        self.push(record);
    }
}
