use thiserror::Error;

/// Engine-level failures raised by an item processor
///
/// These represent infrastructural faults, not business outcomes: an item
/// that merely fails its work is reported through `ItemStatus::Error`, never
/// through this type. The group runner converts any `EngineError` into an
/// error-status item, so these never escape the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("work interrupted for item {0}")]
    Interrupted(u32),

    #[error("processing failed for item {id}: {reason}")]
    Failed { id: u32, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            EngineError::Interrupted(7).to_string(),
            "work interrupted for item 7"
        );
        assert_eq!(
            EngineError::Failed {
                id: 3,
                reason: "worker died".to_string()
            }
            .to_string(),
            "processing failed for item 3: worker died"
        );
    }

    #[test]
    fn error_is_cloneable() {
        let err = EngineError::Interrupted(1);
        assert_eq!(err.clone(), err);
    }
}
