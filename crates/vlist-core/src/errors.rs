use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing. Callers match on the kind, never on the
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    /// A host view asked for a row outside the count it was given
    OutOfRange,

    // Integration/IO
    Io,
    Serialization,
    /// The backing store could not be opened or a statement failed
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation name,
/// row identifier, row position) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    position: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            position: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a row identifier, a table name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add zero-based row position context
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the row position context, if any
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(position) = self.position {
            write!(f, " (position: {})", position)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures of the row source and the list adapters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VListError {
    /// No row carries this identifier
    #[error("Row not found: {id}")]
    RowNotFound { id: i64 },

    /// Host view asked for a row position at or beyond the declared count
    #[error("Row position {position} is outside the declared count {count}")]
    RowOutOfRange { position: usize, count: usize },

    /// Column index beyond the six columns of a row
    #[error("Column {column} does not exist (rows have {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    /// Row position does not fit the store's identifier type
    #[error("Row position {position} cannot be mapped to an identifier")]
    PositionOverflow { position: usize },

    /// Seeding failed before commit; nothing was written
    #[error("Seeding aborted after {inserted} rows: {reason}")]
    SeedAborted { inserted: usize, reason: String },
}

impl From<VListError> for ExError {
    fn from(err: VListError) -> Self {
        let message = err.to_string();
        match err {
            VListError::RowNotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_op("get_row")
                .with_entity_id(id.to_string())
                .with_message(message),
            VListError::RowOutOfRange { position, .. } => ExError::new(ExErrorKind::OutOfRange)
                .with_op("cell_text")
                .with_position(position)
                .with_message(message),
            VListError::ColumnOutOfRange { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("cell_text")
                .with_message(message),
            VListError::PositionOverflow { position } => ExError::new(ExErrorKind::OutOfRange)
                .with_op("position_to_id")
                .with_position(position)
                .with_message(message),
            VListError::SeedAborted { .. } => ExError::new(ExErrorKind::Persistence)
                .with_op("seed")
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::OutOfRange, "ERR_OUT_OF_RANGE"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
            (ExErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, code) in cases {
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: ExError = VListError::RowNotFound { id: 7 }.into();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity_id(), Some("7"));
        assert_eq!(err.op(), Some("get_row"));
    }

    #[test]
    fn test_out_of_range_carries_position() {
        let err: ExError = VListError::RowOutOfRange {
            position: 5,
            count: 5,
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::OutOfRange);
        assert_eq!(err.position(), Some(5));
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("disk I/O error");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_PERSISTENCE]"));
        assert!(rendered.contains("'sqlite'"));
        assert!(rendered.contains("disk I/O error"));
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::NotFound).with_message("row 4");
        let outer = ExError::new(ExErrorKind::Persistence).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::NotFound)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
