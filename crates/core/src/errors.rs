use thiserror::Error;

/// Which kind of record a lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Deal,
    Category,
    Platform,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Deal => write!(f, "Deal"),
            EntityKind::Category => write!(f, "Category"),
            EntityKind::Platform => write!(f, "Platform"),
        }
    }
}

/// Unified error type for the entire dealvault-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Repository ──────────────────────────────────────────────────
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    // ── Input ───────────────────────────────────────────────────────
    #[error("Deal validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid deal status: {0}")]
    InvalidStatus(String),

    // ── Serialization / Config ──────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// `true` for the lookup failure raised by `get_by_id`/`update`/`delete`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
