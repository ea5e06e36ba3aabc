//! Error types for loading the record store.
//!
//! Every load failure is fatal: the server refuses to start with a partially
//! loaded store. Errors carry an [`ErrorContext`] pinpointing the source, row
//! and column involved.

use std::fmt;

/// Result type for record store loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Where and why a load failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The step being performed (e.g. "fetch", "parse_rows")
    pub operation: Option<String>,
    /// Human-readable data source description
    pub source: Option<String>,
    /// 1-based data row (header excluded)
    pub row: Option<u64>,
    /// CSV column name
    pub column: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_row(mut self, row: u64) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref source) = self.source {
            parts.push(format!("source={}", source));
        }
        if let Some(row) = self.row {
            parts.push(format!("row={}", row));
        }
        if let Some(ref column) = self.column {
            parts.push(format!("column={}", column));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for record store loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data source could not be read (file system or network).
    #[error("Source unavailable: {message} {context}")]
    SourceUnavailable {
        message: String,
        context: ErrorContext,
    },

    /// Required CSV columns are absent from the header.
    #[error("Missing required columns {missing:?} {context}")]
    MissingColumns {
        missing: Vec<String>,
        context: ErrorContext,
    },

    /// A row could not be parsed or holds a non-finite numeric value.
    #[error("Malformed record: {message} {context}")]
    MalformedRecord {
        message: String,
        context: ErrorContext,
    },

    /// The source parsed cleanly but contains no flight records.
    #[error("Dataset is empty {context}")]
    EmptyDataset { context: ErrorContext },

    /// Invalid data source specification or configuration.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

impl LoadError {
    pub fn source_unavailable(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
            context,
        }
    }

    pub fn malformed(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::MalformedRecord {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::SourceUnavailable { context, .. } => context,
            Self::MissingColumns { context, .. } => context,
            Self::MalformedRecord { context, .. } => context,
            Self::EmptyDataset { context } => context,
            Self::Configuration { context, .. } => context,
        }
    }

    /// Attach the data source description, keeping everything else.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        match &mut self {
            Self::SourceUnavailable { context, .. }
            | Self::MissingColumns { context, .. }
            | Self::MalformedRecord { context, .. }
            | Self::EmptyDataset { context }
            | Self::Configuration { context, .. } => {
                context.source = Some(source);
            }
        }
        self
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::source_unavailable(err.to_string(), ErrorContext::new("read_file"))
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        let mut context = ErrorContext::new("fetch");
        if let Some(status) = err.status() {
            context = context.with_details(format!("http_status={}", status));
        }
        LoadError::source_unavailable(err.to_string(), context)
    }
}
