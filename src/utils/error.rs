use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate service id in catalog: {id}")]
    DuplicateServiceId { id: String },

    #[error("Service not found: {id}")]
    ServiceNotFound { id: String },

    #[error("Image load failed for {url}: {message}")]
    ImageLoadError { url: String, message: String },

    #[error("Preload error: {message}")]
    PreloadError { message: String },

    #[error("Webhook returned HTTP {status}")]
    WebhookStatusError { status: u16 },

    #[error("Webhook response invalid: {message}")]
    WebhookResponseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// CLI 結束碼；只有 `Low` 回傳 0
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::HttpError(_)
            | CatalogError::ImageLoadError { .. }
            | CatalogError::WebhookStatusError { .. }
            | CatalogError::WebhookResponseError { .. } => ErrorCategory::Network,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::SerializationError(_)
            | CatalogError::DuplicateServiceId { .. }
            | CatalogError::ServiceNotFound { .. } => ErrorCategory::Data,
            CatalogError::IoError(_) | CatalogError::PreloadError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::ImageLoadError { .. } => ErrorSeverity::Low,
            CatalogError::ServiceNotFound { .. }
            | CatalogError::HttpError(_)
            | CatalogError::WebhookStatusError { .. }
            | CatalogError::WebhookResponseError { .. } => ErrorSeverity::Medium,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::SerializationError(_) => ErrorSeverity::High,
            CatalogError::DuplicateServiceId { .. }
            | CatalogError::IoError(_)
            | CatalogError::PreloadError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the configured endpoint URLs",
            ErrorCategory::Configuration => "Review the TOML configuration file and CLI arguments",
            ErrorCategory::Data => match self {
                CatalogError::ServiceNotFound { .. } => {
                    "Run `ai4u-catalog list --all` to see the available service ids"
                }
                _ => "Check the catalog definition for inconsistent entries",
            },
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ServiceNotFound { id } => format!("No service with id '{}'", id),
            CatalogError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            CatalogError::HttpError(_) | CatalogError::WebhookStatusError { .. } => {
                "Could not reach the remote service".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
