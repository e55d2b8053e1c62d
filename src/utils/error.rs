use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Base64 decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Malformed command: {message}")]
    MalformedCommand { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Payload,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FileToolError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedCommand {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Filesystem,
            Self::DecodeError(_) | Self::Utf8Error(_) => ErrorCategory::Payload,
            Self::MalformedCommand { .. } | Self::InvalidArguments { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MalformedCommand { .. } | Self::InvalidArguments { .. } => ErrorSeverity::Low,
            Self::DecodeError(_) | Self::Utf8Error(_) => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(e) => match e.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check that the target path is writable by the current user"
                }
                std::io::ErrorKind::NotFound => {
                    "Check that the parent directory exists or enable paths.create_parents"
                }
                _ => "Check the target path and available disk space",
            },
            Self::DecodeError(_) => "Encode the payload with standard base64 (RFC 4648, padded)",
            Self::Utf8Error(_) => "Only UTF-8 text payloads are supported",
            Self::MalformedCommand { .. } => "Use the form: create_file <path>|<content>",
            Self::InvalidArguments { .. } => {
                "Pass either --replace-all <base64> or --replace <base64_old> <base64_new>"
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run the command again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::DecodeError(e) => format!("The payload is not valid base64 ({})", e),
            Self::Utf8Error(_) => "The decoded payload is not UTF-8 text".to_string(),
            Self::MalformedCommand { message } => message.clone(),
            Self::InvalidArguments { message } => message.clone(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
        }
    }

    /// Logs the error, prints the message and recovery hint to stderr, and
    /// exits with status 1.
    pub fn exit_with_report(&self, prefix: &str) -> ! {
        tracing::error!(
            "❌ Operation failed: {} (Category: {:?}, Severity: {:?})",
            self,
            self.category(),
            self.severity()
        );
        eprintln!("{}❌ {}", prefix, self.user_friendly_message());
        eprintln!("{}💡 {}", prefix, self.recovery_suggestion());
        std::process::exit(1);
    }
}

pub type Result<T> = std::result::Result<T, FileToolError>;
