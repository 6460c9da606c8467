use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{item_type} '{key}' not found")]
    NotFound { item_type: String, key: String },

    #[error("Validation failed: {0} problem(s) found")]
    Validation(usize),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

pub enum FlowResult {
    EmptyList {
        item_type: String,
    },
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Io(msg) | AppError::Parse(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::NotFound { .. } => {
            eprintln!("⚠️  {}", OutputStyle::warning(&err.to_string()));
        }
        AppError::Validation(_) => {
            eprintln!("❌ {}", OutputStyle::error(&err.to_string()));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::EmptyList { item_type } => {
            let msg = format!("No {} found", item_type);
            println!("{}", OutputStyle::muted(&msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound {
            item_type: "Icon".to_string(),
            key: "RustIcon".to_string(),
        };
        assert_eq!(err.to_string(), "Icon 'RustIcon' not found");
    }

    #[test]
    fn test_json_error_becomes_parse_error() {
        let err: AppError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
