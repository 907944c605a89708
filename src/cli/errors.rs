use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required flag: -{arg}")]
    MissingArgument { arg: String },

    #[error("failed to write qrcode: {0}")]
    Generation(#[source] qrgen::Error),
}

impl AppError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MissingArgument { .. } => 2,
            AppError::Generation(_) => 1,
        }
    }
}

impl From<qrgen::Error> for AppError {
    fn from(err: qrgen::Error) -> Self {
        match err {
            qrgen::Error::MissingArgument { arg } => AppError::MissingArgument { arg },
            other => AppError::Generation(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_exits_with_usage_status() {
        let err = AppError::from(qrgen::Error::missing("content"));
        assert!(matches!(err, AppError::MissingArgument { ref arg } if arg == "content"));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "missing required flag: -content");
    }

    #[test]
    fn generation_failures_exit_with_one() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(qrgen::Error::from(io));
        assert!(matches!(err, AppError::Generation(qrgen::Error::Io(_))));
        assert_eq!(err.exit_code(), 1);

        let err = AppError::from(qrgen::Error::InvalidSize { size: 99_999, side: 99_999 });
        assert_eq!(err.exit_code(), 1);
    }
}
