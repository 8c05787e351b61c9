//! Error Types
//!
//! Every failure ends the triggering action and is shown on the status line.
//! `Display` is the exact status text.

use thiserror::Error;

/// Coarse classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Service,
    Connection,
    UnsupportedFeature,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Bitte Text eingeben.")]
    EmptyInput,

    #[error("Keine Uebersetzung zum Vorlesen.")]
    NothingToSpeak,

    /// Non-2xx reply from the webhook
    #[error("Fehler: {status} {body}")]
    Http { status: u16, body: String },

    /// 2xx reply carrying an `error` field
    #[error("Fehler: {message}")]
    Service { message: String, raw: Option<String> },

    /// Transport failure or unreadable reply. The detail is only logged.
    #[error("Fehler: Verbindung fehlgeschlagen.")]
    Connection(String),

    #[error("Text-to-Speech wird im Browser nicht unterstuetzt.")]
    SpeechUnsupported,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::EmptyInput | AppError::NothingToSpeak => ErrorKind::Validation,
            AppError::Http { .. } | AppError::Service { .. } => ErrorKind::Service,
            AppError::Connection(_) => ErrorKind::Connection,
            AppError::SpeechUnsupported => ErrorKind::UnsupportedFeature,
        }
    }

    /// Fallback output text sent along with a service error
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            AppError::Service { raw: Some(raw), .. } if !raw.is_empty() => Some(raw),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
