use thiserror::Error;

/// Failure reported by a store client
///
/// The message is shown to the user as received.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    pub status: Option<u16>,
    pub message: String,
}

impl StoreError {
    /// Non-success HTTP status from the remote store
    pub fn http(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("Erreur {}", status),
        }
    }

    /// Transport or decoding failure with no status attached
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("Le fichier n'a pas d'extension")]
    MissingExtension,

    #[error("Seuls les fichiers jpg, jpeg ou png sont acceptés (reçu: {0})")]
    UnsupportedExtension(String),
}

#[derive(Error, Debug)]
pub enum BilledError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error("Invalid session: {0}")]
    Session(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BilledError>;
