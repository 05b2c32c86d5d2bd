use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CtlError {
    #[error(transparent)]
    Function(#[from] tera_render::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}:{line}: {source}")]
    BatchLine {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("'tera_render' is not registered")]
    NotRegistered,
}

impl From<tera_render::ExecutionError> for CtlError {
    fn from(error: tera_render::ExecutionError) -> Self {
        Self::Function(error.into())
    }
}

pub(crate) type CtlResult<T> = Result<T, CtlError>;
