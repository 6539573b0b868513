use thiserror::Error;

#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("failed to read {path:?}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid style override {arg:?}, expected key=value")]
    InvalidStyleOverride { arg: String },
    #[error("unknown style key {key:?}")]
    UnknownStyleKey { key: String },
}
