use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("catalog read failed: {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog parse error for {path}: {detail}")]
    CatalogParse { path: PathBuf, detail: String },

    #[error("invalid profile in {path}: {detail}")]
    InvalidProfile { path: PathBuf, detail: String },

    #[error("unknown component type: {0}")]
    UnknownComponent(String),

    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("unknown {kind}: {value}")]
    UnknownEnum { kind: &'static str, value: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
