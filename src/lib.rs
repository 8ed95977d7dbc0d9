use std::io;

use manifests::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CRD render error: {0}")]
    RenderError(#[from] RenderError),

    #[error("CRD export error: {0}")]
    ExportError(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Provider API types
pub mod api;

/// CRD manifest rendering, used by the crdgen binary
pub mod manifests;
