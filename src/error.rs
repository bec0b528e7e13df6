use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("section `{0}` is listed more than once")]
    DuplicateSection(String),
    #[error("section at position {0} has an empty identifier")]
    EmptySectionId(usize),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no browser window available")]
    NoWindow,
    #[error("missing #{0} mount point")]
    MissingMountPoint(&'static str),
}
