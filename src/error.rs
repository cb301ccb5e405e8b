use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Need at least one point")]
    InvalidInput,
    #[error("Hull with {vertices} vertices has no farthest pair")]
    DegenerateHull { vertices: usize },
    #[error("Malformed hull: {0}")]
    MalformedHull(String),
}
