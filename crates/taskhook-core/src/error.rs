#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unrecognized task state '{0}'")]
    UnknownState(String),

    #[error("Invalid label '{0}': expected KEY=VALUE")]
    InvalidLabel(String),
}
