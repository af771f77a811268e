use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("invalid viewport width: {width}")]
    InvalidViewport { width: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown task `{0}`")]
    UnknownTask(String),

    #[error("unknown pane `{0}`")]
    UnknownPane(String),

    #[error("pane `{0}` is already bound")]
    DuplicatePane(String),
}
