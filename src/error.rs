use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeverityError {
    #[error("Select a level for Ease of Identification.")]
    MissingEaseOfIdentification,

    #[error("invalid option '{value}' for {criterion} (allowed: {allowed})")]
    InvalidOption {
        criterion: String,
        value: String,
        allowed: String,
    },

    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("comments are not available in the {0} calculator")]
    CommentsUnsupported(String),

    #[error("{0} cannot be reset to unselected in the {1} calculator")]
    NotClearable(String, String),

    #[error("no examples available for {0}")]
    NoExamples(String),

    #[error("invalid comment argument '{0}' (expected <criterion>=<text>)")]
    InvalidCommentArg(String),

    #[error("unknown session command: {0}")]
    UnknownCommand(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("refusing to overwrite existing config file: {0}")]
    ConfigExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeverityError {
    /// Errors caused by the selections a user supplied, as opposed to the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingEaseOfIdentification
                | Self::InvalidOption { .. }
                | Self::UnknownCriterion(_)
                | Self::CommentsUnsupported(_)
                | Self::NotClearable(..)
                | Self::NoExamples(_)
                | Self::InvalidCommentArg(_)
                | Self::UnknownCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SeverityError>;
