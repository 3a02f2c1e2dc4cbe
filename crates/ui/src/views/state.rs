use services::LoadError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidQuiz(String),
    Unreadable(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::InvalidQuiz(detail) => format!("The file is not a valid quiz. {detail}"),
            ViewError::Unreadable(detail) => format!("The file could not be read. {detail}"),
            ViewError::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<&LoadError> for ViewError {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::Malformed(_) | LoadError::Invalid(_) => {
                ViewError::InvalidQuiz(err.to_string())
            }
            LoadError::Io(io) => ViewError::Unreadable(io.to_string()),
            _ => ViewError::Unknown,
        }
    }
}
