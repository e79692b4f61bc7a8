use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    LoadVideos,
}

impl Operation {
    fn failure_notice(&self) -> &'static str {
        match self {
            Operation::Search => {
                "An error occurred while searching. Check the console for more details."
            }
            Operation::LoadVideos => {
                "An error occurred while loading videos. Check the console for more details."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("{0}")]
    Application(String),
    #[error("{operation:?} failed: {detail}")]
    Transport { operation: Operation, detail: String },
}

impl SearchError {
    pub fn transport(operation: Operation, detail: impl Into<String>) -> Self {
        SearchError::Transport {
            operation,
            detail: detail.into(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            SearchError::Application(message) => message.clone(),
            SearchError::Transport { operation, .. } => operation.failure_notice().to_string(),
        }
    }
}

pub fn report_failure(error: &SearchError) {
    log::error!("Error: {}", error);
    crate::utils::alert_user(&error.user_message());
}
