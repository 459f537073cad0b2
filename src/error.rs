use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
