use colorfn::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorMeError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Preference store error: {0}")]
    Store(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ColorMeError>;
