use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown expert: {0}")]
    UnknownExpert(String),

    #[error("The start datetime should not be less than the current datetime.")]
    PastStart,

    #[error("The end datetime should not be less than the start datetime.")]
    EndBeforeStart,

    #[error("Please ensure that the start datetime and end datetime are from the same day.")]
    CrossDayWindow,

    #[error("Error: {0}")]
    CalendarSource(String),

    #[error("Calendar service error: {0}")]
    External(#[from] eyre::Report),
}

pub type SlotResult<T> = Result<T, SlotError>;
