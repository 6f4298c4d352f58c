use crate::aggregate::error::AggregateError;
use crate::data::error::RentalDataError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalError {
    #[error(transparent)]
    Data(#[from] RentalDataError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("Polars operation failed")]
    PolarsError(#[from] PolarsError),

    #[error("Could not resolve date argument")]
    DateParsingError,

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),
}
