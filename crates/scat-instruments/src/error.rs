use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("{instrument}: no score named '{subscale_id}'")]
    UnknownSubscale {
        instrument: String,
        subscale_id: String,
    },

    #[error("{instrument}: {source}")]
    OutOfRange {
        instrument: String,
        #[source]
        source: ValidationError,
    },
}
