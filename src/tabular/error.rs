use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabularError {
    #[error("Failed to build column '{column}'")]
    Column {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to assemble report frame")]
    Frame(#[from] PolarsError),
}
