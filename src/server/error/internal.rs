use thiserror::Error;

/// Internal issues indicating unexpected stored data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored photo references of a moto are not a JSON array of strings.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse fotos of moto {moto_id}: {source}")]
    InvalidFotos {
        /// The moto whose column failed to parse
        moto_id: i64,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
