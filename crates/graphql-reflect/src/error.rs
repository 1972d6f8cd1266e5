/// Failure of a top-level query call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the root value of `{root_field}` has no queryable shape")]
    UnsupportedRoot { root_field: String },
    #[error(transparent)]
    Build(#[from] BuildError),
    /// The assembled schema was refused by the query engine.
    #[error("invalid schema: {0}")]
    Schema(String),
    /// First request-level error reported by the query engine, such as a parse or validation error.
    #[error("{0}")]
    Execution(String),
    #[error("serializing response: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure while deriving a schema from a shape.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("type `{type_name}` has members `{first}` and `{second}` that both map to the field `{field}`")]
    FieldCollision {
        type_name: &'static str,
        field: String,
        first: &'static str,
        second: &'static str,
    },
    /// A record has the name of a type the schema defines on its own.
    #[error("record `{record}` has the same name as {taken_by}")]
    TypeNameCollision {
        record: &'static str,
        taken_by: &'static str,
    },
}

/// Failure while resolving a single field. Reported inside the response, next to the partial data.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown type")]
    UnknownType { field: &'static str },
    #[error("{0}")]
    Computed(anyhow::Error),
}
