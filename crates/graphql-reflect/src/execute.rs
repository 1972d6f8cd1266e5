use async_graphql::{dynamic::Schema, Request, Value as ConstValue};

use crate::{
    reflect::{Reflect, Value},
    Error, Result,
};

/// The queried value, made available to the root resolver through the request data.
pub(crate) struct RootValue(Box<dyn Reflect>);

impl RootValue {
    pub fn new<T: Reflect>(value: T) -> Self {
        Self(Box::new(value))
    }

    pub fn reflect(&self) -> Value<'_> {
        self.0.reflect()
    }
}

pub(crate) struct QueryExecutor<'s> {
    schema: &'s Schema,
}

impl<'s> QueryExecutor<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Runs `text` and serializes the response as pretty-printed JSON.
    ///
    /// A response without data means the request as a whole was refused (parsing, validation):
    /// the call fails with the first error. Field errors are kept in the response next to the
    /// partial data.
    pub async fn execute(&self, root: RootValue, text: &str) -> Result<Vec<u8>> {
        let response = self.schema.execute(Request::new(text).data(root)).await;

        if response.data == ConstValue::Null {
            if let Some(error) = response.errors.first() {
                tracing::debug!(errors = response.errors.len(), "query failed: {}", error.message);
                return Err(Error::Execution(error.message.clone()));
            }
        }

        if !response.errors.is_empty() {
            tracing::debug!(errors = response.errors.len(), "query resolved with field errors");
        }

        Ok(serde_json::to_vec_pretty(&response)?)
    }
}
