//! Selective GraphQL queries over arbitrary in-memory values.
//!
//! A value describes its own shape through [`Reflect`]. For every query the shape is walked
//! into a GraphQL schema: records become object types, collections of records get a `where`
//! filter, collections of scalars get `skip`/`limit` pagination, and every field is bound to a
//! resolver reading the matching member out of the value. The query then runs on
//! `async-graphql`'s dynamic schema and the response is serialized as pretty-printed JSON.
//!
//! ```ignore
//! use graphql_reflect::{record, Computed};
//!
//! #[derive(Clone)]
//! struct Cat {
//!     name: String,
//!     age: u32,
//! }
//!
//! record!(Cat { name, age });
//!
//! let cats = vec![Cat { name: "Maru".into(), age: 3 }];
//! let bytes = graphql_reflect::query("cats", cats, "{ cats { name } }")?;
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod assemble;
mod error;
mod execute;
mod options;
pub mod reflect;
mod resolve;
mod schema;

pub use async_graphql::dynamic::Schema;
pub use error::{BuildError, Error, ResolveError};
pub use options::{CollisionPolicy, SchemaOptions};
pub use reflect::{
    Computed, ComputedField, MemberShape, Primitive, Record, RecordRef, RecordShape, Reflect, Shape, Value,
};

use assemble::SchemaAssembler;
use execute::{QueryExecutor, RootValue};
use schema::TypeIntrospector;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Runs `text` against a schema derived from `root`, exposed under the field `root_field`.
///
/// Blocks the calling thread until the query completes.
pub fn query<T: Reflect>(root_field: &str, root: T, text: &str) -> Result<Vec<u8>> {
    query_with_options(root_field, root, text, &SchemaOptions::default())
}

pub fn query_with_options<T: Reflect>(
    root_field: &str,
    root: T,
    text: &str,
    options: &SchemaOptions,
) -> Result<Vec<u8>> {
    futures::executor::block_on(query_async_with_options(root_field, root, text, options))
}

pub async fn query_async<T: Reflect>(root_field: &str, root: T, text: &str) -> Result<Vec<u8>> {
    query_async_with_options(root_field, root, text, &SchemaOptions::default()).await
}

pub async fn query_async_with_options<T: Reflect>(
    root_field: &str,
    root: T,
    text: &str,
    options: &SchemaOptions,
) -> Result<Vec<u8>> {
    let schema = build_schema::<T>(root_field, options)?;

    QueryExecutor::new(&schema)
        .execute(RootValue::new(root), text)
        .await
}

/// Builds the schema a value of type `T` is queried against, without running anything.
///
/// Every call starts from an empty type cache.
pub fn build_schema<T: Reflect>(root_field: &str, options: &SchemaOptions) -> Result<Schema> {
    let mut introspector = TypeIntrospector::new(options);

    let root = introspector
        .build(&T::shape())?
        .ok_or_else(|| Error::UnsupportedRoot {
            root_field: root_field.to_owned(),
        })?;

    let cache = introspector.into_cache();
    cache.check_type_names(&options.root_type_name)?;

    tracing::debug!(root_field, "assembling schema");

    SchemaAssembler::new(options).assemble(root_field, root, cache)
}
