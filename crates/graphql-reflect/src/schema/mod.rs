//! Derivation of query-facing type descriptors from reflected shapes.

mod cache;
mod filter;
mod introspect;
mod members;

use async_graphql::dynamic::TypeRef;
use indexmap::IndexMap;

use crate::{reflect::Primitive, resolve::FieldResolver};

pub(crate) use cache::{FilterId, ObjectId, TypeCache};
pub(crate) use filter::FilterDescriptor;
pub(crate) use introspect::TypeIntrospector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScalarKind {
    String,
    Boolean,
    Number,
}

impl ScalarKind {
    pub(crate) fn type_name(self) -> &'static str {
        match self {
            ScalarKind::String => TypeRef::STRING,
            ScalarKind::Boolean => TypeRef::BOOLEAN,
            // Integers of every width are exposed as floats, GraphQL's `Int` being 32 bits.
            ScalarKind::Number => TypeRef::FLOAT,
        }
    }
}

impl From<Primitive> for ScalarKind {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::String => ScalarKind::String,
            Primitive::Bool => ScalarKind::Boolean,
            Primitive::Int | Primitive::Uint | Primitive::Float => ScalarKind::Number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypeDescriptor {
    Scalar(ScalarKind),
    List(Box<TypeDescriptor>),
    Object(ObjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgumentSet {
    None,
    /// `where`, on collections of records.
    Where(FilterId),
    /// `skip` and `limit`, on collections of anything else.
    Pagination,
}

pub(crate) struct FieldDescriptor {
    /// Lower-cased name, as exposed in the schema.
    pub name: String,
    pub declared_name: &'static str,
    pub ty: TypeDescriptor,
    pub arguments: ArgumentSet,
    pub resolver: FieldResolver,
}

pub(crate) type FieldMap = IndexMap<String, FieldDescriptor>;
