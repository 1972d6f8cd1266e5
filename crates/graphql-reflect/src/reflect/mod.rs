//! Runtime view over statically typed values.
//!
//! [`Reflect::shape`] describes a type once, ahead of any instance, and is what the schema is
//! derived from. [`Reflect::reflect`] exposes an instance as a [`Value`] tree, which is what the
//! resolvers read at query time. Records implement both through [`record!`](crate::record).

mod computed;
mod impls;
mod macros;
mod shape;

use std::{any::Any, borrow::Cow, fmt};

use chrono::{DateTime, Utc};

pub use computed::{Computed, ComputedField};
pub use shape::{shape_of, unraw, MemberShape, Primitive, RecordShape, Shape};

pub trait Reflect: Send + Sync + 'static {
    fn shape() -> Shape
    where
        Self: Sized;

    fn reflect(&self) -> Value<'_>;

    fn into_value(self) -> Value<'static>
    where
        Self: Sized;
}

/// A value with a fixed set of named members.
pub trait Record: Send + Sync + 'static {
    /// Looks up a member by its declared name.
    fn member(&self, name: &str) -> Option<Value<'_>>;

    fn as_any(&self) -> &(dyn Any + Send + Sync);

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(Cow<'a, str>),
    Timestamp(DateTime<Utc>),
    Record(RecordRef<'a>),
    List(Vec<Value<'a>>),
    /// A computed member, `None` when the instance carries no function for it.
    Computed(Option<&'a dyn ComputedField>),
}

impl<'a> Value<'a> {
    pub fn record<R: Record>(record: &'a R) -> Self {
        Value::Record(RecordRef::Borrowed(record))
    }

    pub fn owned_record<R: Record>(record: R) -> Value<'static> {
        Value::Record(RecordRef::Owned(Box::new(record)))
    }

    /// The numeric value of integer and float variants.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(n) => Some(n as f64),
            Value::Uint(n) => Some(n as f64),
            Value::Float(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Value::Uint(value) => f.debug_tuple("Uint").field(value).finish(),
            Value::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Value::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Value::Timestamp(value) => f.debug_tuple("Timestamp").field(value).finish(),
            Value::Record(_) => f.write_str("Record"),
            Value::List(values) => f.debug_tuple("List").field(values).finish(),
            Value::Computed(func) => f.debug_tuple("Computed").field(&func.is_some()).finish(),
        }
    }
}

/// A record inside a [`Value`]: borrowed from the queried data, or produced by a computed member.
pub enum RecordRef<'a> {
    Borrowed(&'a dyn Record),
    Owned(Box<dyn Record>),
}

impl RecordRef<'_> {
    pub fn get(&self) -> &dyn Record {
        match self {
            RecordRef::Borrowed(record) => *record,
            RecordRef::Owned(record) => record.as_ref(),
        }
    }
}
