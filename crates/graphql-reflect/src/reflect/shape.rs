use std::fmt;

use async_graphql::dynamic::FieldValue;

use super::{Record, Reflect};

/// Recovers a record from the query engine's type-erased parent value.
pub(crate) type CastFn = for<'a> fn(&'a FieldValue<'a>) -> Option<&'a dyn Record>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Bool,
    Int,
    Uint,
    Float,
}

/// Type-level description of a reflected value.
#[derive(Debug, Clone)]
pub enum Shape {
    Primitive(Primitive),
    /// A point in time, exposed as milliseconds since the epoch.
    Timestamp,
    List(Box<Shape>),
    Optional(Box<Shape>),
    Record(RecordShape),
    /// A computed member and the shape it returns.
    Computed(Box<Shape>),
    /// A type without a fixed shape: maps, untyped JSON and the like.
    Opaque,
}

impl Shape {
    pub fn unwrap_optional(&self) -> &Shape {
        match self {
            Shape::Optional(inner) => inner.unwrap_optional(),
            shape => shape,
        }
    }

    /// The element shape of a collection, looking through optionals.
    pub fn collection_element(&self) -> Option<&Shape> {
        match self.unwrap_optional() {
            Shape::List(element) => Some(element.as_ref()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct RecordShape {
    name: &'static str,
    members: fn() -> Vec<MemberShape>,
    cast: CastFn,
}

impl RecordShape {
    /// `members` is only called when the schema needs them, which lets a record refer to itself.
    pub fn new<R: Record>(name: &'static str, members: fn() -> Vec<MemberShape>) -> Self {
        Self {
            name,
            members,
            cast: cast_record::<R>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn members(&self) -> Vec<MemberShape> {
        (self.members)()
    }

    pub(crate) fn cast<'a>(&self, value: &'a FieldValue<'a>) -> Option<&'a dyn Record> {
        (self.cast)(value)
    }
}

impl fmt::Debug for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordShape").field("name", &self.name).finish_non_exhaustive()
    }
}

fn cast_record<'a, R: Record>(value: &'a FieldValue<'a>) -> Option<&'a dyn Record> {
    value.downcast_ref::<R>().map(|record| record as &dyn Record)
}

#[derive(Debug, Clone)]
pub struct MemberShape {
    pub name: &'static str,
    pub shape: Shape,
    /// An embedded member also promotes its own members into the enclosing record.
    pub embedded: bool,
}

impl MemberShape {
    pub fn new(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            embedded: false,
        }
    }

    pub fn embedded(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            embedded: true,
        }
    }
}

/// Shape of the member reached by `field`. Used by [`record!`](crate::record) to name a member's
/// type without spelling it out.
pub fn shape_of<R, T: Reflect>(_field: impl Fn(&R) -> &T) -> Shape {
    T::shape()
}

/// An identifier as declared, without the `r#` of a raw identifier.
#[doc(hidden)]
pub fn unraw(ident: &'static str) -> &'static str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
