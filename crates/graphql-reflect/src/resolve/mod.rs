//! Field resolution: reading a member out of the queried value and shaping it for the engine.

mod arguments;
mod output;

use std::sync::Arc;

use async_graphql::{
    dynamic::{FieldValue, ResolverContext},
    Value as ConstValue,
};

pub(crate) use output::into_field_value;

use crate::{
    error::ResolveError,
    reflect::{Record, RecordRef, RecordShape, Value},
    schema::{FilterDescriptor, TypeDescriptor},
};

use arguments::FieldArguments;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolveMode {
    /// Reads the member as stored, applying collection arguments.
    Stored,
    /// Calls the function held by the member.
    Computed,
}

/// Resolver bound to one field of one object type.
#[derive(Clone)]
pub(crate) struct FieldResolver {
    field: &'static str,
    owner: RecordShape,
    path: Vec<&'static str>,
    mode: ResolveMode,
    ty: TypeDescriptor,
    filter: Option<Arc<FilterDescriptor>>,
}

impl FieldResolver {
    pub fn stored(
        field: &'static str,
        owner: RecordShape,
        path: Vec<&'static str>,
        ty: TypeDescriptor,
        filter: Option<Arc<FilterDescriptor>>,
    ) -> Self {
        Self {
            field,
            owner,
            path,
            mode: ResolveMode::Stored,
            ty,
            filter,
        }
    }

    pub fn computed(field: &'static str, owner: RecordShape, path: Vec<&'static str>, ty: TypeDescriptor) -> Self {
        Self {
            field,
            owner,
            path,
            mode: ResolveMode::Computed,
            ty,
            filter: None,
        }
    }

    /// Resolves the field for the engine. A failure is reported against the field's path and
    /// nulls the field, leaving its siblings intact.
    pub fn resolve_in<'a>(&self, ctx: &ResolverContext<'a>) -> Option<FieldValue<'a>> {
        // Fields of a null element in a list of records.
        if ctx.parent_value.as_value() == Some(&ConstValue::Null) {
            return FieldValue::NONE;
        }

        self.try_resolve_in(ctx).unwrap_or_else(|error| {
            report(ctx, &error);
            FieldValue::NONE
        })
    }

    fn try_resolve_in<'a>(&self, ctx: &ResolverContext<'a>) -> Result<Option<FieldValue<'a>>, ResolveError> {
        let source = self.owner.cast(ctx.parent_value).ok_or_else(|| self.unknown_type())?;
        let arguments = FieldArguments::parse(&ctx.args, self.filter.as_deref());

        match self.resolve(source, &arguments)? {
            Value::Null => Ok(FieldValue::NONE),
            value => into_field_value(value, &self.ty)
                .map(Some)
                .ok_or_else(|| self.unknown_type()),
        }
    }

    fn resolve<'a>(&self, source: &'a dyn Record, arguments: &FieldArguments<'_>) -> Result<Value<'a>, ResolveError> {
        let (owner, value) = lookup(source, &self.path).ok_or_else(|| self.unknown_type())?;

        match (self.mode, value) {
            (ResolveMode::Computed, Value::Computed(Some(func))) => {
                func.evaluate(owner).map_err(ResolveError::Computed)
            }
            (ResolveMode::Computed, Value::Computed(None) | Value::Null) => Ok(Value::Null),
            (ResolveMode::Computed, _) => Err(self.unknown_type()),
            (ResolveMode::Stored, Value::List(items)) => Ok(Value::List(arguments.select(items))),
            (ResolveMode::Stored, value) => Ok(value),
        }
    }

    fn unknown_type(&self) -> ResolveError {
        ResolveError::UnknownType { field: self.field }
    }
}

/// Adds `error` to the response, at the path of the field being resolved.
pub(crate) fn report(ctx: &ResolverContext<'_>, error: &dyn std::fmt::Display) {
    tracing::debug!("field resolution failed: {error}");

    let error = async_graphql::Error::new(error.to_string()).into_server_error(ctx.ctx.item.pos);
    ctx.ctx.add_error(ctx.ctx.set_error_path(error));
}

/// Follows `path` from `source`, returning the member at its end together with the record
/// holding it. A null along the way resolves the whole path to null.
fn lookup<'a>(source: &'a dyn Record, path: &[&'static str]) -> Option<(&'a dyn Record, Value<'a>)> {
    let (last, through) = path.split_last()?;
    let mut owner = source;

    for step in through {
        match owner.member(step)? {
            Value::Record(RecordRef::Borrowed(record)) => owner = record,
            Value::Null => return Some((owner, Value::Null)),
            _ => return None,
        }
    }

    Some((owner, owner.member(last)?))
}
