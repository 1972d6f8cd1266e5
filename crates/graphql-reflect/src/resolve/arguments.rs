use async_graphql::{dynamic::ObjectAccessor, Value as ConstValue};

use crate::{reflect::Value, schema::FilterDescriptor};

use super::lookup;

/// Arguments supplied to a collection field, in the form the resolver applies them.
#[derive(Debug, Default)]
pub(super) struct FieldArguments<'f> {
    /// Members of `where`, each with the path of the member it compares against.
    pub(super) filter: Option<Vec<(&'f [&'static str], FilterValue)>>,
    pub(super) skip: Option<i64>,
    pub(super) limit: Option<i64>,
}

impl<'f> FieldArguments<'f> {
    pub fn parse(args: &ObjectAccessor<'_>, filter: Option<&'f FilterDescriptor>) -> Self {
        let filter = filter.and_then(|descriptor| {
            let object = args.get("where").filter(|value| !value.is_null())?.object().ok()?;

            let members = object
                .iter()
                .filter_map(|(name, value)| {
                    let member = descriptor.members.get(name.as_str())?;
                    let expected = FilterValue::from_const(value.as_value())?;

                    Some((member.path.as_slice(), expected))
                })
                .collect();

            Some(members)
        });

        Self {
            filter,
            skip: integer(args, "skip"),
            limit: integer(args, "limit"),
        }
    }

    /// With a `where` argument, the first element matching any of its members, otherwise the
    /// `skip`/`limit` window.
    pub fn select<'a>(&self, items: Vec<Value<'a>>) -> Vec<Value<'a>> {
        match &self.filter {
            Some(filter) => first_match(items, filter),
            None => window(items, self.skip, self.limit),
        }
    }
}

fn integer(args: &ObjectAccessor<'_>, name: &str) -> Option<i64> {
    args.get(name)
        .filter(|value| !value.is_null())
        .and_then(|value| value.i64().ok())
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum FilterValue {
    String(String),
    Boolean(bool),
    Number(f64),
}

impl FilterValue {
    fn from_const(value: &ConstValue) -> Option<Self> {
        match value {
            ConstValue::String(value) => Some(FilterValue::String(value.clone())),
            ConstValue::Boolean(value) => Some(FilterValue::Boolean(*value)),
            ConstValue::Number(value) => value.as_f64().map(FilterValue::Number),
            _ => None,
        }
    }

    /// Numbers compare by value, whatever the width or signedness of the member.
    fn matches(&self, actual: &Value<'_>) -> bool {
        match (self, actual) {
            (FilterValue::String(expected), Value::Str(actual)) => expected == actual,
            (FilterValue::Boolean(expected), Value::Bool(actual)) => expected == actual,
            (FilterValue::Number(expected), actual) => actual.as_f64() == Some(*expected),
            _ => false,
        }
    }
}

fn first_match<'a>(items: Vec<Value<'a>>, filter: &[(&[&'static str], FilterValue)]) -> Vec<Value<'a>> {
    let found = items.into_iter().find(|item| {
        let Value::Record(record) = item else {
            return false;
        };

        filter.iter().any(|(path, expected)| {
            lookup(record.get(), path).is_some_and(|(_, actual)| expected.matches(&actual))
        })
    });

    found.into_iter().collect()
}

fn window<T>(mut items: Vec<T>, skip: Option<i64>, limit: Option<i64>) -> Vec<T> {
    let len = items.len();

    let start = skip.map_or(0, |skip| clamp(skip).min(len.saturating_sub(1)));
    let end = limit.map_or(len, |limit| start.saturating_add(clamp(limit)).min(len));

    if start >= end {
        return Vec::new();
    }

    items.truncate(end);
    items.drain(..start);
    items
}

/// Negative counts are treated as zero.
fn clamp(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}
