use async_graphql::{dynamic::FieldValue, Number, Value as ConstValue};

use crate::{
    reflect::{RecordRef, Value},
    schema::{ScalarKind, TypeDescriptor},
};

/// Converts a reflected value into what the engine expects for a field of type `ty`.
///
/// Records are handed over as-is so that the resolvers of the nested fields can read them.
/// Returns `None` when the value does not have the declared type.
///
/// A null only makes it here as a list element. A null field is the absence of a value.
pub(crate) fn into_field_value<'a>(value: Value<'a>, ty: &TypeDescriptor) -> Option<FieldValue<'a>> {
    let value = match (value, ty) {
        (Value::Null, _) => FieldValue::NULL,
        (Value::List(items), TypeDescriptor::List(element)) => {
            let items = items
                .into_iter()
                .map(|item| into_field_value(item, element))
                .collect::<Option<Vec<_>>>()?;

            FieldValue::list(items)
        }
        (Value::Record(RecordRef::Borrowed(record)), TypeDescriptor::Object(_)) => {
            FieldValue::borrowed_any(record.as_any())
        }
        (Value::Record(RecordRef::Owned(record)), TypeDescriptor::Object(_)) => {
            FieldValue::boxed_any(record.into_any())
        }
        (value, TypeDescriptor::Scalar(kind)) => FieldValue::value(scalar(value, *kind)?),
        _ => return None,
    };

    Some(value)
}

fn scalar(value: Value<'_>, kind: ScalarKind) -> Option<ConstValue> {
    match (kind, value) {
        (ScalarKind::String, Value::Str(value)) => Some(ConstValue::String(value.into_owned())),
        (ScalarKind::Boolean, Value::Bool(value)) => Some(ConstValue::Boolean(value)),
        (ScalarKind::Number, Value::Timestamp(timestamp)) => Some(number(timestamp.timestamp_millis() as f64)),
        // Every integer becomes a float, losing precision past 2^53.
        (ScalarKind::Number, value) => value.as_f64().map(number),
        _ => None,
    }
}

/// Non-finite floats have no JSON representation and come out as null.
fn number(value: f64) -> ConstValue {
    Number::from_f64(value).map_or(ConstValue::Null, ConstValue::Number)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::Reflect;

    fn number_of(value: Value<'_>) -> Option<ConstValue> {
        scalar(value, ScalarKind::Number)
    }

    #[test]
    fn integers_become_floats() {
        assert_eq!(number_of(2u8.reflect()), Some(ConstValue::from(2.0)));
        assert_eq!(number_of((-7i32).reflect()), Some(ConstValue::from(-7.0)));
        assert_eq!(number_of(0.5f64.reflect()), Some(ConstValue::from(0.5)));
    }

    #[test]
    fn large_integers_are_rounded() {
        let Some(ConstValue::Number(rounded)) = number_of(i64::MAX.reflect()) else {
            unreachable!("integers are numbers");
        };

        assert_eq!(rounded.as_f64(), Some(9_223_372_036_854_775_808.0));

        let Some(ConstValue::Number(rounded)) = number_of(9_007_199_254_740_993u64.reflect()) else {
            unreachable!("integers are numbers");
        };

        assert_eq!(rounded.as_f64(), Some(9_007_199_254_740_992.0));
    }

    #[test]
    fn timestamps_are_epoch_milliseconds() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(
            number_of(timestamp.reflect()),
            Some(ConstValue::from(1_704_164_645_000.0))
        );
    }

    #[test]
    fn non_finite_floats_are_null() {
        assert_eq!(number_of(f64::NAN.reflect()), Some(ConstValue::Null));
    }

    #[test]
    fn mismatched_values_are_refused() {
        assert_eq!(scalar("2".reflect(), ScalarKind::Number), None);
        assert_eq!(scalar(2u8.reflect(), ScalarKind::String), None);
        assert_eq!(scalar(true.reflect(), ScalarKind::String), None);

        let list = TypeDescriptor::List(Box::new(TypeDescriptor::Scalar(ScalarKind::String)));
        assert!(into_field_value(vec!["a", "b"].reflect(), &list).is_some());
        assert!(into_field_value("a".reflect(), &list).is_none());
        assert!(into_field_value(vec![1u8].reflect(), &list).is_none());
        assert!(into_field_value(Value::Null, &list).is_some());
    }
}
