use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Utc};

use super::{Primitive, Reflect, Shape, Value};

macro_rules! reflect_numbers {
    ($variant:ident => $primitive:ident as $repr:ty: $($ty:ty),+) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    Shape::Primitive(Primitive::$primitive)
                }

                fn reflect(&self) -> Value<'_> {
                    Value::$variant(*self as $repr)
                }

                fn into_value(self) -> Value<'static> {
                    Value::$variant(self as $repr)
                }
            }
        )+
    };
}

reflect_numbers!(Int => Int as i64: i8, i16, i32, i64, isize);
reflect_numbers!(Uint => Uint as u64: u8, u16, u32, u64, usize);
reflect_numbers!(Float => Float as f64: f32, f64);

impl Reflect for bool {
    fn shape() -> Shape {
        Shape::Primitive(Primitive::Bool)
    }

    fn reflect(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    fn into_value(self) -> Value<'static> {
        Value::Bool(self)
    }
}

impl Reflect for String {
    fn shape() -> Shape {
        Shape::Primitive(Primitive::String)
    }

    fn reflect(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }

    fn into_value(self) -> Value<'static> {
        Value::Str(Cow::Owned(self))
    }
}

impl Reflect for &'static str {
    fn shape() -> Shape {
        Shape::Primitive(Primitive::String)
    }

    fn reflect(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }

    fn into_value(self) -> Value<'static> {
        Value::Str(Cow::Borrowed(self))
    }
}

impl Reflect for DateTime<Utc> {
    fn shape() -> Shape {
        Shape::Timestamp
    }

    fn reflect(&self) -> Value<'_> {
        Value::Timestamp(*self)
    }

    fn into_value(self) -> Value<'static> {
        Value::Timestamp(self)
    }
}

impl Reflect for SystemTime {
    fn shape() -> Shape {
        Shape::Timestamp
    }

    fn reflect(&self) -> Value<'_> {
        system_time(*self)
    }

    fn into_value(self) -> Value<'static> {
        system_time(self)
    }
}

/// Times chrono cannot represent come out as null.
fn system_time(time: SystemTime) -> Value<'static> {
    let millis = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).ok(),
        Err(before) => i64::try_from(before.duration().as_millis()).ok().map(|millis| -millis),
    };

    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map_or(Value::Null, Value::Timestamp)
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }

    fn reflect(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Null, Reflect::reflect)
    }

    fn into_value(self) -> Value<'static> {
        self.map_or(Value::Null, Reflect::into_value)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape() -> Shape {
        Shape::List(Box::new(T::shape()))
    }

    fn reflect(&self) -> Value<'_> {
        Value::List(self.iter().map(Reflect::reflect).collect())
    }

    fn into_value(self) -> Value<'static> {
        Value::List(self.into_iter().map(Reflect::into_value).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape() -> Shape {
        Shape::List(Box::new(T::shape()))
    }

    fn reflect(&self) -> Value<'_> {
        Value::List(self.iter().map(Reflect::reflect).collect())
    }

    fn into_value(self) -> Value<'static> {
        Value::List(self.into_iter().map(Reflect::into_value).collect())
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn reflect(&self) -> Value<'_> {
        T::reflect(self)
    }

    fn into_value(self) -> Value<'static> {
        T::into_value(*self)
    }
}

impl<T: Reflect + Clone> Reflect for Arc<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn reflect(&self) -> Value<'_> {
        T::reflect(self)
    }

    fn into_value(self) -> Value<'static> {
        Arc::try_unwrap(self)
            .unwrap_or_else(|shared| T::clone(&shared))
            .into_value()
    }
}

impl Reflect for serde_json::Value {
    fn shape() -> Shape {
        Shape::Opaque
    }

    fn reflect(&self) -> Value<'_> {
        Value::Null
    }

    fn into_value(self) -> Value<'static> {
        Value::Null
    }
}

impl<K, V> Reflect for HashMap<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn shape() -> Shape {
        Shape::Opaque
    }

    fn reflect(&self) -> Value<'_> {
        Value::Null
    }

    fn into_value(self) -> Value<'static> {
        Value::Null
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn shape() -> Shape {
        Shape::Opaque
    }

    fn reflect(&self) -> Value<'_> {
        Value::Null
    }

    fn into_value(self) -> Value<'static> {
        Value::Null
    }
}
