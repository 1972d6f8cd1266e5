use std::{fmt, sync::Arc};

use anyhow::anyhow;

use super::{Record, Reflect, Shape, Value};

/// A member whose value is produced on demand from the record holding it.
pub trait ComputedField: Send + Sync {
    /// Runs the computation against `owner`, the record that directly contains this member.
    fn evaluate(&self, owner: &dyn Record) -> anyhow::Result<Value<'static>>;
}

type ComputeFn<S, R> = dyn Fn(&S) -> anyhow::Result<R> + Send + Sync;

/// Computed member of a record `S` returning `R`.
///
/// An instance may carry no function at all, in which case the field resolves to `null`.
pub struct Computed<S, R> {
    func: Option<Arc<ComputeFn<S, R>>>,
}

impl<S, R> Computed<S, R> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&S) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self {
            func: Some(Arc::new(func)),
        }
    }

    pub fn none() -> Self {
        Self { func: None }
    }
}

impl<S, R> Default for Computed<S, R> {
    fn default() -> Self {
        Self::none()
    }
}

impl<S, R> Clone for Computed<S, R> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<S, R> fmt::Debug for Computed<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed").field("set", &self.func.is_some()).finish()
    }
}

impl<S: Record, R: Reflect> ComputedField for Computed<S, R> {
    fn evaluate(&self, owner: &dyn Record) -> anyhow::Result<Value<'static>> {
        let Some(func) = &self.func else {
            return Ok(Value::Null);
        };

        let owner = owner
            .as_any()
            .downcast_ref::<S>()
            .ok_or_else(|| anyhow!("unknown type"))?;

        func(owner).map(Reflect::into_value)
    }
}

impl<S: Record, R: Reflect> Reflect for Computed<S, R> {
    fn shape() -> Shape {
        Shape::Computed(Box::new(R::shape()))
    }

    fn reflect(&self) -> Value<'_> {
        Value::Computed(self.func.as_ref().map(|_| self as &dyn ComputedField))
    }

    fn into_value(self) -> Value<'static> {
        Value::Null
    }
}
