use std::{collections::HashMap, sync::Arc};

use crate::{error::BuildError, reflect::RecordShape};

use super::{FieldMap, FilterDescriptor};

/// Always defined by the engine.
const BUILT_IN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ObjectId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FilterId(usize);

pub(crate) struct ObjectType {
    pub shape: RecordShape,
    pub fields: FieldMap,
    state: ObjectState,
}

impl ObjectType {
    pub fn name(&self) -> &'static str {
        self.shape.name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    /// Members are still being built. References to it are valid, its fields are not.
    Building,
    Ready,
    /// Ended up without any field; not part of the schema.
    Vacant,
}

/// Types built during a single schema derivation, keyed by record name.
///
/// A record is registered once: every later occurrence, including recursive ones reached while
/// its own members are being built, resolves to the same [`ObjectId`].
#[derive(Default)]
pub(crate) struct TypeCache {
    objects: Vec<ObjectType>,
    objects_by_name: HashMap<&'static str, ObjectId>,
    filters: Vec<Arc<FilterDescriptor>>,
    filters_by_element: HashMap<&'static str, Option<FilterId>>,
}

impl TypeCache {
    /// `Some(None)` for a known record without any usable field.
    pub fn lookup(&self, name: &str) -> Option<Option<ObjectId>> {
        let id = *self.objects_by_name.get(name)?;

        Some(match self[id].state {
            ObjectState::Vacant => None,
            ObjectState::Building | ObjectState::Ready => Some(id),
        })
    }

    pub fn reserve(&mut self, shape: RecordShape) -> ObjectId {
        let id = ObjectId(self.objects.len());

        self.objects.push(ObjectType {
            shape,
            fields: FieldMap::default(),
            state: ObjectState::Building,
        });
        self.objects_by_name.insert(shape.name(), id);

        id
    }

    pub fn complete(&mut self, id: ObjectId, fields: FieldMap) {
        let object = &mut self.objects[id.0];
        object.fields = fields;
        object.state = ObjectState::Ready;
    }

    pub fn vacate(&mut self, id: ObjectId) {
        self.objects[id.0].state = ObjectState::Vacant;
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.objects
            .iter()
            .filter(|object| object.state == ObjectState::Ready)
    }

    /// `Some(None)` when the element type is known to have nothing to filter on.
    pub fn lookup_filter(&self, element: &str) -> Option<Option<FilterId>> {
        self.filters_by_element.get(element).copied()
    }

    pub fn insert_filter(&mut self, element: &'static str, filter: Option<FilterDescriptor>) -> Option<FilterId> {
        let id = filter.map(|filter| {
            self.filters.push(Arc::new(filter));
            FilterId(self.filters.len() - 1)
        });

        self.filters_by_element.insert(element, id);

        id
    }

    pub fn filter(&self, id: FilterId) -> &Arc<FilterDescriptor> {
        &self.filters[id.0]
    }

    pub fn filters(&self) -> impl Iterator<Item = &FilterDescriptor> {
        self.filters.iter().map(AsRef::as_ref)
    }

    /// Makes sure no record takes the name of the root type, a filter input or a built-in scalar.
    pub fn check_type_names(&self, root_type_name: &str) -> Result<(), BuildError> {
        let mut taken: HashMap<&str, &'static str> = BUILT_IN_SCALARS
            .into_iter()
            .map(|name| (name, "a built-in scalar"))
            .collect();

        for filter in self.filters() {
            taken.insert(&filter.name, "a filter input type");
        }

        taken.insert(root_type_name, "the root type");

        match self.objects().find_map(|object| Some((object.name(), *taken.get(object.name())?))) {
            Some((record, taken_by)) => Err(BuildError::TypeNameCollision { record, taken_by }),
            None => Ok(()),
        }
    }
}

impl std::ops::Index<ObjectId> for TypeCache {
    type Output = ObjectType;

    fn index(&self, id: ObjectId) -> &Self::Output {
        &self.objects[id.0]
    }
}
