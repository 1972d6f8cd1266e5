use indexmap::IndexMap;

use crate::reflect::{RecordShape, Shape};

use super::{members::visible_members, ArgumentSet, FilterId, ScalarKind, TypeCache};

/// Input type of the `where` argument on a collection of records.
#[derive(Debug)]
pub(crate) struct FilterDescriptor {
    pub name: String,
    /// Keyed by lower-cased member name.
    pub members: IndexMap<String, FilterMember>,
}

#[derive(Debug)]
pub(crate) struct FilterMember {
    pub kind: ScalarKind,
    pub path: Vec<&'static str>,
}

pub(crate) struct FilterBuilder<'c> {
    cache: &'c mut TypeCache,
}

impl<'c> FilterBuilder<'c> {
    pub fn new(cache: &'c mut TypeCache) -> Self {
        Self { cache }
    }

    /// Arguments for a field of the given shape.
    pub fn arguments(&mut self, shape: &Shape) -> ArgumentSet {
        let Some(element) = shape.collection_element() else {
            return ArgumentSet::None;
        };

        match element.unwrap_optional() {
            Shape::Record(record) => self.filter(record).map_or(ArgumentSet::None, ArgumentSet::Where),
            _ => ArgumentSet::Pagination,
        }
    }

    fn filter(&mut self, record: &RecordShape) -> Option<FilterId> {
        if let Some(known) = self.cache.lookup_filter(record.name()) {
            return known;
        }

        let mut members = IndexMap::new();

        for member in visible_members(record) {
            let Shape::Primitive(primitive) = *member.shape.unwrap_optional() else {
                continue;
            };

            members
                .entry(member.name.to_lowercase())
                .or_insert_with(|| FilterMember {
                    kind: ScalarKind::from(primitive),
                    path: member.path,
                });
        }

        let filter = (!members.is_empty()).then(|| FilterDescriptor {
            name: format!("{}Filter", record.name()),
            members,
        });

        self.cache.insert_filter(record.name(), filter)
    }
}
