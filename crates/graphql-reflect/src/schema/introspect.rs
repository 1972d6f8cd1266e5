use indexmap::map::Entry;

use crate::{
    error::BuildError,
    options::{CollisionPolicy, SchemaOptions},
    reflect::{RecordShape, Shape},
    resolve::FieldResolver,
};

use super::{
    filter::FilterBuilder,
    members::{visible_members, VisibleMember},
    ArgumentSet, FieldDescriptor, FieldMap, ObjectId, ScalarKind, TypeCache, TypeDescriptor,
};

/// Walks a shape into type descriptors, registering every record it meets in a [`TypeCache`].
pub(crate) struct TypeIntrospector<'o> {
    cache: TypeCache,
    options: &'o SchemaOptions,
}

impl<'o> TypeIntrospector<'o> {
    pub fn new(options: &'o SchemaOptions) -> Self {
        Self {
            cache: TypeCache::default(),
            options,
        }
    }

    pub fn into_cache(self) -> TypeCache {
        self.cache
    }

    /// The output type of `shape`, or `None` if it has no usable one.
    pub fn build(&mut self, shape: &Shape) -> Result<Option<TypeDescriptor>, BuildError> {
        let descriptor = match shape {
            Shape::Primitive(primitive) => Some(TypeDescriptor::Scalar(ScalarKind::from(*primitive))),
            Shape::Timestamp => Some(TypeDescriptor::Scalar(ScalarKind::Number)),
            Shape::Optional(inner) => self.build(inner)?,
            Shape::List(element) => match element.unwrap_optional() {
                // Nothing would call the functions of a list of computed members.
                Shape::Computed(_) => None,
                _ => self.build(element)?.map(|element| TypeDescriptor::List(Box::new(element))),
            },
            Shape::Record(record) => self.build_record(record)?.map(TypeDescriptor::Object),
            Shape::Computed(_) | Shape::Opaque => None,
        };

        Ok(descriptor)
    }

    fn build_record(&mut self, record: &RecordShape) -> Result<Option<ObjectId>, BuildError> {
        if let Some(known) = self.cache.lookup(record.name()) {
            return Ok(known);
        }

        let id = self.cache.reserve(*record);
        let mut fields = FieldMap::default();

        for member in visible_members(record) {
            let Some(field) = self.build_field(record, member)? else {
                continue;
            };

            match fields.entry(field.name.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(field);
                }
                Entry::Occupied(existing) => match self.options.on_collision {
                    CollisionPolicy::FirstWins => {
                        tracing::warn!(
                            type_name = record.name(),
                            field = %field.name,
                            kept = existing.get().declared_name,
                            shadowed = field.declared_name,
                            "members fold to the same field name, keeping the first"
                        );
                    }
                    CollisionPolicy::Reject => {
                        return Err(BuildError::FieldCollision {
                            type_name: record.name(),
                            first: existing.get().declared_name,
                            second: field.declared_name,
                            field: field.name,
                        });
                    }
                },
            }
        }

        if fields.is_empty() {
            tracing::debug!(type_name = record.name(), "record has no queryable member");
            self.cache.vacate(id);
            return Ok(None);
        }

        self.cache.complete(id, fields);

        Ok(Some(id))
    }

    fn build_field(
        &mut self,
        owner: &RecordShape,
        member: VisibleMember,
    ) -> Result<Option<FieldDescriptor>, BuildError> {
        let (ty, arguments, resolver) = match member.shape.unwrap_optional() {
            Shape::Computed(returns) => {
                let Some(ty) = self.build(returns)? else {
                    tracing::debug!(
                        type_name = owner.name(),
                        member = member.name,
                        "dropping computed member without a concrete return type"
                    );
                    return Ok(None);
                };

                let resolver = FieldResolver::computed(member.name, *owner, member.path, ty.clone());

                (ty, ArgumentSet::None, resolver)
            }
            shape => {
                let Some(ty) = self.build(shape)? else {
                    tracing::debug!(type_name = owner.name(), member = member.name, "dropping unsupported member");
                    return Ok(None);
                };

                let arguments = FilterBuilder::new(&mut self.cache).arguments(shape);
                let filter = match arguments {
                    ArgumentSet::Where(id) => Some(self.cache.filter(id).clone()),
                    ArgumentSet::None | ArgumentSet::Pagination => None,
                };
                let resolver = FieldResolver::stored(member.name, *owner, member.path, ty.clone(), filter);

                (ty, arguments, resolver)
            }
        };

        Ok(Some(FieldDescriptor {
            name: member.name.to_lowercase(),
            declared_name: member.name,
            ty,
            arguments,
            resolver,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{record, Computed, Reflect};

    struct Leaf {
        label: String,
    }

    record!(Leaf { label });

    struct Pair {
        left: Leaf,
        right: Option<Leaf>,
    }

    record!(Pair { left, right });

    struct Node {
        value: i64,
        children: Vec<Node>,
        parent: Option<Box<Node>>,
    }

    record!(Node { value, children, parent });

    struct Unsupported {
        extra: HashMap<String, String>,
        raw: serde_json::Value,
    }

    record!(Unsupported { extra, raw });

    struct Mixed {
        extra: HashMap<String, String>,
        nothing: Unsupported,
        lazy: Computed<Mixed, serde_json::Value>,
        name: String,
    }

    record!(Mixed { extra, nothing, lazy, name });

    #[allow(non_snake_case)]
    struct Shouting {
        name: String,
        NAME: String,
    }

    record!(Shouting { name, NAME });

    fn build<T: Reflect>(options: &SchemaOptions) -> (Result<Option<TypeDescriptor>, BuildError>, TypeCache) {
        let mut introspector = TypeIntrospector::new(options);
        let result = introspector.build(&T::shape());

        (result, introspector.into_cache())
    }

    fn field_names(cache: &TypeCache, name: &str) -> Vec<String> {
        let Some(Some(id)) = cache.lookup(name) else {
            unreachable!("{name} is not registered");
        };

        cache[id].fields.keys().cloned().collect()
    }

    #[test]
    fn repeated_records_are_registered_once() {
        let (result, cache) = build::<Pair>(&SchemaOptions::default());

        let Ok(Some(TypeDescriptor::Object(pair))) = result else {
            unreachable!("a pair has fields");
        };

        let fields = &cache[pair].fields;
        assert_eq!(fields["left"].ty, fields["right"].ty);
        assert_eq!(cache.objects().count(), 2);
        assert_eq!(field_names(&cache, "Leaf"), ["label"]);
    }

    #[test]
    fn self_references_terminate() {
        let (result, cache) = build::<Node>(&SchemaOptions::default());

        let Ok(Some(TypeDescriptor::Object(node))) = result else {
            unreachable!("a node has fields");
        };

        let fields = &cache[node].fields;
        assert_eq!(fields["children"].ty, TypeDescriptor::List(Box::new(TypeDescriptor::Object(node))));
        assert_eq!(fields["parent"].ty, TypeDescriptor::Object(node));
        assert_eq!(fields["value"].ty, TypeDescriptor::Scalar(ScalarKind::Number));

        let ArgumentSet::Where(filter) = fields["children"].arguments else {
            unreachable!("children are filterable");
        };
        assert_eq!(cache.filter(filter).name, "NodeFilter");
    }

    #[test]
    fn unsupported_members_are_dropped() {
        let (result, cache) = build::<Mixed>(&SchemaOptions::default());

        assert!(matches!(result, Ok(Some(TypeDescriptor::Object(_)))));
        assert_eq!(field_names(&cache, "Mixed"), ["name"]);
        assert_eq!(cache.lookup("Unsupported"), Some(None));
    }

    #[test]
    fn records_without_fields_have_no_type() {
        let (result, _) = build::<Unsupported>(&SchemaOptions::default());

        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn first_member_wins_a_name_collision() {
        let (result, cache) = build::<Shouting>(&SchemaOptions::default());

        assert!(result.is_ok());
        assert_eq!(field_names(&cache, "Shouting"), ["name"]);

        let Some(Some(id)) = cache.lookup("Shouting") else {
            unreachable!("shouting is registered");
        };
        assert_eq!(cache[id].fields["name"].declared_name, "name");
    }

    #[test]
    fn name_collisions_can_be_rejected() {
        let options = SchemaOptions {
            on_collision: CollisionPolicy::Reject,
            ..Default::default()
        };

        let (result, _) = build::<Shouting>(&options);

        let Err(error) = result else {
            unreachable!("the collision must be reported");
        };

        insta::assert_snapshot!(error.to_string(), @"type `Shouting` has members `name` and `NAME` that both map to the field `name`");
    }
}
