use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputObject, InputValue, Object, ResolverContext, Schema, TypeRef,
};

use crate::{
    execute::RootValue,
    reflect::Value,
    resolve::{into_field_value, report},
    schema::{ArgumentSet, FieldDescriptor, TypeCache, TypeDescriptor},
    Error, Result, SchemaOptions,
};

/// Turns the descriptors of a [`TypeCache`] into an executable schema with a single root field.
pub(crate) struct SchemaAssembler<'o> {
    options: &'o SchemaOptions,
}

impl<'o> SchemaAssembler<'o> {
    pub fn new(options: &'o SchemaOptions) -> Self {
        Self { options }
    }

    pub fn assemble(&self, root_field: &str, root: TypeDescriptor, cache: TypeCache) -> Result<Schema> {
        let root_type = Object::new(&self.options.root_type_name).field(Field::new(
            root_field,
            type_ref(&root, &cache),
            root_resolver(root),
        ));

        let mut builder = Schema::build(&self.options.root_type_name, None, None).register(root_type);

        for object in cache.objects() {
            let fields = object.fields.values().map(|field| build_field(field, &cache));
            builder = builder.register(fields.fold(Object::new(object.name()), Object::field));
        }

        for filter in cache.filters() {
            let input = filter.members.iter().fold(InputObject::new(&filter.name), |input, (name, member)| {
                input.field(InputValue::new(name, TypeRef::named(member.kind.type_name())))
            });

            builder = builder.register(input);
        }

        builder.finish().map_err(|error| Error::Schema(error.to_string()))
    }
}

fn build_field(field: &FieldDescriptor, cache: &TypeCache) -> Field {
    let resolver = field.resolver.clone();
    let built = Field::new(&field.name, type_ref(&field.ty, cache), move |ctx| {
        let value = resolver.resolve_in(&ctx);
        FieldFuture::new(async move { Ok(value) })
    });

    match field.arguments {
        ArgumentSet::None => built,
        ArgumentSet::Where(filter) => {
            built.argument(InputValue::new("where", TypeRef::named(&cache.filter(filter).name)))
        }
        ArgumentSet::Pagination => built
            .argument(InputValue::new("skip", TypeRef::named(TypeRef::INT)))
            .argument(InputValue::new("limit", TypeRef::named(TypeRef::INT))),
    }
}

fn root_resolver(
    ty: TypeDescriptor,
) -> impl for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static {
    move |ctx: ResolverContext<'_>| {
        let value = match ctx.ctx.data::<RootValue>() {
            Ok(root) => match root.reflect() {
                Value::Null => FieldValue::NONE,
                value => into_field_value(value, &ty).or_else(|| {
                    report(&ctx, &"unknown type");
                    FieldValue::NONE
                }),
            },
            Err(error) => {
                report(&ctx, &error.message);
                FieldValue::NONE
            }
        };

        FieldFuture::new(async move { Ok(value) })
    }
}

/// Every position is nullable, so that a failing field only nulls itself.
fn type_ref(ty: &TypeDescriptor, cache: &TypeCache) -> TypeRef {
    match ty {
        TypeDescriptor::Scalar(kind) => TypeRef::named(kind.type_name()),
        TypeDescriptor::List(element) => TypeRef::List(Box::new(type_ref(element, cache))),
        TypeDescriptor::Object(id) => TypeRef::named(cache[*id].name()),
    }
}
