/// Implements [`Reflect`](crate::Reflect) and [`Record`](crate::Record) for a struct from the
/// list of members to expose.
///
/// A member prefixed with `..` is embedded: it is exposed as a field, and its own members are
/// also promoted into the struct.
///
/// ```ignore
/// record!(Animal { name, age });
/// record!(Dog { ..animal, color, friend, enemies });
/// ```
#[macro_export]
macro_rules! record {
    (@shape $name:ident, $members:ident; ) => {};
    (@shape $name:ident, $members:ident; .. $field:ident $(, $($rest:tt)*)?) => {
        $members.push($crate::MemberShape::embedded(
            $crate::reflect::unraw(stringify!($field)),
            $crate::reflect::shape_of(|record: &$name| &record.$field),
        ));
        $crate::record!(@shape $name, $members; $($($rest)*)?);
    };
    (@shape $name:ident, $members:ident; $field:ident $(, $($rest:tt)*)?) => {
        $members.push($crate::MemberShape::new(
            $crate::reflect::unraw(stringify!($field)),
            $crate::reflect::shape_of(|record: &$name| &record.$field),
        ));
        $crate::record!(@shape $name, $members; $($($rest)*)?);
    };

    (@member $this:ident, $wanted:ident; ) => {};
    (@member $this:ident, $wanted:ident; $(..)? $field:ident $(, $($rest:tt)*)?) => {
        if $wanted == $crate::reflect::unraw(stringify!($field)) {
            return ::std::option::Option::Some($crate::Reflect::reflect(&$this.$field));
        }
        $crate::record!(@member $this, $wanted; $($($rest)*)?);
    };

    ($name:ident { $($members:tt)* }) => {
        impl $crate::Reflect for $name {
            fn shape() -> $crate::Shape {
                let name = $crate::reflect::unraw(stringify!($name));
                $crate::Shape::Record($crate::RecordShape::new::<$name>(name, || {
                    #[allow(unused_mut)]
                    let mut members = ::std::vec::Vec::new();
                    $crate::record!(@shape $name, members; $($members)*);
                    members
                }))
            }

            fn reflect(&self) -> $crate::Value<'_> {
                $crate::Value::record(self)
            }

            fn into_value(self) -> $crate::Value<'static> {
                $crate::Value::owned_record(self)
            }
        }

        impl $crate::Record for $name {
            #[allow(unused_variables)]
            fn member(&self, name: &str) -> ::std::option::Option<$crate::Value<'_>> {
                let this = self;
                $crate::record!(@member this, name; $($members)*);
                ::std::option::Option::None
            }

            fn as_any(&self) -> &(dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync) {
                self
            }

            fn into_any(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::boxed::Box<dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync> {
                self
            }
        }
    };
}
