use serde::Deserialize;

/// Settings for deriving a schema from a value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaOptions {
    /// Name of the synthesized type holding the single root field
    pub root_type_name: String,
    /// What to do when two members fold to the same lower-cased field name
    pub on_collision: CollisionPolicy,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            root_type_name: "RootQuery".to_owned(),
            on_collision: CollisionPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep the member seen first and log a warning for the shadowed one.
    #[default]
    FirstWins,
    /// Fail the schema build with [`crate::BuildError::FieldCollision`].
    Reject,
}
