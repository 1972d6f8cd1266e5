use std::collections::HashSet;

use crate::reflect::{RecordShape, Shape};

/// A member reachable on a record, either declared on it or promoted from an embedded member.
#[derive(Debug, Clone)]
pub(crate) struct VisibleMember {
    pub name: &'static str,
    /// Declared names leading to the member, starting at the record itself.
    pub path: Vec<&'static str>,
    pub shape: Shape,
}

/// Lists the members of `record` in declaration order, each embedded member followed by the
/// members it promotes.
///
/// A promoted member is hidden by a member of the same name declared closer to `record`.
pub(crate) fn visible_members(record: &RecordShape) -> Vec<VisibleMember> {
    let mut visible = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![record.name()];

    collect(record, &[], &mut stack, &mut seen, &mut visible);

    visible
}

fn collect(
    record: &RecordShape,
    prefix: &[&'static str],
    stack: &mut Vec<&'static str>,
    seen: &mut HashSet<&'static str>,
    visible: &mut Vec<VisibleMember>,
) {
    let members = record.members();

    // Declared members shadow anything promoted at this level or below.
    let declared: Vec<_> = members
        .iter()
        .map(|member| member.name)
        .filter(|name| seen.insert(*name))
        .collect();

    for member in members {
        if !declared.contains(&member.name) {
            continue;
        }

        let mut path = prefix.to_vec();
        path.push(member.name);

        if member.embedded {
            if let Shape::Record(embedded) = member.shape.unwrap_optional() {
                if !stack.contains(&embedded.name()) {
                    stack.push(embedded.name());
                    visible.push(VisibleMember {
                        name: member.name,
                        path: path.clone(),
                        shape: member.shape.clone(),
                    });
                    collect(embedded, &path, stack, seen, visible);
                    stack.pop();
                    continue;
                }
            }
        }

        visible.push(VisibleMember {
            name: member.name,
            path,
            shape: member.shape,
        });
    }
}
