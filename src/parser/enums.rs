//! `<enumeration>` / `<bitfield>` → [`Enumeration`].

use super::{attr_or_empty, c_attr_or_empty, children_named};
use crate::model::{EnumMember, Enumeration};
use roxmltree::Node;

/// Build an enumeration owned by `module`. Whether it is a flags type is
/// decided by the name suffix alone, not by the element tag.
pub fn build_enumeration(node: Node, module: &str) -> Enumeration {
    let name = attr_or_empty(node, "name");
    let members = children_named(node, "member")
        .map(|member| EnumMember {
            name: attr_or_empty(member, "name"),
            c_name: c_attr_or_empty(member, "identifier"),
            value: attr_or_empty(member, "value"),
        })
        .collect();

    Enumeration {
        is_flag: name.ends_with("Flags"),
        c_name: c_attr_or_empty(node, "type"),
        module: module.to_string(),
        name,
        members,
    }
}
