//! `<type>` / `<array>` → [`Type`].

use super::{attr_or_empty, c_attr_or_empty};
use crate::model::Type;
use roxmltree::Node;

/// Prefixes that already mark a native type as const.
const CONST_MARKERS: &[&str] = &["const", "gconst"];

/// The first `<type>` or `<array>` child of a parameter, return value,
/// field or type.
pub fn first_type_child<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_type_node(*n))
}

fn is_type_node(node: Node) -> bool {
    node.has_tag_name("type") || node.has_tag_name("array")
}

/// Build a type descriptor, recursing into nested element types.
///
/// Arrays are const unless the enclosing element is an `out`/`inout`
/// parameter, so their native name gets a `const-` prefix when it does not
/// already carry one.
pub fn build_type(node: Node) -> Type {
    let mut c_name = c_attr_or_empty(node, "type");
    if node.has_tag_name("array") && !c_name.is_empty() && !is_const(&c_name) && !is_output(node) {
        c_name = format!("const-{}", c_name.replace(' ', "-"));
    }

    Type {
        name: attr_or_empty(node, "name"),
        c_name,
        subtypes: node.children().filter(|n| is_type_node(*n)).map(build_type).collect(),
    }
}

fn is_const(c_name: &str) -> bool {
    CONST_MARKERS.iter().any(|marker| c_name.starts_with(marker))
}

/// Direction of the enclosing parameter or return value.
fn is_output(node: Node) -> bool {
    node.parent_element()
        .and_then(|parent| parent.attribute("direction"))
        .is_some_and(|direction| direction == "out" || direction == "inout")
}
