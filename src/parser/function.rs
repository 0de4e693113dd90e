//! `<constructor>` / `<function>` / `<method>` → [`Function`].

use super::types::{build_type, first_type_child};
use super::{attr_is, attr_opt, attr_or_empty, c_attr_or_empty, children_named};
use crate::model::{Documentation, Function, Parameter, ReturnValue, Type};
use roxmltree::Node;

pub fn build_function(node: Node) -> Function {
    let mut function = Function {
        name: attr_or_empty(node, "name"),
        c_name: c_attr_or_empty(node, "identifier"),
        type_attr: attr_opt(node, "type"),
        deprecated: attr_is(node, "deprecated", "1"),
        throws: attr_is(node, "throws", "1"),
        is_constructor: node.has_tag_name("constructor"),
        doc: build_doc(node),
        ..Default::default()
    };

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "return-value" => function.return_value = Some(build_return_value(child)),
            "parameters" => {
                for param in child.children().filter(Node::is_element) {
                    match param.tag_name().name() {
                        "parameter" => function.parameters.push(build_parameter(param)),
                        "instance-parameter" => function.has_instance_parameter = true,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    function
}

fn build_parameter(node: Node) -> Parameter {
    Parameter {
        name: attr_or_empty(node, "name"),
        transfer_ownership: attr_opt(node, "transfer-ownership"),
        direction: attr_opt(node, "direction"),
        ty: first_type_child(node).map(build_type),
        doc: build_doc(node),
    }
}

fn build_return_value(node: Node) -> ReturnValue {
    ReturnValue {
        allow_none: attr_is(node, "allow-none", "1"),
        skip: attr_is(node, "skip", "1"),
        transfer_ownership: attr_opt(node, "transfer-ownership"),
        ty: first_type_child(node).map(build_type).map(void_to_none),
        doc: build_doc(node),
    }
}

/// The defs format spells a void return as `none`.
fn void_to_none(mut ty: Type) -> Type {
    if ty.c_name == "void" {
        ty.c_name = "none".to_string();
    }
    ty
}

/// Text of the first `<doc>` child, kept as-is.
pub(crate) fn build_doc(node: Node) -> Option<Documentation> {
    children_named(node, "doc").next().map(|doc| Documentation {
        text: doc.text().unwrap_or_default().to_string(),
    })
}
