//! `<record>` → [`Record`] with its fields and functions.

use super::function::build_function;
use super::types::{build_type, first_type_child};
use super::{attr_is, attr_or_empty, c_attr_or_empty};
use crate::model::{Field, Record};
use roxmltree::Node;

/// Build a record owned by `module`. Only direct children are visited, so
/// functions of nested records never leak into the outer one.
pub fn build_record(node: Node, module: &str) -> Record {
    let mut record = Record {
        name: attr_or_empty(node, "name"),
        c_name: c_attr_or_empty(node, "type"),
        module: module.to_string(),
        deprecated: attr_is(node, "deprecated", "1"),
        ..Default::default()
    };

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "field" => record.fields.push(build_field(child)),
            "constructor" | "function" | "method" => record.functions.push(build_function(child)),
            _ => {}
        }
    }

    record
}

fn build_field(node: Node) -> Field {
    Field {
        name: attr_or_empty(node, "name"),
        writable: attr_is(node, "writable", "1"),
        readable: attr_is(node, "readable", "1"),
        private: attr_is(node, "private", "1"),
        ty: first_type_child(node).map(build_type),
    }
}
