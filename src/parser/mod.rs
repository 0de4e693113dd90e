//! GIR parser — walks the XML tree and builds the [`Model`].
//!
//! Only `<enumeration>`, `<bitfield>` and `<record>` children of a
//! `<namespace>` are modeled. GIR dialects differ in which optional
//! attributes they populate, so a missing attribute always degrades to an
//! empty string, `None` or `false` through the helpers below; the only hard
//! failure is XML that does not parse.

pub mod enums;
pub mod function;
pub mod record;
pub mod types;

use crate::error::{Error, Result};
use crate::model::Model;
use log::{debug, info};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

/// Namespace URI bound to the `c:` prefix in GIR files.
pub const C_NS: &str = "http://www.gtk.org/introspection/c/1.0";

/// Read and parse a GIR file.
pub fn parse_file(path: &Path) -> Result<Model> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse GIR text. Fails only when the text is not well-formed XML.
pub fn parse_str(text: &str) -> std::result::Result<Model, roxmltree::Error> {
    let document = Document::parse(text)?;
    let mut model = Model::default();

    // Namespaces may appear more than once and at any depth.
    for namespace in document.descendants().filter(|n| n.has_tag_name("namespace")) {
        let module = c_attr_or_empty(namespace, "identifier-prefixes");
        debug!("namespace {:?} (module {:?})", attr_or_empty(namespace, "name"), module);

        for element in namespace.children().filter(Node::is_element) {
            match element.tag_name().name() {
                "enumeration" | "bitfield" => {
                    model.enumerations.push(enums::build_enumeration(element, &module));
                }
                "record" => model.records.push(record::build_record(element, &module)),
                other => debug!("skipping <{}> {:?}", other, attr_or_empty(element, "name")),
            }
        }
    }

    info!(
        "parsed {} enumerations and {} records",
        model.enumerations.len(),
        model.records.len()
    );
    Ok(model)
}

// -- Attribute helpers --------------------------------------------------------

/// True only if `attr` is present and its value is exactly `expected`.
pub fn attr_is(node: Node, attr: &str, expected: &str) -> bool {
    node.attribute(attr) == Some(expected)
}

/// Unprefixed attribute, empty when absent.
pub fn attr_or_empty(node: Node, attr: &str) -> String {
    node.attribute(attr).unwrap_or_default().to_string()
}

/// Unprefixed attribute, `None` when absent.
pub fn attr_opt(node: Node, attr: &str) -> Option<String> {
    node.attribute(attr).map(str::to_string)
}

/// `c:`-prefixed attribute, empty when absent.
pub fn c_attr_or_empty(node: Node, attr: &str) -> String {
    node.attribute((C_NS, attr)).unwrap_or_default().to_string()
}

/// Direct element children with the given tag.
pub(crate) fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.has_tag_name(tag))
}
