//! Data model for a parsed GIR document, independent of output format.
//!
//! Built in one pass by [`crate::parser`] and never mutated afterwards.
//! Names are copied verbatim from the XML; the only synthesized values are
//! the array constness rewrite and the `void` → `none` return type.

use serde::Serialize;

/// Common shape of the top-level named GIR entities.
pub trait Symbol {
    /// Introspected (binding-facing) name.
    fn name(&self) -> &str;
    /// Library-level symbol or type name.
    fn c_name(&self) -> &str;
}

/// Everything modeled from a single document.
#[derive(Debug, Default, Serialize)]
pub struct Model {
    pub enumerations: Vec<Enumeration>,
    pub records: Vec<Record>,
}

/// `<enumeration>` or `<bitfield>`.
#[derive(Debug, Default, Serialize)]
pub struct Enumeration {
    pub name: String,
    pub c_name: String,
    /// `c:identifier-prefixes` of the enclosing namespace
    pub module: String,
    /// Name ends with `Flags`
    pub is_flag: bool,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Default, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub c_name: String,
    /// Literal `value` attribute, not parsed as a number
    pub value: String,
}

/// `<record>` with its fields and the functions declared directly inside it.
#[derive(Debug, Default, Serialize)]
pub struct Record {
    pub name: String,
    pub c_name: String,
    pub module: String,
    pub deprecated: bool,
    pub fields: Vec<Field>,
    /// Constructors, functions and methods in document order
    pub functions: Vec<Function>,
}

#[derive(Debug, Default, Serialize)]
pub struct Field {
    pub name: String,
    pub writable: bool,
    pub readable: bool,
    pub private: bool,
    pub ty: Option<Type>,
}

/// A `<function>`, `<method>` or `<constructor>`.
#[derive(Debug, Default, Serialize)]
pub struct Function {
    pub name: String,
    pub c_name: String,
    /// Raw `type` attribute, kept only when present
    pub type_attr: Option<String>,
    pub deprecated: bool,
    pub throws: bool,
    pub parameters: Vec<Parameter>,
    /// An `<instance-parameter>` was declared
    pub has_instance_parameter: bool,
    pub is_constructor: bool,
    pub return_value: Option<ReturnValue>,
    pub doc: Option<Documentation>,
}

#[derive(Debug, Default, Serialize)]
pub struct Parameter {
    pub name: String,
    /// `transfer-ownership`, verbatim; `None` when absent
    pub transfer_ownership: Option<String>,
    pub direction: Option<String>,
    pub ty: Option<Type>,
    pub doc: Option<Documentation>,
}

#[derive(Debug, Default, Serialize)]
pub struct ReturnValue {
    pub allow_none: bool,
    pub skip: bool,
    pub transfer_ownership: Option<String>,
    pub ty: Option<Type>,
    pub doc: Option<Documentation>,
}

/// Type descriptor. Arrays and parameterized containers carry their element
/// types in `subtypes`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Type {
    pub name: String,
    pub c_name: String,
    pub subtypes: Vec<Type>,
}

/// Opaque `<doc>` text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Documentation {
    pub text: String,
}

macro_rules! impl_symbol {
    ($($ty:ty),*) => {
        $(
            impl Symbol for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn c_name(&self) -> &str {
                    &self.c_name
                }
            }
        )*
    };
}

impl_symbol!(Enumeration, Record, Function);

impl Function {
    /// Native type of the return value, if one was modeled.
    pub fn return_c_type(&self) -> Option<&str> {
        self.return_value
            .as_ref()
            .and_then(|rv| rv.ty.as_ref())
            .map(|ty| ty.c_name.as_str())
    }
}

impl Parameter {
    /// Introspected name of the parameter's type, empty when untyped.
    pub fn type_name(&self) -> &str {
        self.ty.as_ref().map(|ty| ty.name.as_str()).unwrap_or("")
    }

    pub fn c_type(&self) -> &str {
        self.ty.as_ref().map(|ty| ty.c_name.as_str()).unwrap_or("")
    }
}
