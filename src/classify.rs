//! Function classification against the record that declares it.
//!
//! Kept out of the parser: whether a function binds to its record depends
//! on the record's name, which is only known once both are built.

use crate::model::{Function, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Bound to the owning record.
    Method,
    Constructor,
    /// Free function that merely lives inside the record.
    Function,
}

pub fn classify(function: &Function, record: &Record) -> FunctionKind {
    if function.is_constructor {
        FunctionKind::Constructor
    } else if function.has_instance_parameter || takes_record_first(function, record) {
        FunctionKind::Method
    } else {
        FunctionKind::Function
    }
}

/// First explicit parameter is typed as the record itself. A nameless
/// record never matches.
pub fn takes_record_first(function: &Function, record: &Record) -> bool {
    !record.name.is_empty()
        && function
            .parameters
            .first()
            .is_some_and(|p| p.ty.is_some() && p.type_name() == record.name)
}
