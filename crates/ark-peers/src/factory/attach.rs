//! Attach steps.
//!
//! An engine update builds the replacement from positional params only.
//! Auxiliary metadata is restored here, in schema order: compared fields
//! from the arguments the caller passed, then copied fields straight from
//! the original node.

use ark_native::{AuxParam, AuxShape};
use tracing::trace;

use super::AuxValue;
use crate::context::Context;
use crate::error::Result;
use crate::node::Node;

/// Write the compared auxiliary arguments onto `node`.
pub(super) fn apply_compared(
    cx: &Context,
    node: &Node,
    fields: &[AuxParam],
    values: &[AuxValue],
) -> Result<()> {
    debug_assert_eq!(fields.len(), values.len());
    for (param, value) in fields.iter().zip(values) {
        trace!(field = param.field.name(), peer = ?node.peer(), "applying auxiliary field");
        match value {
            AuxValue::Node(child) => node.set_child(cx, param.field, child.as_ref())?,
            AuxValue::List(children) => node.set_children(cx, param.field, children)?,
        }
    }
    Ok(())
}

/// Copy fields the kind has no accessor for from `original` onto `updated`.
///
/// Never compared, always copied.
pub(super) fn copy_from_original(
    cx: &Context,
    updated: &Node,
    original: &Node,
    fields: &[AuxParam],
) -> Result<()> {
    let engine = cx.engine();
    let context = cx.peer()?;
    let (from, to) = (original.peer(), updated.peer());
    for param in fields {
        trace!(field = param.field.name(), ?from, ?to, "copying auxiliary field");
        let field = param.field;
        match param.shape {
            AuxShape::Node | AuxShape::OptNode => {
                engine.set_node(context, to, field, engine.get_node(context, from, field));
            }
            AuxShape::List => {
                engine.set_nodes(context, to, field, engine.get_nodes(context, from, field));
            }
            AuxShape::Bool => {
                engine.set_bool(context, to, field, engine.get_bool(context, from, field));
            }
            AuxShape::Int => {
                engine.set_int(context, to, field, engine.get_int(context, from, field));
            }
        }
    }
    Ok(())
}
