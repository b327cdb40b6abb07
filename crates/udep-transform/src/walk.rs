//! Generic Tree Walker.

use crate::error::{Result, TransformError};
use udep_ast::Node;

/// Depth-first pre-order visit of every descendant of `node` (not `node`
/// itself). The first error returned by `visit` stops the walk.
pub fn walk_descendants<F>(node: &Node, visit: &mut F) -> Result<()>
where
    F: FnMut(&Node) -> Result<()>,
{
    for child in node.children() {
        visit(child)?;
        walk_descendants(child, visit)?;
    }
    Ok(())
}

/// Rejects import/export forms anywhere below a top-level statement.
pub fn reject_nested_module_forms(statement: &Node) -> Result<()> {
    walk_descendants(statement, &mut |node| {
        if node.is_module_declaration() {
            return Err(TransformError::MisplacedModuleForm { kind: node.kind() });
        }
        Ok(())
    })
}
