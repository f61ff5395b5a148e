use std::collections::HashMap;

use crate::ast::ast::Expr;

/// Returns a copy of `expr` with every subtree that structurally equals a
/// key in `mapping` replaced by the mapped expression.
///
/// Matching happens before recursion: a matched subtree is replaced whole
/// and its children are never visited, so for `x+(y+z)` with both `y` and
/// `y+z` mapped, the `y+z` rule wins and the `y` rule is never applied.
/// Replacements are not re-scanned. Behavior is unspecified when two keys
/// could match the same node.
pub fn replace(expr: &Expr, mapping: &HashMap<Expr, Expr>) -> Expr {
    if let Some(replacement) = mapping.get(expr) {
        return replacement.clone();
    }

    match expr {
        Expr::Id(_) | Expr::Number(_) => expr.clone(),
        Expr::Bin(left, op, right) => Expr::Bin(
            Box::new(replace(left, mapping)),
            *op,
            Box::new(replace(right, mapping)),
        ),
    }
}
