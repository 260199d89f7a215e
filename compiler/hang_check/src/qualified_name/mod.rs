//! Best-effort textual name of a call target.
//!
//! `os.path.join` → `"os.path.join"`, `handlers['x'].run` → `"handlers[x].run"`,
//! `factory()()` → `"factory"`. Any shape outside names, attributes, calls,
//! subscripts and constants makes the whole name unresolvable.

use hang_ir::{Constant, ExprId, ExprKind, SyntaxArena};

/// Resolve the name of `id`, or `None` if any part of it is unsupported.
pub fn resolve(arena: &SyntaxArena, id: ExprId) -> Option<String> {
    let mut name = String::new();
    push_name(arena, id, &mut name)?;
    Some(name)
}

/// Character length of the resolved name, `0` when unresolvable.
pub fn length(arena: &SyntaxArena, id: ExprId) -> usize {
    resolve(arena, id).map_or(0, |name| name.chars().count())
}

fn push_name(arena: &SyntaxArena, id: ExprId, out: &mut String) -> Option<()> {
    hang_ir::with_stack_room(|| match &arena.expr(id).kind {
        ExprKind::Name(name) => {
            out.push_str(name);
            Some(())
        }
        ExprKind::Attribute { value, attr } => {
            push_name(arena, *value, out)?;
            out.push('.');
            out.push_str(attr);
            Some(())
        }
        ExprKind::Call(call) => push_name(arena, call.func, out),
        ExprKind::Subscript { value, slice } => {
            push_name(arena, *value, out)?;
            out.push('[');
            push_name(arena, *slice, out)?;
            out.push(']');
            Some(())
        }
        ExprKind::Constant(constant) => {
            out.push_str(constant_text(constant));
            Some(())
        }
        _ => None,
    })
}

fn constant_text(constant: &Constant) -> &str {
    match constant {
        Constant::None => "None",
        Constant::True => "True",
        Constant::False => "False",
        Constant::Ellipsis => "Ellipsis",
        Constant::Number(text) | Constant::Str { value: text, .. } => text,
    }
}
