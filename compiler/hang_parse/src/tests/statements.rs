//! Statement coverage and error reporting.

use hang_ir::{BinaryOp, ExprKind, SourcePosition, StmtKind};
use pretty_assertions::assert_eq;

use super::{expr, only_stmt, parse_failure, parse_source};
use crate::ParseError;

#[test]
fn test_empty_module() {
    assert!(parse_source("").body.is_empty());
    assert!(parse_source("\n\n# only a comment\n").body.is_empty());
}

#[test]
fn test_simple_statements() {
    let source = "\
pass
break
continue
return
return a, b
del a, b[0]
global g, h
nonlocal n
raise
raise E from cause
assert x, 'message'
import os.path as p, sys
from . import a
from ..pkg.mod import (b as c, d,)
from mod import *
";
    let tree = parse_source(source);
    let kinds: Vec<_> = tree
        .statements()
        .map(|s| std::mem::discriminant(&s.kind))
        .collect();
    assert_eq!(kinds.len(), 15);

    let stmts: Vec<_> = tree.statements().collect();
    assert!(matches!(stmts[4].kind, StmtKind::Return(Some(_))));
    assert!(matches!(&stmts[5].kind, StmtKind::Delete(targets) if targets.len() == 2));
    assert!(matches!(
        &stmts[9].kind,
        StmtKind::Raise {
            exc: Some(_),
            cause: Some(_)
        }
    ));
    match &stmts[11].kind {
        StmtKind::Import(names) => {
            assert_eq!(&*names[0].name, "os.path");
            assert_eq!(names[0].asname.as_deref(), Some("p"));
        }
        other => panic!("expected import, got {other:?}"),
    }
    match &stmts[13].kind {
        StmtKind::ImportFrom {
            module,
            level,
            names,
        } => {
            assert_eq!(module.as_deref(), Some("pkg.mod"));
            assert_eq!(*level, 2);
            assert_eq!(names.len(), 2);
        }
        other => panic!("expected from-import, got {other:?}"),
    }
}

#[test]
fn test_semicolon_separated_statements() {
    let tree = parse_source("a = 1; b = 2;\n");
    assert_eq!(tree.body.len(), 2);
}

#[test]
fn test_assignment_forms() {
    let tree = parse_source("a = b = c\n");
    match &only_stmt(&tree).kind {
        StmtKind::Assign { targets, value } => {
            assert_eq!(targets.len(), 2);
            assert_eq!(expr(&tree, *value).kind, ExprKind::Name("c".into()));
        }
        other => panic!("expected assignment, got {other:?}"),
    }

    let tree = parse_source("total <<= 2\n");
    assert!(matches!(
        only_stmt(&tree).kind,
        StmtKind::AugAssign {
            op: BinaryOp::Shl,
            ..
        }
    ));

    let tree = parse_source("count: int\n");
    assert!(matches!(
        only_stmt(&tree).kind,
        StmtKind::AnnAssign { value: None, .. }
    ));

    let tree = parse_source("first, *rest = items\n");
    match &only_stmt(&tree).kind {
        StmtKind::Assign { targets, .. } => {
            assert!(matches!(
                &expr(&tree, targets[0]).kind,
                ExprKind::Tuple(elts) if elts.len() == 2
            ));
        }
        other => panic!("expected assignment, got {other:?}"),
    }
}

#[test]
fn test_if_elif_else_nests() {
    let tree = parse_source("if a:\n    pass\nelif b:\n    pass\nelse:\n    pass\n");
    let StmtKind::If { orelse, .. } = &only_stmt(&tree).kind else {
        panic!("expected if");
    };
    assert_eq!(orelse.len(), 1);
    let nested = tree.arena.stmt(orelse[0]);
    assert!(matches!(&nested.kind, StmtKind::If { orelse, .. } if orelse.len() == 1));
    assert_eq!(nested.span.start, SourcePosition::new(3, 0));
}

#[test]
fn test_loops() {
    let tree = parse_source(
        "while x := next(it):\n    continue\nelse:\n    pass\nfor i, (a, b) in pairs:\n    pass\n",
    );
    assert_eq!(tree.body.len(), 2);
    let stmts: Vec<_> = tree.statements().collect();
    assert!(matches!(&stmts[0].kind, StmtKind::While { orelse, .. } if orelse.len() == 1));
    assert!(matches!(
        &stmts[1].kind,
        StmtKind::For {
            is_async: false,
            ..
        }
    ));
}

#[test]
fn test_with_statements() {
    let tree = parse_source("with open(a) as f, lock:\n    pass\n");
    assert!(matches!(&only_stmt(&tree).kind, StmtKind::With { items, .. } if items.len() == 2));

    let tree = parse_source("with (\n    open(a) as f,\n    open(b) as g,\n):\n    pass\n");
    assert!(matches!(&only_stmt(&tree).kind, StmtKind::With { items, .. } if items.len() == 2));

    let tree = parse_source("with (yield_manager()) as m:\n    pass\n");
    assert!(matches!(
        &only_stmt(&tree).kind,
        StmtKind::With { items, .. } if items[0].target.is_some()
    ));
}

#[test]
fn test_try_statement() {
    let source = "\
try:
    risky()
except (ValueError, TypeError) as err:
    handle(err)
except:
    raise
else:
    fine()
finally:
    cleanup()
";
    let tree = parse_source(source);
    let stmt = only_stmt(&tree);
    let StmtKind::Try {
        handlers,
        orelse,
        finalbody,
        ..
    } = &stmt.kind
    else {
        panic!("expected try");
    };
    assert_eq!(handlers.len(), 2);
    assert_eq!(handlers[0].name.as_deref(), Some("err"));
    assert!(handlers[1].kind.is_none());
    assert_eq!((orelse.len(), finalbody.len()), (1, 1));
    assert_eq!(stmt.span.end, SourcePosition::new(10, 13));
}

#[test]
fn test_class_definition() {
    let tree = parse_source("@dataclass\nclass Point(Base, metaclass=Meta):\n    x: int = 0\n");
    let StmtKind::ClassDef(class) = &only_stmt(&tree).kind else {
        panic!("expected class");
    };
    assert_eq!(&*class.name, "Point");
    assert_eq!(class.bases.len(), 1);
    assert_eq!(class.keywords.len(), 1);
    assert_eq!(class.decorators.len(), 1);
}

#[test]
fn test_function_definition_details() {
    let tree = parse_source("def f(a, /, b, *, c: int = 1) -> str:\n    return ''\n");
    let StmtKind::FunctionDef(def) = &only_stmt(&tree).kind else {
        panic!("expected def");
    };
    assert_eq!(def.params.len(), 3);
    assert!(def.returns.is_some());
    assert!(def.params[2].annotation.is_some());
    assert!(def.params[2].default.is_some());
}

#[test]
fn test_expression_forms() {
    let source = "\
value = lambda x, *a, k=1, **kw: x if k else a
items = [y for x in data if x for y in x]
table = {k: v for k, v in pairs}
merged = {**base, 'key': 1}
unique = {*a, b}
part = seq[1:2, ::3, -1]
flag = a is not b and c not in d or not e
power = -2 ** -x
text = 'abc' \"def\"
gen = (x async for x in stream)
call = f(*args, key=value, **kwargs)
await_it = await task
";
    let tree = parse_source(source);
    assert_eq!(tree.body.len(), 12);
}

#[test]
fn test_implicit_string_concatenation() {
    let tree = parse_source("x = 'ab' r'cd'\ny = f'{a}' 'b'\n");
    let values: Vec<_> = tree
        .statements()
        .map(|s| match &s.kind {
            StmtKind::Assign { value, .. } => expr(&tree, *value).kind.clone(),
            other => panic!("expected assignment, got {other:?}"),
        })
        .collect();
    assert_eq!(
        values,
        vec![
            ExprKind::Constant(hang_ir::Constant::Str {
                value: "abcd".into(),
                is_bytes: false
            }),
            ExprKind::FormattedString,
        ]
    );
}

#[test]
fn test_unexpected_token() {
    assert_eq!(
        parse_failure("x = )\n"),
        ParseError::UnexpectedToken {
            expected: "expression",
            found: ")".into(),
            position: SourcePosition::new(1, 4),
        }
    );
}

#[test]
fn test_missing_colon() {
    assert_eq!(
        parse_failure("def f()\n    pass\n"),
        ParseError::UnexpectedToken {
            expected: "`:`",
            found: "newline".into(),
            position: SourcePosition::new(1, 7),
        }
    );
}

#[test]
fn test_unexpected_end_of_input() {
    let err = parse_failure("x = (1,\n");
    assert!(matches!(err, ParseError::UnexpectedEof { .. }), "{err:?}");
}

#[test]
fn test_unexpected_indent() {
    let err = parse_failure("    x = 1\n");
    assert_eq!(err.position(), SourcePosition::new(1, 0));
}

#[test]
fn test_try_without_handlers_is_error() {
    let err = parse_failure("try:\n    pass\nx = 1\n");
    assert_eq!(err.position(), SourcePosition::new(3, 0));
}
