//! Errors surfaced through the facade and their rendered form.

use bumpalo::Bump;
use exprtree::{
    CodeGenerator, Error, ExprBuilder, GeneratorOptions, MalformedIrError, NodeKind, Type,
    render_error_to, render_error_to_string_no_color,
};
use miette::Diagnostic;
use pretty_assertions::assert_eq;

fn code_of(error: &Error) -> String {
    error.code().map(|c| c.to_string()).unwrap_or_default()
}

#[test]
fn test_empty_block_surfaces_as_malformed_ir() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let error: Error = b.block(&[]).unwrap_err().into();
    assert!(matches!(error, Error::MalformedIr(MalformedIrError::EmptyBlock)));
    assert_eq!(code_of(&error), "exprtree::malformed_ir");
    assert_eq!(
        error.to_string(),
        "malformed expression tree: block must contain at least one expression"
    );
}

#[test]
fn test_invalid_assignment_target() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let body = b.block(&[b.assign(b.constant(1), b.constant(2))]).unwrap();
    let error = exprtree::compile(body).unwrap_err();

    assert!(matches!(
        error,
        Error::InvalidAssignmentTarget {
            kind: NodeKind::Constant
        }
    ));
    assert_eq!(code_of(&error), "exprtree::invalid_assignment_target");

    let rendered = render_error_to_string_no_color(&error);
    assert!(rendered.contains("cannot assign to Constant expression"), "{}", rendered);
    assert!(rendered.contains("exprtree::invalid_assignment_target"), "{}", rendered);
    assert!(rendered.contains("help:"), "{}", rendered);
}

#[test]
fn test_nesting_limit_error() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let field = b.member(b.this(), "Obj", "f", Type::Int).unwrap();
    let body = b.block(&[b.assign(field, b.constant(1))]).unwrap();

    let error =
        exprtree::compile_with_options(body, GeneratorOptions { max_depth: 1 }).unwrap_err();
    assert!(matches!(
        error,
        Error::NestingTooDeep {
            depth: 2,
            max_depth: 1
        }
    ));
    assert_eq!(code_of(&error), "exprtree::nesting_too_deep");
}

#[test]
fn test_unsupported_index_read() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let arr = b.parameter(1, "arr", b.array_type(Type::Int));
    let body = b
        .block_typed(Type::Int, &[b.array_access(arr, b.constant(0))])
        .unwrap();

    let error: Error = CodeGenerator::compile(body, GeneratorOptions::default())
        .unwrap_err()
        .into();
    assert_eq!(code_of(&error), "exprtree::unsupported_node");
    assert!(error.help().is_none());
}

#[test]
fn test_render_to_writer() {
    let error = Error::from(MalformedIrError::VoidArrayElement);

    let mut buf = Vec::new();
    render_error_to(&error, &mut buf).unwrap();
    let rendered = String::from_utf8(buf).unwrap();

    assert!(rendered.contains("array element type must not be void"), "{}", rendered);
}
