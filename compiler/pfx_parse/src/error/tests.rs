use super::*;
use pretty_assertions::assert_eq;

#[test]
fn message_includes_input_and_position() {
    let err = SyntaxError::new(SyntaxErrorKind::MissingOperand, 4, "(+ 1)");
    assert_eq!(err.to_string(), "missing operand in (+ 1) at index 4");
}

#[test]
fn too_many_operands_names_arity() {
    let err = SyntaxError::new(
        SyntaxErrorKind::TooManyOperands { expected: 2 },
        8,
        "(+ 1 2 3)",
    );
    assert_eq!(
        err.to_string(),
        "too many operands, expected 2 in (+ 1 2 3) at index 8"
    );
}

#[test]
fn incorrect_identifier_quotes_character() {
    let kind = SyntaxErrorKind::IncorrectIdentifier('#');
    assert_eq!(kind.to_string(), "incorrect identifier '#'");
}

#[test]
fn incorrect_identifier_at_end_of_input() {
    let kind = SyntaxErrorKind::IncorrectIdentifier('\0');
    assert_eq!(kind.to_string(), "incorrect identifier at end of input");
}

#[test]
fn accessors() {
    let err = SyntaxError::new(SyntaxErrorKind::UnknownEnding, 2, "x y");
    assert_eq!(err.kind(), &SyntaxErrorKind::UnknownEnding);
    assert_eq!(err.position(), 2);
    assert_eq!(err.input(), "x y");
}
