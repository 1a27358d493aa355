//! Arithmetic errors

/// Failure of a fallible `BigNum` operation.
///
/// Everything that is not listed here (addition, multiplication, shifts,
/// narrowing accessors) is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// Division or remainder with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
}
