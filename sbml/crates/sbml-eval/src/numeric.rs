//! Numeric promotion.
//!
//! The one place genuine type-inference-like reasoning happens in the
//! evaluator: deciding whether a mixed Int/Real operation produces an Int or
//! a Real. Per `spec.md` §4.3.1, "both numeric" means every operand is Int
//! or Real; the result is Real if any operand is Real, else Int — except
//! `/` which always produces Real and `div`/`mod` which always take and
//! produce Int (Real operands are rejected outright for those two).

use sbml_util::{SbmlError, SbmlResult};

use crate::value::Value;

/// Two numeric operands, promoted to a common representation.
pub enum Promoted {
    Int(i64, i64),
    Real(f64, f64),
}

/// Promotes `a` and `b` for `+`, `-`, `*`, `**`: Real if either operand is
/// Real, otherwise Int. Neither operand being numeric is the caller's type
/// guard to enforce; this only decides the common kind once both already
/// are.
pub fn promote(a: &Value, b: &Value) -> Promoted {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Promoted::Int(*x, *y),
        _ => Promoted::Real(
            a.as_f64().expect("caller guarantees numeric"),
            b.as_f64().expect("caller guarantees numeric"),
        ),
    }
}

/// `/`: always Real, per `spec.md` §4.3.1.
pub fn divide(a: &Value, b: &Value) -> SbmlResult<Value> {
    let (x, y) = (
        a.as_f64().expect("caller guarantees numeric"),
        b.as_f64().expect("caller guarantees numeric"),
    );
    if y == 0.0 {
        return Err(SbmlError::Semantic);
    }
    Ok(Value::Real(x / y))
}

/// `div`/`mod`: both operands must already be Int; Real is rejected by the
/// caller's type guard before this is reached. Rust's native `/`/`%`
/// truncate toward zero; the reference interpreter's `div`/`mod` reduce
/// through Python's `operator.floordiv`/`operator.mod`, which floor toward
/// negative infinity instead, so mixed-sign operands need an adjustment:
/// `-7 div 2` is `-4` (not `-3`) and `-7 mod 2` is `1` (not `-1`).
pub fn int_div(a: i64, b: i64) -> SbmlResult<i64> {
    if b == 0 {
        return Err(SbmlError::Semantic);
    }
    let q = a.wrapping_div(b);
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

pub fn int_mod(a: i64, b: i64) -> SbmlResult<i64> {
    if b == 0 {
        return Err(SbmlError::Semantic);
    }
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_int_int_stays_int() {
        assert!(matches!(
            promote(&Value::Integer(1), &Value::Integer(2)),
            Promoted::Int(1, 2)
        ));
    }

    #[test]
    fn promote_mixed_goes_real() {
        assert!(matches!(
            promote(&Value::Integer(1), &Value::Real(2.0)),
            Promoted::Real(a, b) if a == 1.0 && b == 2.0
        ));
    }

    #[test]
    fn divide_by_zero_is_semantic_error() {
        assert_eq!(
            divide(&Value::Integer(1), &Value::Integer(0)),
            Err(SbmlError::Semantic)
        );
    }

    #[test]
    fn divide_always_produces_real() {
        assert_eq!(
            divide(&Value::Integer(4), &Value::Integer(2)),
            Ok(Value::Real(2.0))
        );
    }

    #[test]
    fn int_div_and_mod_reject_zero_divisor() {
        assert_eq!(int_div(4, 0), Err(SbmlError::Semantic));
        assert_eq!(int_mod(4, 0), Err(SbmlError::Semantic));
    }

    #[test]
    fn int_div_and_mod_agree_with_truncation_on_same_sign_operands() {
        assert_eq!(int_div(7, 2).unwrap(), 3);
        assert_eq!(int_mod(7, 2).unwrap(), 1);
    }

    #[test]
    fn int_div_and_mod_floor_toward_negative_infinity_on_mixed_signs() {
        assert_eq!(int_div(-7, 2).unwrap(), -4);
        assert_eq!(int_mod(-7, 2).unwrap(), 1);
        assert_eq!(int_div(7, -2).unwrap(), -4);
        assert_eq!(int_mod(7, -2).unwrap(), -1);
    }
}
