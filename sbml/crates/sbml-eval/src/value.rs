//! Runtime values.
//!
//! A single tagged union over the six kinds `spec.md` §3 lists. Lists are
//! heap-allocated and mutable by index assignment; tuples are heap-allocated
//! and never mutated after construction, so they need no interior
//! mutability. Strings are reference-counted immutable byte sequences:
//! literals are cheap to produce (the parser already holds them as interned
//! [`Symbol`]s) but `+` concatenation and other runtime-computed strings are
//! unbounded, so they are not interned.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use sbml_util::Symbol;

/// A List's backing storage. Shared via `Rc` so that an ordinary variable
/// assignment (`b = a;`) aliases the same list, matching the reference
/// interpreter's object-reference semantics for plain bindings; `::` and `+`
/// still allocate a fresh `Vec` per `spec.md` §9, since those are the two
/// operations the spec calls out as deviating from in-place aliasing.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

#[derive(Clone, Debug)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(Rc<str>),
    List(ListRef),
    Tuple(Rc<Vec<Value>>),
}

impl Value {
    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(items)))
    }

    pub fn tuple(items: Vec<Value>) -> Value {
        Value::Tuple(Rc::new(items))
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::String(s.into())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Real(_))
    }

    /// This value's kind name, for diagnostics (never shown to the SBML
    /// program itself, which only ever sees `SEMANTIC ERROR`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Real(_) => "Real",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Tuple(_) => "Tuple",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// Structural equality used by `==`/`<>`. Mixed Int/Real operands compare by
/// promoting the Int to `f64` (the resolved Open Question: `1 == 1.0` is
/// `true`). Comparing across disjoint kinds (e.g. Int vs String) is always
/// `false` here; the evaluator's type guard rejects those pairs before this
/// is ever reached for `==`/`<>`, but the two-kind-numeric case has to be
/// handled here since Int and Real are different variants.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => *a.borrow() == *b.borrow(),
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (a, b) if a.is_numeric() && b.is_numeric() => a.as_f64() == b.as_f64(),
            _ => false,
        }
    }
}

/// Canonical textual form, per `spec.md` §6's output table. Used both for
/// the top-level `print` statement (which never re-quotes a top-level
/// String) and recursively for List/Tuple elements (which do show String
/// elements quoted).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(true) => write!(f, "True"),
            Value::Boolean(false) => write!(f, "False"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write_real(f, *r),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => write_sequence(f, '[', ']', items.borrow().iter()),
            Value::Tuple(items) => write_sequence(f, '(', ')', items.iter()),
        }
    }
}

fn write_real(f: &mut fmt::Formatter<'_>, r: f64) -> fmt::Result {
    if r == r.trunc() && r.is_finite() {
        write!(f, "{r:.1}")
    } else {
        write!(f, "{r}")
    }
}

fn write_sequence<'a>(
    f: &mut fmt::Formatter<'_>,
    open: char,
    close: char,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_element(f, item)?;
    }
    write!(f, "{close}")
}

fn write_element(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => write!(f, "\"{s}\""),
        other => write!(f, "{other}"),
    }
}

/// `x :: xs`, per `spec.md` §4.3.3: always allocates a fresh `Vec`, never
/// aliasing `xs`'s storage (see the `ListRef` doc comment and the Open
/// Question resolution in `DESIGN.md`).
pub fn cons(head: Value, tail: &[Value]) -> Value {
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(head);
    items.extend_from_slice(tail);
    Value::list(items)
}

/// Variable name kind used as a symbol-table key.
pub type Name = Symbol;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_boolean() {
        assert_eq!(Value::Boolean(true).to_string(), "True");
        assert_eq!(Value::Boolean(false).to_string(), "False");
    }

    #[test]
    fn display_integer_and_real() {
        assert_eq!(Value::Integer(7).to_string(), "7");
        assert_eq!(Value::Real(1.0).to_string(), "1.0");
        assert_eq!(Value::Real(2.25).to_string(), "2.25");
    }

    #[test]
    fn display_list_quotes_string_elements() {
        let list = Value::list(vec![
            Value::Integer(1),
            Value::string("hi"),
            Value::Boolean(true),
        ]);
        assert_eq!(list.to_string(), "[1, \"hi\", True]");
    }

    #[test]
    fn display_string_unquoted_at_top_level() {
        assert_eq!(Value::string("hi").to_string(), "hi");
    }

    #[test]
    fn display_tuple() {
        let tuple = Value::tuple(vec![Value::Integer(10), Value::Integer(20)]);
        assert_eq!(tuple.to_string(), "(10, 20)");
    }

    #[test]
    fn mixed_numeric_equality() {
        assert_eq!(Value::Integer(1), Value::Real(1.0));
        assert_ne!(Value::Integer(1), Value::Real(1.5));
    }

    #[test]
    fn cons_does_not_alias_tail() {
        let tail_storage = Rc::new(RefCell::new(vec![Value::Integer(2), Value::Integer(3)]));
        let tail = Value::List(Rc::clone(&tail_storage));
        let Value::List(tail_items) = &tail else {
            unreachable!()
        };
        let result = cons(Value::Integer(1), &tail_items.borrow());
        tail_storage.borrow_mut().push(Value::Integer(99));
        assert_eq!(result.to_string(), "[1, 2, 3]");
    }
}
