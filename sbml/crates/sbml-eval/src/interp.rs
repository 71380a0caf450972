//! The tree-walking evaluator.
//!
//! One method per `spec.md` §4.3 construct, mirroring `sbml-par::parser`'s
//! one-method-per-grammar-rule shape: `eval_program`/`eval_block` walk
//! statements, `eval_stmt` dispatches on [`Stmt`], `eval_expr` dispatches on
//! [`Expr`] and applies the §4.3.1 operator type-guard table. Evaluation is
//! strictly left-to-right, including the short-circuit operators (§5):
//! operands are evaluated in source order and the right operand of
//! `orelse`/`andalso` is skipped entirely, not merely discarded, whenever
//! the left operand already determines the result.

use std::io::Write;

use sbml_par::{BinOp, Expr, Program, Stmt};
use sbml_util::{SbmlError, SbmlResult};

use crate::numeric::{self, Promoted};
use crate::scope::SymbolTable;
use crate::value::{cons, Value};

/// Runs a program against a fresh symbol table, writing `print` output to
/// `out`. Split from [`Interpreter`] so tests can capture output into an
/// in-memory buffer instead of stdout.
pub fn eval_program(program: &Program, out: &mut impl Write) -> SbmlResult<()> {
    let mut interp = Interpreter::new(out);
    interp.eval_block(program)
}

pub struct Interpreter<'a, W: Write> {
    table: SymbolTable,
    out: &'a mut W,
}

impl<'a, W: Write> Interpreter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            table: SymbolTable::new(),
            out,
        }
    }

    fn eval_block(&mut self, stmts: &[Stmt]) -> SbmlResult<()> {
        for stmt in stmts {
            self.eval_stmt(stmt)?;
        }
        Ok(())
    }

    fn eval_stmt(&mut self, stmt: &Stmt) -> SbmlResult<()> {
        match stmt {
            Stmt::Block(stmts) => self.eval_block(stmts),
            Stmt::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr)?;
                writeln!(self.out, "{value}").map_err(|_| SbmlError::Semantic)
            }
            Stmt::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.table.set(*target, value);
                Ok(())
            }
            Stmt::IndexAssign {
                target,
                index,
                value,
            } => self.eval_index_assign(target, index, value),
            Stmt::If { cond, then_branch } => {
                if self.eval_bool(cond)? {
                    self.eval_block(then_branch)?;
                }
                Ok(())
            }
            Stmt::IfElse {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_bool(cond)? {
                    self.eval_block(then_branch)
                } else {
                    self.eval_block(else_branch)
                }
            }
            Stmt::While { cond, body } => {
                while self.eval_bool(cond)? {
                    self.eval_block(body)?;
                }
                Ok(())
            }
        }
    }

    fn eval_bool(&mut self, expr: &Expr) -> SbmlResult<bool> {
        match self.eval_expr(expr)? {
            Value::Boolean(b) => Ok(b),
            _ => Err(SbmlError::Semantic),
        }
    }

    /// `x[i] = e;` for an identifier target, or the general chained form
    /// for a non-identifier target (`spec.md` §4.3.4): the target
    /// expression itself must evaluate to a List, mutated in place.
    fn eval_index_assign(&mut self, target: &Expr, index: &Expr, value: &Expr) -> SbmlResult<()> {
        let index = self.eval_index(index)?;
        let value = self.eval_expr(value)?;
        let list = match self.eval_expr(target)? {
            Value::List(list) => list,
            _ => return Err(SbmlError::Semantic),
        };
        let mut items = list.borrow_mut();
        let slot = items.get_mut(index).ok_or(SbmlError::Semantic)?;
        *slot = value;
        Ok(())
    }

    /// An index operand must be an Int; returns it as a `usize`, already
    /// validated against "not negative" (the upper bound is checked by the
    /// caller against the actual container length).
    fn eval_index(&mut self, expr: &Expr) -> SbmlResult<usize> {
        match self.eval_expr(expr)? {
            Value::Integer(i) => usize::try_from(i).map_err(|_| SbmlError::Semantic),
            _ => Err(SbmlError::Semantic),
        }
    }

    fn eval_expr(&mut self, expr: &Expr) -> SbmlResult<Value> {
        match expr {
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::Integer(i) => Ok(Value::Integer(*i)),
            Expr::Real(r) => Ok(Value::Real(*r)),
            Expr::Str(s) => Ok(Value::string(s.as_str())),
            Expr::Variable(name) => self.table.get(*name),
            Expr::Tuple(items) => {
                let items = self.eval_each(items)?;
                Ok(Value::tuple(items))
            }
            Expr::List(items) => {
                let items = self.eval_each(items)?;
                Ok(Value::list(items))
            }
            Expr::Not(inner) => match self.eval_expr(inner)? {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                _ => Err(SbmlError::Semantic),
            },
            Expr::Neg(inner) => match self.eval_expr(inner)? {
                Value::Integer(i) => Ok(Value::Integer(-i)),
                Value::Real(r) => Ok(Value::Real(-r)),
                _ => Err(SbmlError::Semantic),
            },
            Expr::Binary { op, left, right } => self.eval_binary(*op, left, right),
            Expr::Index { base, index } => self.eval_index_read(base, index),
            Expr::TupleIndex { index, target } => self.eval_tuple_index(*index, target),
        }
    }

    fn eval_each(&mut self, exprs: &[Expr]) -> SbmlResult<Vec<Value>> {
        exprs.iter().map(|e| self.eval_expr(e)).collect()
    }

    fn eval_binary(&mut self, op: BinOp, left: &Expr, right: &Expr) -> SbmlResult<Value> {
        match op {
            BinOp::Orelse => {
                return match self.eval_bool(left)? {
                    true => Ok(Value::Boolean(true)),
                    false => Ok(Value::Boolean(self.eval_bool(right)?)),
                }
            }
            BinOp::Andalso => {
                return match self.eval_bool(left)? {
                    false => Ok(Value::Boolean(false)),
                    true => Ok(Value::Boolean(self.eval_bool(right)?)),
                }
            }
            _ => {}
        }

        let left = self.eval_expr(left)?;
        let right = self.eval_expr(right)?;
        match op {
            BinOp::Orelse | BinOp::Andalso => unreachable!("handled above with short-circuit"),
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge | BinOp::Eq | BinOp::Ne => {
                compare(op, &left, &right)
            }
            BinOp::Cons => match right {
                Value::List(items) => Ok(cons(left, &items.borrow())),
                _ => Err(SbmlError::Semantic),
            },
            BinOp::In => eval_in(&left, &right),
            BinOp::Add => eval_add(left, right),
            BinOp::Sub => eval_numeric(left, right, |a, b| a - b, |a, b| a - b),
            BinOp::Mul => eval_numeric(left, right, |a, b| a * b, |a, b| a * b),
            BinOp::Div => {
                if !left.is_numeric() || !right.is_numeric() {
                    return Err(SbmlError::Semantic);
                }
                numeric::divide(&left, &right)
            }
            BinOp::IntDiv => eval_int_only(left, right, numeric::int_div),
            BinOp::Mod => eval_int_only(left, right, numeric::int_mod),
            BinOp::Pow => eval_pow(left, right),
        }
    }

    fn eval_index_read(&mut self, base: &Expr, index: &Expr) -> SbmlResult<Value> {
        let base = self.eval_expr(base)?;
        let index = self.eval_index(index)?;
        match base {
            Value::List(items) => items.borrow().get(index).cloned().ok_or(SbmlError::Semantic),
            Value::String(s) => s
                .as_ref()
                .chars()
                .nth(index)
                .map(|c| Value::string(c.to_string()))
                .ok_or(SbmlError::Semantic),
            _ => Err(SbmlError::Semantic),
        }
    }

    /// `#k e`: `k` is always an integer literal at the grammar level (the
    /// parser enforces that), 1-based, `1 <= k <= len(e)`.
    fn eval_tuple_index(&mut self, index: i64, target: &Expr) -> SbmlResult<Value> {
        let target = self.eval_expr(target)?;
        let items = match &target {
            Value::Tuple(items) => items,
            _ => return Err(SbmlError::Semantic),
        };
        if index < 1 {
            return Err(SbmlError::Semantic);
        }
        let zero_based = (index - 1) as usize;
        items.get(zero_based).cloned().ok_or(SbmlError::Semantic)
    }
}

/// `<`, `<=`, `>`, `>=`, `==`, `<>`: both numeric (Int/Real, possibly
/// mixed), or both String. No other pair is accepted, including two
/// Booleans, two Lists, or two Tuples — the guard in `spec.md` §4.3.1 names
/// only "both numeric" and "both String" for this operator row.
fn compare(op: BinOp, left: &Value, right: &Value) -> SbmlResult<Value> {
    let ordering = if left.is_numeric() && right.is_numeric() {
        left.as_f64()
            .unwrap()
            .partial_cmp(&right.as_f64().unwrap())
            .ok_or(SbmlError::Semantic)?
    } else if let (Value::String(a), Value::String(b)) = (left, right) {
        a.as_ref().cmp(b.as_ref())
    } else {
        return Err(SbmlError::Semantic);
    };
    use std::cmp::Ordering::*;
    let result = match op {
        BinOp::Lt => ordering == Less,
        BinOp::Le => ordering != Greater,
        BinOp::Gt => ordering == Greater,
        BinOp::Ge => ordering != Less,
        BinOp::Eq => ordering == Equal,
        BinOp::Ne => ordering != Equal,
        _ => unreachable!(),
    };
    Ok(Value::Boolean(result))
}

/// `in`: `(any, List)` membership, or `(String, String)` substring.
fn eval_in(left: &Value, right: &Value) -> SbmlResult<Value> {
    match right {
        Value::List(items) => Ok(Value::Boolean(items.borrow().iter().any(|v| v == left))),
        Value::String(haystack) => match left {
            Value::String(needle) => Ok(Value::Boolean(haystack.contains(needle.as_ref()))),
            _ => Err(SbmlError::Semantic),
        },
        _ => Err(SbmlError::Semantic),
    }
}

/// `+`: both numeric, both String, or both List; result is the same kind.
fn eval_add(left: Value, right: Value) -> SbmlResult<Value> {
    match (&left, &right) {
        (Value::String(a), Value::String(b)) => Ok(Value::string(format!("{a}{b}"))),
        (Value::List(a), Value::List(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        _ if left.is_numeric() && right.is_numeric() => {
            eval_numeric(left, right, |a, b| a.wrapping_add(b), |a, b| a + b)
        }
        _ => Err(SbmlError::Semantic),
    }
}

/// `-`, `*`, `**`: both numeric, promoted per `spec.md` §4.3.1.
fn eval_numeric(
    left: Value,
    right: Value,
    on_int: impl Fn(i64, i64) -> i64,
    on_real: impl Fn(f64, f64) -> f64,
) -> SbmlResult<Value> {
    if !left.is_numeric() || !right.is_numeric() {
        return Err(SbmlError::Semantic);
    }
    Ok(match numeric::promote(&left, &right) {
        Promoted::Int(a, b) => Value::Integer(on_int(a, b)),
        Promoted::Real(a, b) => Value::Real(on_real(a, b)),
    })
}

/// `**`: like the other arithmetic operators, Real if either operand is
/// Real. Int ** Int is the one case that still isn't always Int: a negative
/// exponent has no integral result, so (matching the reference
/// interpreter's `operator.pow`) it promotes to Real instead of wrapping the
/// exponent into a huge unsigned power.
fn eval_pow(left: Value, right: Value) -> SbmlResult<Value> {
    if !left.is_numeric() || !right.is_numeric() {
        return Err(SbmlError::Semantic);
    }
    match (&left, &right) {
        (Value::Integer(a), Value::Integer(b)) if *b >= 0 => {
            let exp = u32::try_from(*b).unwrap_or(u32::MAX);
            Ok(Value::Integer(a.wrapping_pow(exp)))
        }
        _ => {
            let a = left.as_f64().expect("checked numeric above");
            let b = right.as_f64().expect("checked numeric above");
            Ok(Value::Real(a.powf(b)))
        }
    }
}

/// `div`, `mod`: both operands must be Int; Real is rejected, not promoted.
fn eval_int_only(
    left: Value,
    right: Value,
    op: impl Fn(i64, i64) -> SbmlResult<i64>,
) -> SbmlResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(op(a, b)?)),
        _ => Err(SbmlError::Semantic),
    }
}
