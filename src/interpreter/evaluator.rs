//! Restricted expression evaluator
//!
//! Expressions are evaluated in two stages:
//!
//! 1. Parse the text with [`Parser`] and interpret the tree against a
//!    [`Scope`]. Only the closed operator set of the grammar exists, so no
//!    text is ever executed as code.
//! 2. If that fails, treat the text as a bracketed literal: normalise single
//!    quotes to double quotes and read it structurally as JSON. Elements may
//!    be numbers or numeric strings (`['3', "1"]`).
//!
//! [`evaluate`] is the soft-failure entry point: failures are logged and
//! produce `None`. [`try_evaluate`] returns the full error instead.

use super::errors::EvalError;
use crate::memory::scope::Scope;
use crate::memory::value::Value;
use crate::parser::ast::{BinOp, Expr, SourceLocation, UnOp};
use crate::parser::parse::Parser;

/// Evaluate `expression` under `scope`, logging and swallowing any failure.
pub fn evaluate(expression: &str, scope: &Scope) -> Option<Value> {
    match try_evaluate(expression, scope) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Evaluation failed: {}", err);
            None
        }
    }
}

/// Evaluate `expression` under `scope`, falling back to structural literal
/// parsing when the grammar rejects it.
pub fn try_evaluate(expression: &str, scope: &Scope) -> Result<Value, EvalError> {
    let primary = match evaluate_expression(expression, scope) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    log::debug!(
        "`{}` is not a plain expression ({}), trying literal fallback",
        expression,
        primary
    );

    parse_array_literal(expression)
        .map(Value::Array)
        .map_err(|fallback| EvalError::Unevaluable {
            expression: expression.to_string(),
            primary: Box::new(primary),
            fallback,
        })
}

/// Parse and interpret `expression` with the grammar only (no fallback).
pub fn evaluate_expression(expression: &str, scope: &Scope) -> Result<Value, EvalError> {
    let mut parser = Parser::new(expression)?;
    let expr = parser.parse()?;
    Evaluator::new(scope).eval(&expr)
}

/// Structural parse of a bracketed literal such as `['3', 1, "2"]`.
pub fn parse_array_literal(text: &str) -> Result<Vec<f64>, String> {
    let trimmed = text.trim();
    if !(trimmed.starts_with('[') && trimmed.ends_with(']')) {
        return Err("not a bracketed literal".to_string());
    }

    let normalized = trimmed.replace('\'', "\"");
    let items: Vec<serde_json::Value> =
        serde_json::from_str(&normalized).map_err(|e| e.to_string())?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            serde_json::Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| format!("element {} is not representable as a number", i)),
            serde_json::Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("element {} (\"{}\") is not numeric", i, s)),
            other => Err(format!("element {} is not a number: {}", i, other)),
        })
        .collect()
}

/// Tree-walking interpreter over a borrowed scope
pub struct Evaluator<'a> {
    scope: &'a Scope,
}

impl<'a> Evaluator<'a> {
    pub fn new(scope: &'a Scope) -> Self {
        Self { scope }
    }

    pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Variable { name, location } => {
                self.scope
                    .get(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UndefinedVariable {
                        name: name.clone(),
                        location: *location,
                    })
            }
            Expr::ArrayLiteral { elements, .. } => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    match self.eval(element)? {
                        Value::Number(n) => items.push(n),
                        Value::Array(_) => {
                            return Err(EvalError::NestedArray {
                                location: element.location(),
                            })
                        }
                        other => return Err(type_error("number", &other, element.location())),
                    }
                }
                Ok(Value::Array(items))
            }
            Expr::Index {
                target,
                index,
                location,
            } => {
                let target = self.eval(target)?;
                let items = target
                    .as_array()
                    .ok_or_else(|| type_error("array", &target, *location))?;
                let index_value = self.eval(index)?;
                let raw = index_value
                    .as_number()
                    .ok_or_else(|| type_error("number", &index_value, index.location()))?;
                let position = integral_index(raw, index.location())?;
                items
                    .get(position)
                    .map(|n| Value::Number(*n))
                    .ok_or(EvalError::IndexOutOfBounds {
                        index: position,
                        len: items.len(),
                        location: *location,
                    })
            }
            Expr::Length { target, location } => {
                let target = self.eval(target)?;
                target
                    .as_array()
                    .map(|items| Value::Number(items.len() as f64))
                    .ok_or_else(|| type_error("array", &target, *location))
            }
            Expr::UnaryOp {
                op,
                operand,
                location,
            } => {
                let operand = self.eval(operand)?;
                match op {
                    UnOp::Not => Ok(Value::Bool(!operand.is_truthy())),
                    UnOp::Neg => expect_number(&operand, *location).map(|n| Value::Number(-n)),
                    UnOp::Plus => expect_number(&operand, *location).map(Value::Number),
                }
            }
            Expr::BinaryOp {
                op,
                left,
                right,
                location,
            } => self.eval_binary(*op, left, right, *location),
        }
    }

    fn eval_binary(
        &self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        location: SourceLocation,
    ) -> Result<Value, EvalError> {
        // Logical operators short-circuit and yield an operand, not a boolean.
        match op {
            BinOp::And => {
                let lhs = self.eval(left)?;
                return if lhs.is_truthy() { self.eval(right) } else { Ok(lhs) };
            }
            BinOp::Or => {
                let lhs = self.eval(left)?;
                return if lhs.is_truthy() { Ok(lhs) } else { self.eval(right) };
            }
            _ => {}
        }

        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;

        match op {
            BinOp::Eq | BinOp::Ne => {
                let equal = match (&lhs, &rhs) {
                    (Value::Number(a), Value::Number(b)) => a == b,
                    (Value::Bool(a), Value::Bool(b)) => a == b,
                    (Value::Array(_), _) | (_, Value::Array(_)) => {
                        return Err(EvalError::TypeError {
                            expected: "number or boolean".to_string(),
                            got: "array".to_string(),
                            location,
                        })
                    }
                    // Strict equality: differing types are never equal
                    _ => false,
                };
                Ok(Value::Bool(if op == BinOp::Eq { equal } else { !equal }))
            }
            _ => {
                let a = expect_number(&lhs, left.location())?;
                let b = expect_number(&rhs, right.location())?;
                let value = match op {
                    BinOp::Add => Value::Number(a + b),
                    BinOp::Sub => Value::Number(a - b),
                    BinOp::Mul => Value::Number(a * b),
                    BinOp::Div => Value::Number(a / b),
                    BinOp::Mod => Value::Number(a % b),
                    BinOp::Lt => Value::Bool(a < b),
                    BinOp::Le => Value::Bool(a <= b),
                    BinOp::Gt => Value::Bool(a > b),
                    BinOp::Ge => Value::Bool(a >= b),
                    BinOp::Eq | BinOp::Ne | BinOp::And | BinOp::Or => {
                        unreachable!("handled above")
                    }
                };
                Ok(value)
            }
        }
    }
}

fn type_error(expected: &str, got: &Value, location: SourceLocation) -> EvalError {
    EvalError::TypeError {
        expected: expected.to_string(),
        got: got.type_name().to_string(),
        location,
    }
}

fn expect_number(value: &Value, location: SourceLocation) -> Result<f64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_error("number", value, location))
}

fn integral_index(raw: f64, location: SourceLocation) -> Result<usize, EvalError> {
    if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= usize::MAX as f64 {
        Ok(raw as usize)
    } else {
        Err(EvalError::InvalidIndex {
            index: raw,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> Scope {
        let mut scope = Scope::new();
        scope.set("arr", Value::Array(vec![64.0, 34.0, 25.0]));
        scope.set("n", Value::Number(3.0));
        scope.set("i", Value::Number(0.0));
        scope.set("j", Value::Number(1.0));
        scope
    }

    #[test]
    fn test_arithmetic() {
        let scope = scope();
        assert_eq!(evaluate("n - i - 1", &scope), Some(Value::Number(2.0)));
        assert_eq!(evaluate("(1 + 2) * 3 % 4", &scope), Some(Value::Number(1.0)));
        assert_eq!(evaluate("-n / 2", &scope), Some(Value::Number(-1.5)));
    }

    #[test]
    fn test_indexing_and_comparison() {
        let scope = scope();
        assert_eq!(evaluate("arr[j]", &scope), Some(Value::Number(34.0)));
        assert_eq!(evaluate("arr[j] > arr[j + 1]", &scope), Some(Value::Bool(true)));
        assert_eq!(evaluate("arr.length", &scope), Some(Value::Number(3.0)));
        assert_eq!(evaluate("j === 1 && i !== 1", &scope), Some(Value::Bool(true)));
    }

    #[test]
    fn test_logical_operators_return_operands() {
        let scope = scope();
        assert_eq!(evaluate("i || n", &scope), Some(Value::Number(3.0)));
        assert_eq!(evaluate("i && n", &scope), Some(Value::Number(0.0)));
        assert_eq!(evaluate("!i", &scope), Some(Value::Bool(true)));
    }

    #[test]
    fn test_array_literal_through_grammar() {
        let value = evaluate("[64, 34, 25, 12, 22, 11, 90]", &Scope::new());
        assert_eq!(
            value,
            Some(Value::Array(vec![64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0]))
        );
        assert_eq!(evaluate("[]", &Scope::new()), Some(Value::Array(Vec::new())));
    }

    #[test]
    fn test_quoted_literal_uses_fallback() {
        let value = evaluate("['3', \"1\", 2]", &Scope::new());
        assert_eq!(value, Some(Value::Array(vec![3.0, 1.0, 2.0])));
    }

    #[test]
    fn test_out_of_bounds_and_undefined() {
        let scope = scope();
        assert!(matches!(
            try_evaluate("arr[n]", &scope),
            Err(EvalError::Unevaluable { ref primary, .. })
                if matches!(**primary, EvalError::IndexOutOfBounds { index: 3, len: 3, .. })
        ));
        assert!(matches!(
            evaluate_expression("missing + 1", &scope),
            Err(EvalError::UndefinedVariable { ref name, .. }) if name == "missing"
        ));
        assert!(matches!(
            evaluate_expression("arr[0.5]", &scope),
            Err(EvalError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_soft_failure_yields_none() {
        assert_eq!(evaluate("alert(1)", &Scope::new()), None);
        assert_eq!(evaluate("['a', 'b']", &Scope::new()), None);
        assert_eq!(evaluate("[[1], [2]]", &Scope::new()), None);
    }

    #[test]
    fn test_nested_arrays_rejected_by_grammar() {
        assert!(matches!(
            evaluate_expression("[1, [2]]", &Scope::new()),
            Err(EvalError::NestedArray { .. })
        ));
    }
}
