//! Runtime values for the not-lisp interpreter.
//!
//! `Value` is a closed tagged union. List variants own their children
//! directly in a `Vec`, so:
//!
//! ```text
//! let copy = value.clone();   // deep copy of the whole tree
//! drop(value);                // releases every child exactly once
//! ```
//!
//! S-Expressions and Q-Expressions share a representation and differ only in
//! how the evaluator treats them. `into_qexpr` / `into_sexpr` retag a list
//! without copying it.
//!
//! Nesting depth is unbounded. `Drop` releases children from a worklist, and
//! `Clone`, `PartialEq` and `Display` recurse under
//! [`ensure_sufficient_stack`].

use std::fmt;

use notlisp_stack::ensure_sufficient_stack;

use crate::builtin::Builtin;
use crate::errors::EvalError;

/// Runtime value in the not-lisp interpreter.
#[derive(Debug, Eq)]
pub enum Value {
    /// Signed integer.
    Number(i64),
    /// Error value; propagates through evaluation like any other value.
    Error(EvalError),
    /// Name resolved through the environment.
    Symbol(String),
    /// Reference to a built-in operation.
    Function(Builtin),
    /// Evaluable list `( ... )`.
    SExpr(Vec<Value>),
    /// Quoted list `{ ... }`, never evaluated automatically.
    QExpr(Vec<Value>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn error(error: EvalError) -> Self {
        Value::Error(error)
    }

    /// Error value with a free-form message.
    pub fn err(message: impl Into<String>) -> Self {
        Value::Error(EvalError::new(message))
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn function(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }

    /// Empty S-Expression.
    #[inline]
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Empty Q-Expression.
    #[inline]
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }
}

// List Operations

impl Value {
    /// Append `child` to the end of this list.
    ///
    /// Only S-Expressions and Q-Expressions have children; pushing onto any
    /// other value is a caller bug and the child is dropped.
    pub fn push(&mut self, child: Value) {
        match self.cells_mut() {
            Some(cells) => cells.push(child),
            None => debug_assert!(false, "push onto non-list {}", self.type_name()),
        }
    }

    /// Builder form of [`Value::push`].
    #[must_use]
    pub fn with(mut self, child: Value) -> Self {
        self.push(child);
        self
    }

    /// Remove the child at `index`, shifting the rest down to close the gap.
    ///
    /// Returns `None` for non-lists and out-of-range indices.
    pub fn pop(&mut self, index: usize) -> Option<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) if index < cells.len() => {
                Some(cells.remove(index))
            }
            _ => None,
        }
    }

    /// Remove the child at `index` and drop the rest of this list.
    pub fn take(mut self, index: usize) -> Option<Value> {
        self.pop(index)
    }

    /// Move every child of `other` onto the end of this list, in order.
    #[must_use]
    pub fn join(mut self, other: Value) -> Self {
        if let Some(cells) = other.into_children() {
            for cell in cells {
                self.push(cell);
            }
        }
        self
    }

    /// Retag a list as a Q-Expression. Non-lists are returned unchanged.
    #[must_use]
    pub fn into_qexpr(mut self) -> Self {
        if let Value::SExpr(cells) = &mut self {
            return Value::QExpr(std::mem::take(cells));
        }
        self
    }

    /// Retag a list as an S-Expression. Non-lists are returned unchanged.
    #[must_use]
    pub fn into_sexpr(mut self) -> Self {
        if let Value::QExpr(cells) = &mut self {
            return Value::SExpr(std::mem::take(cells));
        }
        self
    }

    /// Consume a list and hand back its children.
    pub fn into_children(mut self) -> Option<Vec<Value>> {
        self.cells_mut().map(std::mem::take)
    }

    fn cells_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }
}

// Inspection

impl Value {
    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Children of a list, or `None` for non-lists.
    pub fn children(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Number of direct children; zero for non-lists.
    pub fn child_count(&self) -> usize {
        self.children().map_or(0, <[Value]>::len)
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, open: char, cells: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        ensure_sufficient_stack(|| write!(f, "{cell}"))?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(error) => write!(f, "Error: {}", error.message),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(_) => f.write_str("<function>"),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Error(error) => Value::Error(error.clone()),
            Value::Symbol(name) => Value::Symbol(name.clone()),
            Value::Function(builtin) => Value::Function(*builtin),
            Value::SExpr(cells) => Value::SExpr(ensure_sufficient_stack(|| cells.clone())),
            Value::QExpr(cells) => Value::QExpr(ensure_sufficient_stack(|| cells.clone())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => {
                ensure_sufficient_stack(|| a == b)
            }
            _ => false,
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let Some(cells) = self.cells_mut() else {
            return;
        };
        // Children without children of their own drop shallowly.
        if cells.iter().all(|cell| cell.child_count() == 0) {
            return;
        }
        let mut pending = std::mem::take(cells);
        while let Some(mut value) = pending.pop() {
            if let Some(cells) = value.cells_mut() {
                pending.append(cells);
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}
