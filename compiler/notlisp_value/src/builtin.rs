//! Identity of built-in operations.
//!
//! Function values store a `Builtin` rather than a name or a pointer. The
//! set is fixed, so the evaluator dispatches with a plain `match` and two
//! function values compare equal exactly when they refer to the same
//! operation, whichever alias they were looked up under.

use std::fmt;

/// A built-in operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // List operations
    List,
    Head,
    Tail,
    Eval,
    Join,
    Cons,
    Len,

    // Binding
    Def,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Min,
    Max,
    Incr,
    Decr,
}

impl Builtin {
    /// Every built-in, in registration order.
    pub const ALL: [Builtin; 18] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Cons,
        Builtin::Len,
        Builtin::Def,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::Pow,
        Builtin::Min,
        Builtin::Max,
        Builtin::Incr,
        Builtin::Decr,
    ];

    /// The name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Cons => "cons",
            Builtin::Len => "len",
            Builtin::Def => "def",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::Pow => "^",
            Builtin::Min => "min",
            Builtin::Max => "max",
            Builtin::Incr => "incr",
            Builtin::Decr => "decr",
        }
    }

    /// Every symbol this built-in is registered under.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Builtin::List => &["list"],
            Builtin::Head => &["head"],
            Builtin::Tail => &["tail"],
            Builtin::Eval => &["eval"],
            Builtin::Join => &["join"],
            Builtin::Cons => &["cons"],
            Builtin::Len => &["len"],
            Builtin::Def => &["def"],
            Builtin::Add => &["+", "add"],
            Builtin::Sub => &["-", "sub"],
            Builtin::Mul => &["*", "mul"],
            Builtin::Div => &["/", "div"],
            Builtin::Mod => &["%", "mod"],
            Builtin::Pow => &["^", "pow"],
            Builtin::Min => &["min"],
            Builtin::Max => &["max"],
            Builtin::Incr => &["incr"],
            Builtin::Decr => &["decr"],
        }
    }

    /// Find the built-in registered under `name`.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL
            .into_iter()
            .find(|builtin| builtin.aliases().contains(&name))
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
