use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// Equality and hashing are structural on every node so that expressions can
// serve as lookup keys in substitution mappings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program {
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decl {
    Implementation(Implementation),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implementation {
    pub name: String,
    pub ins: Vec<Binding>,
    pub outs: Vec<Binding>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Body {
    pub bindings: Vec<Binding>,
    pub stmts: Vec<Stmt>,
}

// One or more names sharing one declared type, e.g. `x, y: int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub names: Vec<String>,
    pub ty: Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    // the target is a bare identifier by construction
    Assign { target: String, value: Expr },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Id(String),
    Number(i64),
    Bin(Box<Expr>, BinOp, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

pub(crate) fn symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.decls.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", decl)?;
        }
        Ok(())
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Implementation(implementation) => write!(f, "{}", implementation),
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "implementation {}(", self.name)?;
        write_bindings(f, &self.ins)?;
        write!(f, ")")?;

        if !self.outs.is_empty() {
            write!(f, " returns (")?;
            write_bindings(f, &self.outs)?;
            write!(f, ")")?;
        }

        writeln!(f, " {{")?;
        write!(f, "{}", self.body)?;
        write!(f, "}}")
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in &self.bindings {
            writeln!(f, "    var {};", binding)?;
        }
        for stmt in &self.stmts {
            writeln!(f, "    {}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.names.join(", "), self.ty)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign { target, value } => write!(f, "{} := {};", target, value),
        }
    }
}

// Binary expressions render fully parenthesized. The grammar itself is
// left-associative and accepts unparenthesized chains, so rendered text
// always re-parses to the same tree regardless of operator precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Id(name) => write!(f, "{}", name),
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Bin(left, op, right) => write!(f, "({}{}{})", left, op, right),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", symbol(*self))
    }
}

fn write_bindings(f: &mut fmt::Formatter<'_>, bindings: &[Binding]) -> fmt::Result {
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", binding)?;
    }
    Ok(())
}
