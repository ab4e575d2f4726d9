//! Types representing the syntax tree of the pseudocode notation

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Module {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    Definition(Definition),
    Assignment {
        targets: Vec<Expression>,
        value: Expression,
    },
    // annotated declaration, `x: 'Set of vertices'`
    Declaration {
        target: Expression,
        annotation: Expression,
        #[serde(default)]
        value: Option<Expression>,
    },
    Expression {
        value: Expression,
    },
    For {
        target: Expression,
        iter: Expression,
        body: Vec<Statement>,
        #[serde(default)]
        orelse: Vec<Statement>,
    },
    While {
        test: Expression,
        body: Vec<Statement>,
    },
    If {
        test: Expression,
        body: Vec<Statement>,
        #[serde(default)]
        orelse: Vec<Statement>,
    },
    Return {
        #[serde(default)]
        value: Option<Expression>,
    },
    // `with rlap(phantom=...):`
    Scoped {
        items: Vec<Expression>,
        body: Vec<Statement>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub returns: Option<Expression>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<Expression>,
}

// now types used within expressions

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    String {
        value: String,
    },
    Number {
        value: Numeric,
    },
    Constant {
        value: Constant,
    },
    List {
        elements: Vec<Expression>,
    },
    Tuple {
        elements: Vec<Expression>,
    },
    Set {
        elements: Vec<Expression>,
    },
    SetComprehension {
        element: Box<Expression>,
        generators: Vec<Generator>,
    },
    Name {
        id: String,
    },
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
    Boolean {
        op: BooleanOperator,
        values: Vec<Expression>,
    },
    Compare {
        left: Box<Expression>,
        ops: Vec<CompareOperator>,
        comparators: Vec<Expression>,
    },
    Subscript {
        value: Box<Expression>,
        index: Box<Expression>,
    },
    Call {
        func: Box<Expression>,
        #[serde(default)]
        args: Vec<Expression>,
        #[serde(default)]
        keywords: Vec<Keyword>,
    },
}

impl Expression {
    /// The text of a literal string, if that's what this is.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Expression::String { value } => Some(value),
            _ => None,
        }
    }

    /// The identifier of a bare name reference.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expression::Name { id } => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Integral(i64),
    Real(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Constant {
    True,
    False,
    None,
}

impl Constant {
    pub fn name(&self) -> &'static str {
        match self {
            Constant::True => "True",
            Constant::False => "False",
            Constant::None => "None",
        }
    }
}

// keyword argument to a call, `phantom=D[i]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keyword {
    #[serde(default)]
    pub arg: Option<String>,
    pub value: Expression,
}

// one `for target in iter if ...` clause of a comprehension
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Generator {
    pub target: Expression,
    pub iter: Expression,
    #[serde(default)]
    pub ifs: Vec<Expression>,
}

// operators. Their names are what the typesetting macros are called after,
// so `Add` becomes `\PyAdd`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UnaryOperator {
    Invert,
    Not,
    UAdd,
    USub,
}

impl UnaryOperator {
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOperator::Invert => "Invert",
            UnaryOperator::Not => "Not",
            UnaryOperator::UAdd => "UAdd",
            UnaryOperator::USub => "USub",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mult,
    MatMult,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

impl BinaryOperator {
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "Add",
            BinaryOperator::Sub => "Sub",
            BinaryOperator::Mult => "Mult",
            BinaryOperator::MatMult => "MatMult",
            BinaryOperator::Div => "Div",
            BinaryOperator::Mod => "Mod",
            BinaryOperator::Pow => "Pow",
            BinaryOperator::LShift => "LShift",
            BinaryOperator::RShift => "RShift",
            BinaryOperator::BitOr => "BitOr",
            BinaryOperator::BitXor => "BitXor",
            BinaryOperator::BitAnd => "BitAnd",
            BinaryOperator::FloorDiv => "FloorDiv",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BooleanOperator {
    And,
    Or,
}

impl BooleanOperator {
    pub fn name(&self) -> &'static str {
        match self {
            BooleanOperator::And => "And",
            BooleanOperator::Or => "Or",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CompareOperator {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

impl CompareOperator {
    pub fn name(&self) -> &'static str {
        match self {
            CompareOperator::Eq => "Eq",
            CompareOperator::NotEq => "NotEq",
            CompareOperator::Lt => "Lt",
            CompareOperator::LtE => "LtE",
            CompareOperator::Gt => "Gt",
            CompareOperator::GtE => "GtE",
            CompareOperator::Is => "Is",
            CompareOperator::IsNot => "IsNot",
            CompareOperator::In => "In",
            CompareOperator::NotIn => "NotIn",
        }
    }
}
