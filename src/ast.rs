use std::fmt;

/// An arithmetic operator that can appear between two operands.
///
/// Every operator is left-associative. Operators with a higher precedence bind
/// tighter, so `2 + 3 * 4` groups as `2 + (3 * 4)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps an operator symbol to its operator.
    ///
    /// Returns `None` for every character that is not one of `+`, `-`, `*`
    /// or `/`.
    ///
    /// # Example
    /// ```
    /// use treelab::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('*'), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength used by the precedence-climbing parser.
    ///
    /// Additive operators have precedence `1`, multiplicative operators `2`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of an expression tree.
///
/// The tree is strict: every `BinaryOp` exclusively owns its two children, so
/// there is no sharing and no cycles. Dropping a node drops its subtree.
///
/// The operator of a `BinaryOp` is kept as its raw symbol. Trees built by the
/// parser only ever contain `+`, `-`, `*` and `/`, but trees built by hand may
/// carry any tag; the evaluator rejects those with
/// [`EvalError::UnknownOperator`](crate::error::EvalError::UnknownOperator).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Constant(f64),
    /// An operator applied to two sub-expressions.
    BinaryOp {
        /// The operator symbol.
        symbol: char,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
    },
}

impl Node {
    /// Creates a leaf holding `value`.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates an interior node combining `left` and `right` with `symbol`.
    ///
    /// # Example
    /// ```
    /// use treelab::ast::Node;
    ///
    /// let tree = Node::binary('-', Node::constant(8.0), Node::constant(3.0));
    /// assert_eq!(tree.to_string(), "(8 - 3)");
    /// ```
    #[must_use]
    pub fn binary(symbol: char, left: Self, right: Self) -> Self {
        Self::BinaryOp { symbol,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Height of the tree. A single constant has depth `1`.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Constant(_) => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `((8 - 3) - 2)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::BinaryOp { symbol, left, right } => write!(f, "({left} {symbol} {right})"),
        }
    }
}
