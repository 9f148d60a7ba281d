use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_assignment, walk_binary_operation, walk_function_call, walk_unary_operation, SyntaxVisitor,
};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// One node of a parsed statement.
///
/// The structure is strictly a tree: every node exclusively owns its
/// children, and the grammar never produces shared subexpressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    /// A numeral literal, kept as its normalized lexeme so base-specific
    /// parsing can happen at evaluation time.
    Number(String),
    Variable(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
    FunctionCall {
        name: String,
        arguments: Vec<Node>,
    },
    Assignment {
        name: String,
        value: Box<Node>,
    },
}

impl Node {
    pub fn new_number(lexeme: impl Into<String>) -> Node {
        Node::Number(lexeme.into())
    }

    pub fn new_variable(name: impl Into<String>) -> Node {
        Node::Variable(name.into())
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_function_call(name: impl Into<String>, arguments: Vec<Node>) -> Node {
        Node::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    pub fn new_assignment(name: impl Into<String>, value: Node) -> Node {
        Node::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Variable(_))
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(lexeme) => visitor.visit_number(lexeme),
            Node::Variable(name) => visitor.visit_variable(name),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
            Node::FunctionCall { name, arguments } => visitor.visit_function_call(name, arguments),
            Node::Assignment { name, value } => visitor.visit_assignment(name, value),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("statement".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, lexeme: &str) {
        self.builder.add_empty_child(lexeme.to_string());
    }
    fn visit_variable(&mut self, name: &str) {
        self.builder.add_empty_child(name.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
    fn visit_function_call(&mut self, name: &str, arguments: &[Node]) {
        self.builder.begin_child(format!("{}()", name));
        walk_function_call(self, arguments);
        self.builder.end_child();
    }
    fn visit_assignment(&mut self, name: &str, value: &Node) {
        self.builder.begin_child(format!("{} =", name));
        walk_assignment(self, value);
        self.builder.end_child();
    }
}
