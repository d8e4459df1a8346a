//! Fluent assertion API for program trees

use crate::chav::ast::{Function, NodeId, Program, VariableDeclaration};

/// Create an assertion builder for a program
pub fn assert_program(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

fn summarize_children(program: &Program, id: NodeId) -> String {
    program
        .children(id)
        .iter()
        .map(|&child| program.kind(child).node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_child_count(program: &Program, id: NodeId, expected: usize, context: &str) {
    let actual = program.children(id).len();
    assert_eq!(
        actual,
        expected,
        "{}: Expected {} children, found {}: [{}]",
        context,
        expected,
        actual,
        summarize_children(program, id)
    );
}

fn child_assertion<'a>(
    program: &'a Program,
    parent: NodeId,
    index: usize,
    context: &str,
) -> NodeAssertion<'a> {
    let children = program.children(parent);
    assert!(
        index < children.len(),
        "{}: Child index {} out of bounds ({} children)",
        context,
        index,
        children.len()
    );
    let id = children[index];
    assert_eq!(
        program.parent(id),
        Some(parent),
        "{}: child {} does not point back at its parent",
        context,
        index
    );
    NodeAssertion {
        program,
        id,
        context: format!("{}[{}]", context, index),
    }
}

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    /// Assert the number of top-level declarations
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(self.program, self.program.root(), expected, "root");
        self
    }

    /// Assert on a specific top-level declaration
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(child_assertion(
            self.program,
            self.program.root(),
            index,
            "root",
        ));
        self
    }

    /// Assert the tree passes the integrity check
    pub fn is_valid(self) -> Self {
        if let Err(err) = self.program.validate() {
            panic!("root: {}", err);
        }
        self
    }
}

pub struct NodeAssertion<'a> {
    program: &'a Program,
    id: NodeId,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn unexpected(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.program.kind(self.id).node_type()
        )
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Assert the one-line label
    pub fn label(self, expected: &str) -> Self {
        let actual = self.program.kind(self.id).display_label();
        assert_eq!(
            actual, expected,
            "{}: Expected label '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn assert_function(self) -> FunctionAssertion<'a> {
        let program = self.program;
        match program.kind(self.id).as_function() {
            Some(function) => FunctionAssertion {
                function,
                node: self,
            },
            None => self.unexpected("Function"),
        }
    }

    pub fn assert_variable(self) -> VariableAssertion<'a> {
        let program = self.program;
        match program.kind(self.id).as_variable() {
            Some(variable) => VariableAssertion {
                variable,
                context: self.context,
            },
            None => self.unexpected("VariableDeclaration"),
        }
    }

    pub fn assert_return(self) -> ReturnAssertion<'a> {
        if !self.program.kind(self.id).is_return() {
            self.unexpected("Return");
        }
        ReturnAssertion { node: self }
    }

    pub fn assert_int(self, expected: i32) {
        match self.program.kind(self.id).as_int() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected INT {}, found INT {}",
                self.context, expected, actual
            ),
            None => self.unexpected("IntLiteral"),
        }
    }

    pub fn assert_uint(self, expected: u32) {
        match self.program.kind(self.id).as_uint() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected UINT {}, found UINT {}",
                self.context, expected, actual
            ),
            None => self.unexpected("UIntLiteral"),
        }
    }

    pub fn assert_identifier(self, expected: &str) {
        match self.program.kind(self.id).as_identifier() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected IDENT {}, found IDENT {}",
                self.context, expected, actual
            ),
            None => self.unexpected("Identifier"),
        }
    }
}

pub struct FunctionAssertion<'a> {
    function: &'a Function,
    node: NodeAssertion<'a>,
}

impl<'a> FunctionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.function.name, expected,
            "{}: Expected function name '{}', but got '{}'",
            self.node.context, expected, self.function.name
        );
        self
    }

    pub fn return_type(self, expected: &str) -> Self {
        assert_eq!(
            self.function.return_type, expected,
            "{}: Expected return type '{}', but got '{}'",
            self.node.context, expected, self.function.return_type
        );
        self
    }

    /// Assert the full parameter list as `(type, name)` pairs, in order
    pub fn parameters(self, expected: &[(&str, &str)]) -> Self {
        let actual: Vec<(&str, &str)> = self
            .function
            .parameters
            .iter()
            .map(|p| (p.type_name.as_str(), p.name.as_str()))
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Parameter mismatch",
            self.node.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(self.node.program, self.node.id, expected, &self.node.context);
        self
    }

    /// Assert on a statement of the function body
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let context = format!("{}.children", self.node.context);
        assertion(child_assertion(self.node.program, self.node.id, index, &context));
        self
    }
}

pub struct VariableAssertion<'a> {
    variable: &'a VariableDeclaration,
    context: String,
}

impl<'a> VariableAssertion<'a> {
    pub fn type_name(self, expected: &str) -> Self {
        assert_eq!(
            self.variable.type_name, expected,
            "{}: Expected type '{}', but got '{}'",
            self.context, expected, self.variable.type_name
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.variable.name, expected,
            "{}: Expected variable name '{}', but got '{}'",
            self.context, expected, self.variable.name
        );
        self
    }

    pub fn default_value(self, expected: &str) -> Self {
        assert_eq!(
            self.variable.default_value.as_deref(),
            Some(expected),
            "{}: Default value mismatch",
            self.context
        );
        self
    }

    pub fn no_default(self) -> Self {
        assert_eq!(
            self.variable.default_value, None,
            "{}: Expected no default value",
            self.context
        );
        self
    }
}

pub struct ReturnAssertion<'a> {
    node: NodeAssertion<'a>,
}

impl<'a> ReturnAssertion<'a> {
    /// Assert a bare `return;`
    pub fn no_value(self) -> Self {
        assert_child_count(self.node.program, self.node.id, 0, &self.node.context);
        self
    }

    /// Assert the returned value
    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert_child_count(self.node.program, self.node.id, 1, &self.node.context);
        let context = format!("{}.value", self.node.context);
        assertion(child_assertion(self.node.program, self.node.id, 0, &context));
        self
    }
}
