//! Testing utilities for AST assertions
//!
//!     Parser tests should check the shape and the content of the tree, not generalities
//!     like node counts. Matching on [`NodeKind`](crate::chav::ast::NodeKind) by hand for
//!     every level quickly turns into boilerplate:
//!
//!     ```rust-example
//!     let main = program.children(program.root())[0];
//!     match program.kind(main) {
//!         NodeKind::Function(f) => {
//!             assert_eq!(f.name, "main");
//!             let ret = program.children(main)[0];
//!             assert!(program.kind(ret).is_return());
//!             // ... and so on
//!         }
//!         _ => panic!("Expected function"),
//!     }
//!     ```
//!
//!     With the fluent API the same test reads:
//!
//!     ```rust-example
//!     use chav::chav::testing::assert_program;
//!
//!     assert_program(&program)
//!         .child_count(1)
//!         .child(0, |node| {
//!             node.assert_function()
//!                 .name("main")
//!                 .parameters(&[("int", "a")])
//!                 .child(0, |stmt| {
//!                     stmt.assert_return().value(|v| {
//!                         v.assert_int(0);
//!                     });
//!                 });
//!         });
//!     ```
//!
//!     Every `child` step also checks that the child points back at its parent, so the
//!     tree invariant is verified along every path a test walks. Failures panic with the
//!     path to the offending node (`root[1].children[0]`).

mod ast_assertions;

pub use ast_assertions::{
    assert_program, FunctionAssertion, NodeAssertion, ProgramAssertion, ReturnAssertion,
    VariableAssertion,
};
