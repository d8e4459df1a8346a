//! Treeviz formatter for program trees
//!
//! Treeviz is a one-line-per-node rendering of the tree, meant for quick scanning and
//! for comparing parses in tests. Nesting is drawn with two-column connectors:
//!
//! ```text
//! ⧉ PROGRAM
//! ├─ ≔ VAR int foo = <DEFAULT>
//! └─ ƒ FUNCTION main(int a)
//!   ├─ ≔ VAR int x = 5
//!   └─ ↩ RETURN
//!     └─ # INT 0
//! ```
//!
//! Labels longer than the configured width are cut and end in `...`.
//!
//! Icons
//!     Program: ⧉
//!     Function: ƒ
//!     VariableDeclaration: ≔
//!     Return: ↩
//!     IntLiteral / UIntLiteral: #
//!     Identifier: ◦

use crate::chav::ast::{snapshot_from_program, AstSnapshot, Program};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Labels longer than this many characters are truncated.
    pub max_label_width: usize,
    pub show_icons: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            max_label_width: 30,
            show_icons: true,
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Program" => "⧉",
        "Function" => "ƒ",
        "VariableDeclaration" => "≔",
        "Return" => "↩",
        "IntLiteral" | "UIntLiteral" => "#",
        "Identifier" => "◦",
        _ => "○",
    }
}

fn node_text(snapshot: &AstSnapshot, options: &TreevizOptions) -> String {
    let label = truncate(&snapshot.label, options.max_label_width);
    if options.show_icons {
        format!("{} {}", get_icon(&snapshot.node_type), label)
    } else {
        label
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    options: &TreevizOptions,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        node_text(snapshot, options)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(snapshot, &child_prefix, options, output);
}

fn format_children(
    snapshot: &AstSnapshot,
    prefix: &str,
    options: &TreevizOptions,
    output: &mut String,
) {
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, prefix, i + 1 == child_count, options, output);
    }
}

/// Render `program` as a treeviz string. Always ends with a newline.
pub fn to_treeviz_str(program: &Program, options: &TreevizOptions) -> String {
    let snapshot = snapshot_from_program(program);
    let mut output = format!("{}\n", node_text(&snapshot, options));
    format_children(&snapshot, "", options, &mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chav::process;

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert_eq!(
            to_treeviz_str(&program, &TreevizOptions::default()),
            "⧉ PROGRAM\n"
        );
    }

    #[test]
    fn test_connectors_and_prefixes() {
        let program = process("int foo; int main() { int x; return 1; }").unwrap();
        let expected = "\
⧉ PROGRAM
├─ ≔ VAR int foo = <DEFAULT>
└─ ƒ FUNCTION main()
  ├─ ≔ VAR int x = <DEFAULT>
  └─ ↩ RETURN
    └─ # INT 1
";
        assert_eq!(to_treeviz_str(&program, &TreevizOptions::default()), expected);
    }

    #[test]
    fn test_pipe_continues_under_non_last_child() {
        let program = process("int f() { return x; } int g() { }").unwrap();
        let output = to_treeviz_str(&program, &TreevizOptions::default());
        assert!(output.contains("├─ ƒ FUNCTION f()\n│ └─ ↩ RETURN\n│   └─ ◦ IDENT x\n"));
        assert!(output.ends_with("└─ ƒ FUNCTION g()\n"));
    }

    #[test]
    fn test_truncation_and_icons_off() {
        let program = process("int main(int alpha, int beta, int gamma) { }").unwrap();
        let options = TreevizOptions {
            max_label_width: 12,
            show_icons: false,
        };
        assert_eq!(
            to_treeviz_str(&program, &options),
            "PROGRAM\n└─ FUNCTION mai...\n"
        );
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("ƒƒƒƒ", 3), "ƒƒƒ...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
