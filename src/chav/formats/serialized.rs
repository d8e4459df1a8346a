//! JSON and YAML renderings of the tree snapshot.

use super::registry::FormatError;
use crate::chav::ast::{snapshot_from_program, Program};

pub fn to_json(program: &Program, pretty: bool) -> Result<String, FormatError> {
    let snapshot = snapshot_from_program(program);
    let result = if pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    };
    result.map_err(|err| FormatError::SerializationError(err.to_string()))
}

pub fn to_yaml(program: &Program) -> Result<String, FormatError> {
    serde_yaml::to_string(&snapshot_from_program(program))
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chav::ast::AstSnapshot;
    use crate::chav::process;

    #[test]
    fn test_json_reads_back_as_snapshot() {
        let program = process("uint limit = 10u; int main() { return limit; }").unwrap();
        let json = to_json(&program, false).unwrap();
        let back: AstSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot_from_program(&program));
    }

    #[test]
    fn test_compact_json_is_one_line() {
        let program = process("int x;").unwrap();
        let json = to_json(&program, false).unwrap();
        assert_eq!(
            json,
            r#"{"node_type":"Program","label":"PROGRAM","children":[{"node_type":"VariableDeclaration","label":"VAR int x = <DEFAULT>","attributes":{"name":"x","type":"int"}}]}"#
        );
    }

    #[test]
    fn test_yaml_reads_back_as_snapshot() {
        let program = process("int main(int a) { int b = 2; }").unwrap();
        let yaml = to_yaml(&program).unwrap();
        let back: AstSnapshot = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, snapshot_from_program(&program));
        assert!(yaml.contains("label: FUNCTION main(int a)"));
    }
}
