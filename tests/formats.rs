//! Snapshot tests for the output formats.

use chav::chav::formats::{
    to_json, to_treeviz_str, to_yaml, tokens_to_json, tokens_to_simple_str, FormatOptions,
    OutputFormat, TreevizOptions,
};
use chav::chav::lexing::lex;
use chav::process;

const SAMPLE: &str = "\
int counter = 0;
uint limit = 10u;

int add(int a, int b) {
    int sum;
    return sum;
}

int main() {
    return 0;
}
";

#[test]
fn treeviz_sample() {
    let program = process(SAMPLE).unwrap();
    let output = to_treeviz_str(&program, &TreevizOptions::default());
    insta::assert_snapshot!("treeviz_sample", output);
}

#[test]
fn treeviz_truncated_labels() {
    let source = "uint threshold = 4294967295u;\nint compute(int first, uint second, byte third) {\n    return;\n}\n";
    let program = process(source).unwrap();
    let output = to_treeviz_str(&program, &TreevizOptions::default());
    insta::assert_snapshot!("treeviz_truncated_labels", output);
}

#[test]
fn tokens_simple_sample() {
    let tokens = lex(SAMPLE).unwrap();
    let output = tokens_to_simple_str(&tokens);
    insta::assert_snapshot!("tokens_simple_sample", output);
}

#[test]
fn ast_json_pretty() {
    let program = process("uint limit = 10u;\nint main(int a) {\n    return a;\n}\n").unwrap();
    let json = to_json(&program, true).unwrap();
    insta::assert_snapshot!("ast_json_pretty", json);
}

#[test]
fn yaml_and_json_describe_the_same_tree() {
    let program = process(SAMPLE).unwrap();
    let from_json: serde_json::Value = serde_json::from_str(&to_json(&program, false).unwrap()).unwrap();
    let from_yaml: serde_json::Value = serde_yaml::from_str(&to_yaml(&program).unwrap()).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn token_json_lists_every_token() {
    let tokens = lex(SAMPLE).unwrap();
    let json: serde_json::Value = serde_json::from_str(&tokens_to_json(&tokens).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), tokens.len());
    assert_eq!(entries[0]["kind"], "TypeKeyword");
    assert_eq!(entries[3]["literal"]["Int"], 0);
    assert_eq!(entries.last().unwrap()["line"], 11);
}

#[test]
fn rendering_through_the_catalogue_matches_direct_calls() {
    let tokens = lex(SAMPLE).unwrap();
    let program = process(SAMPLE).unwrap();
    let options = FormatOptions::default();

    assert_eq!(
        OutputFormat::TokensSimple.render_tokens(&tokens).unwrap(),
        tokens_to_simple_str(&tokens)
    );
    assert_eq!(
        OutputFormat::AstTreeviz.render_program(&program, &options).unwrap(),
        to_treeviz_str(&program, &options.treeviz)
    );
    assert_eq!(
        OutputFormat::AstJson.render_program(&program, &options).unwrap(),
        to_json(&program, true).unwrap()
    );
}
