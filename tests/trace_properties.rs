// Property tests over randomly generated input arrays

use bubbletrace::interpreter::evaluator::parse_array_literal;
use bubbletrace::memory::value::{format_array, Value};
use bubbletrace::trace::{generate_trace, Language};
use proptest::prelude::*;

fn program(items: &[i32]) -> String {
    let literal: Vec<String> = items.iter().map(|n| n.to_string()).collect();
    format!(
        "let arr = [{}];\nlet n = arr.length;\nfor (let i = 0; i < n; i++) {{\n  for (let j = 0; j < n - i - 1; j++) {{\n    if (arr[j] > arr[j + 1]) {{\n      [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];\n    }}\n  }}\n}}\nlet result = arr;\nconsole.log(result);\n",
        literal.join(", ")
    )
}

fn inversions(items: &[i32]) -> usize {
    let mut count = 0;
    for a in 0..items.len() {
        for b in a + 1..items.len() {
            if items[a] > items[b] {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn step_count_matches_comparisons_and_swaps(items in prop::collection::vec(-500i32..500, 0..12)) {
        let steps = generate_trace(&program(&items), Language::JavaScript).unwrap();
        let n = items.len();
        let comparisons: usize = (0..n).map(|i| n - i - 1).sum();

        prop_assert_eq!(steps.len(), 2 + n + 2 * comparisons + 2 * inversions(&items) + 2);
    }

    #[test]
    fn result_is_sorted_permutation(items in prop::collection::vec(-500i32..500, 0..12)) {
        let steps = generate_trace(&program(&items), Language::JavaScript).unwrap();
        let result = steps
            .last()
            .and_then(|s| s.variables.get("result"))
            .and_then(Value::as_array)
            .unwrap()
            .to_vec();

        let mut expected: Vec<f64> = items.iter().map(|n| *n as f64).collect();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn output_parses_back_to_result(items in prop::collection::vec(-500i32..500, 0..12)) {
        let steps = generate_trace(&program(&items), Language::JavaScript).unwrap();
        let last = steps.last().unwrap();
        let output = last.output.as_ref().unwrap();
        prop_assert_eq!(output.len(), 1);

        let result = last.variables.get("result").and_then(Value::as_array).unwrap();
        prop_assert_eq!(&output[0], &format_array(result));
        prop_assert_eq!(parse_array_literal(&output[0]).unwrap(), result.to_vec());
    }

    #[test]
    fn generation_is_deterministic(items in prop::collection::vec(-500i32..500, 0..10)) {
        let source = program(&items);
        let first = generate_trace(&source, Language::JavaScript).unwrap();
        let second = generate_trace(&source, Language::JavaScript).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn steps_own_their_variables(items in prop::collection::vec(-500i32..500, 2..10)) {
        let mut steps = generate_trace(&program(&items), Language::JavaScript).unwrap();
        let untouched = steps.clone();

        steps[0].variables.insert("arr".to_string(), Value::Array(Vec::new()));
        steps[0].variables.insert("extra".to_string(), Value::Bool(true));

        prop_assert_eq!(&steps[1..], &untouched[1..]);
    }

    #[test]
    fn every_line_number_is_in_range(items in prop::collection::vec(-500i32..500, 0..10)) {
        let source = program(&items);
        let line_count = source.lines().count();
        let steps = generate_trace(&source, Language::JavaScript).unwrap();
        prop_assert!(steps.iter().all(|s| s.line_number >= 1 && s.line_number <= line_count));
    }
}
