//! Bubble-sort replay
//!
//! The generator does not run the source. It extracts the array declaration,
//! evaluates its literal, then replays the one supported algorithm against
//! that array, recording an [`ExecutionStep`] at each notable event:
//!
//! ```text
//! array init → n init → { outer i → { inner j → compare → [swap, swapped] } } → result → print
//! ```
//!
//! Every step receives its own copy of the scope. The run is all-or-nothing:
//! any failure discards the steps recorded so far.

use super::errors::TraceError;
use super::rules::{ArrayInit, LineMap, Rule, RESULT_VARIABLE};
use crate::interpreter::evaluator::try_evaluate;
use crate::memory::scope::Scope;
use crate::memory::value::{format_array, format_number, Value};
use crate::snapshot::ExecutionStep;

/// Names the replay binds besides the array itself
const LOOP_VARIABLES: [&str; 4] = ["n", "i", "j", RESULT_VARIABLE];

/// Records the trace of a single run. Each run owns its scope and step
/// buffer; nothing is shared between runs.
pub struct TraceGenerator<'s> {
    source: &'s str,
    lines: Vec<&'s str>,
    scope: Scope,
    steps: Vec<ExecutionStep>,
}

impl<'s> TraceGenerator<'s> {
    pub fn new(source: &'s str) -> Self {
        TraceGenerator {
            source,
            lines: source.lines().collect(),
            scope: Scope::new(),
            steps: Vec::new(),
        }
    }

    /// Replay the sort and return the recorded steps
    pub fn run(mut self) -> Result<Vec<ExecutionStep>, TraceError> {
        let init = ArrayInit::find(self.source).ok_or(TraceError::NoArrayInitialization)?;
        if LOOP_VARIABLES.contains(&init.name.as_str()) {
            return Err(TraceError::ReservedName { name: init.name });
        }

        let map = LineMap::resolve(&self.lines, &init);
        let name = init.name.as_str();
        let mut array = self.initial_array(&init)?;
        let n = array.len();

        log::debug!("tracing bubble sort of `{}` with {} elements", name, n);

        self.scope.set(name, Value::Array(array.clone()));
        self.record(
            map.line(Rule::ArrayInit),
            format!("Initialize {} = {}", name, format_array(&array)),
        );

        self.scope.set("n", Value::Number(n as f64));
        self.record(
            map.line(Rule::LengthInit),
            format!("Set n = {}.length = {}", name, n),
        );

        for i in 0..n {
            self.scope.set("i", Value::Number(i as f64));
            self.record(
                map.line(Rule::OuterLoop),
                format!("Outer loop: pass i = {} of {}", i, n),
            );

            for j in 0..n - i - 1 {
                self.scope.set("j", Value::Number(j as f64));
                self.record(
                    map.line(Rule::InnerLoop),
                    format!("Inner loop: j = {}", j),
                );

                let (left, right) = (array[j], array[j + 1]);
                self.record(
                    map.line(Rule::Comparison),
                    format!(
                        "Compare {name}[{}] = {} with {name}[{}] = {}",
                        j,
                        format_number(left),
                        j + 1,
                        format_number(right),
                    ),
                );

                if left > right {
                    self.record(
                        map.line(Rule::Swap),
                        format!(
                            "{} > {} is true, swapping {name}[{}] and {name}[{}]",
                            format_number(left),
                            format_number(right),
                            j,
                            j + 1,
                        ),
                    );
                    array.swap(j, j + 1);
                    self.scope.set(name, Value::Array(array.clone()));
                    self.record(
                        map.line(Rule::Swap),
                        format!("Swapped: {} = {}", name, format_array(&array)),
                    );
                }
            }
        }

        let rendered = format_array(&array);
        self.scope.set(RESULT_VARIABLE, Value::Array(array));
        self.record(
            map.line(Rule::FinalAssign),
            format!("Sorting complete: {} = {}", RESULT_VARIABLE, rendered),
        );

        let print = ExecutionStep::new(
            map.line(Rule::Print),
            self.scope.snapshot(),
            format!("Print {}", RESULT_VARIABLE),
        )
        .with_output(vec![rendered]);
        self.steps.push(print);

        log::debug!("recorded {} steps", self.steps.len());
        Ok(self.steps)
    }

    /// Evaluate the declaration's literal. The array is load-bearing, so a
    /// soft evaluation failure becomes a hard one here.
    fn initial_array(&self, init: &ArrayInit) -> Result<Vec<f64>, TraceError> {
        match try_evaluate(&init.literal, &self.scope) {
            Ok(Value::Array(items)) => Ok(items),
            Ok(other) => Err(TraceError::NotAnArray {
                name: init.name.clone(),
                got: other.type_name(),
            }),
            Err(source) => {
                log::warn!("Evaluation failed: {}", source);
                Err(TraceError::ArrayEvaluation {
                    name: init.name.clone(),
                    source,
                })
            }
        }
    }

    fn record(&mut self, line_number: usize, description: String) {
        self.steps
            .push(ExecutionStep::new(line_number, self.scope.snapshot(), description));
    }
}

/// Replay the bubble sort over the array declared in `source`
pub fn generate(source: &str) -> Result<Vec<ExecutionStep>, TraceError> {
    TraceGenerator::new(source).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_element_swap() {
        let source = "let arr = [2, 1];\nlet n = arr.length;\nfor (let i = 0; i < n; i++) {\n  for (let j = 0; j < n - i - 1; j++) {\n    if (arr[j] > arr[j + 1]) {\n      [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];\n    }\n  }\n}\nlet result = arr;\nconsole.log(result);\n";
        let steps = generate(source).unwrap();

        let lines: Vec<usize> = steps.iter().map(|s| s.line_number).collect();
        // init, n, i=0, j=0, compare, swap, swapped, i=1, result, print
        assert_eq!(lines, [1, 2, 3, 4, 5, 6, 6, 3, 10, 11]);

        assert_eq!(steps[4].description, "Compare arr[0] = 2 with arr[1] = 1");
        assert_eq!(
            steps[5].variables.get("arr"),
            Some(&Value::Array(vec![2.0, 1.0]))
        );
        assert_eq!(
            steps[6].variables.get("arr"),
            Some(&Value::Array(vec![1.0, 2.0]))
        );
        assert_eq!(steps[9].output, Some(vec!["[1, 2]".to_string()]));
    }

    #[test]
    fn test_no_swap_steps_for_ordered_pair() {
        let steps = generate("let arr = [1, 2];\nfor (let i) { arr[j + 1] }").unwrap();
        assert!(steps.iter().all(|s| !s.description.starts_with("Swapped")));
        // init, n, i=0, j=0, compare, i=1, result, print
        assert_eq!(steps.len(), 8);
    }

    #[test]
    fn test_variable_order_is_stable() {
        let steps = generate("let arr = [3, 1, 2];").unwrap();
        let last = steps.last().unwrap();
        let names: Vec<&str> = last.variables.keys().map(String::as_str).collect();
        assert_eq!(names, ["arr", "n", "i", "j", "result"]);
    }

    #[test]
    fn test_reserved_array_name() {
        assert_eq!(
            generate("let n = [3, 1];"),
            Err(TraceError::ReservedName {
                name: "n".to_string()
            })
        );
    }

    #[test]
    fn test_unevaluable_literal_is_hard_failure() {
        let err = generate("let arr = [1, 'x'];").unwrap_err();
        assert!(matches!(err, TraceError::ArrayEvaluation { ref name, .. } if name == "arr"));
    }
}
