// Execution steps and random-access playback over a recorded trace

use crate::memory::scope::Variables;
use crate::memory::value::Value;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recorded event of a simulated run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    /// 1-based source line the event is attributed to
    pub line_number: usize,
    /// Bindings at this step; owned, never shared with another step
    pub variables: Variables,
    pub description: String,
    /// Printed output captured at this step. `None` when nothing was printed;
    /// never `Some` of an empty list.
    pub output: Option<Vec<String>>,
}

impl ExecutionStep {
    pub fn new(line_number: usize, variables: Variables, description: impl Into<String>) -> Self {
        ExecutionStep {
            line_number,
            variables,
            description: description.into(),
            output: None,
        }
    }

    /// Attach captured output. An empty list records no output.
    pub fn with_output(mut self, lines: Vec<String>) -> Self {
        self.output = if lines.is_empty() { None } else { Some(lines) };
        self
    }

    /// Array-shaped bindings, in scope order. These drive the chart view.
    pub fn array_variables(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.variables
            .iter()
            .filter_map(|(name, value)| value.as_array().map(|items| (name.as_str(), items)))
    }

    /// Current value of a numeric binding such as a loop counter
    pub fn number(&self, name: &str) -> Option<f64> {
        self.variables.get(name).and_then(Value::as_number)
    }
}

/// Errors from moving the playback cursor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("trace has no steps")]
    EmptyTrace,
    #[error("already at the last step")]
    AtEnd,
    #[error("already at the first step")]
    AtStart,
    #[error("step {index} is out of range (trace has {len} steps)")]
    OutOfRange { index: usize, len: usize },
}

/// Cursor over a trace with per-line breakpoints
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<ExecutionStep>,
    position: usize,
    breakpoints: FxHashSet<usize>,
}

impl Playback {
    pub fn new(steps: Vec<ExecutionStep>) -> Result<Self, PlaybackError> {
        if steps.is_empty() {
            return Err(PlaybackError::EmptyTrace);
        }
        Ok(Playback {
            steps,
            position: 0,
            breakpoints: FxHashSet::default(),
        })
    }

    /// Step under the cursor
    pub fn current(&self) -> &ExecutionStep {
        &self.steps[self.position]
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: construction rejects empty traces
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 == self.steps.len()
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.steps.len() - 1;
    }

    pub fn seek(&mut self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.steps.len() {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    /// Toggle a breakpoint on a source line; returns whether it is now set.
    pub fn toggle_breakpoint(&mut self, line: usize) -> bool {
        if self.breakpoints.remove(&line) {
            false
        } else {
            self.breakpoints.insert(line);
            true
        }
    }

    pub fn set_breakpoint(&mut self, line: usize) {
        self.breakpoints.insert(line);
    }

    pub fn has_breakpoint(&self, line: usize) -> bool {
        self.breakpoints.contains(&line)
    }

    /// Breakpoint lines in ascending order
    pub fn breakpoints(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.breakpoints.iter().copied().collect();
        lines.sort_unstable();
        lines
    }

    /// Whether the step under the cursor sits on a breakpoint line
    pub fn at_breakpoint(&self) -> bool {
        self.has_breakpoint(self.current().line_number)
    }

    /// Advance at least one step, stopping on the first step whose line holds
    /// a breakpoint or at the end of the trace. Returns the number of steps
    /// advanced.
    pub fn run_to_breakpoint(&mut self) -> Result<usize, PlaybackError> {
        let start = self.position;
        self.step_forward()?;
        while !self.at_breakpoint() && !self.is_at_end() {
            self.position += 1;
        }
        Ok(self.position - start)
    }

    /// All output captured from the first step up to and including the cursor
    pub fn output_so_far(&self) -> Vec<&str> {
        self.steps[..=self.position]
            .iter()
            .filter_map(|step| step.output.as_ref())
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::scope::Scope;

    fn steps(lines: &[usize]) -> Vec<ExecutionStep> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| ExecutionStep::new(*line, Scope::new().snapshot(), format!("step {}", i)))
            .collect()
    }

    #[test]
    fn test_empty_trace_rejected() {
        assert_eq!(Playback::new(Vec::new()).unwrap_err(), PlaybackError::EmptyTrace);
    }

    #[test]
    fn test_step_bounds() {
        let mut playback = Playback::new(steps(&[1, 2, 3])).unwrap();
        assert_eq!(playback.step_backward(), Err(PlaybackError::AtStart));
        playback.step_forward().unwrap();
        playback.step_forward().unwrap();
        assert!(playback.is_at_end());
        assert_eq!(playback.step_forward(), Err(PlaybackError::AtEnd));
        playback.rewind_to_start();
        assert_eq!(playback.position(), 0);
        playback.jump_to_end();
        assert_eq!(playback.position(), 2);
    }

    #[test]
    fn test_seek_out_of_range() {
        let mut playback = Playback::new(steps(&[1, 2])).unwrap();
        assert_eq!(
            playback.seek(5),
            Err(PlaybackError::OutOfRange { index: 5, len: 2 })
        );
        playback.seek(1).unwrap();
        assert_eq!(playback.current().description, "step 1");
    }

    #[test]
    fn test_run_to_breakpoint() {
        let mut playback = Playback::new(steps(&[2, 5, 6, 7, 6, 7, 9])).unwrap();
        assert!(playback.toggle_breakpoint(6));

        assert_eq!(playback.run_to_breakpoint(), Ok(2));
        assert_eq!(playback.position(), 2);
        // Leaves the current breakpoint before looking for the next hit
        assert_eq!(playback.run_to_breakpoint(), Ok(2));
        assert_eq!(playback.position(), 4);
        // No more hits: runs to the end
        assert_eq!(playback.run_to_breakpoint(), Ok(2));
        assert!(playback.is_at_end());
        assert_eq!(playback.run_to_breakpoint(), Err(PlaybackError::AtEnd));

        assert!(!playback.toggle_breakpoint(6));
        assert!(playback.breakpoints().is_empty());
    }

    #[test]
    fn test_empty_output_is_recorded_as_none() {
        let step = ExecutionStep::new(1, Scope::new().snapshot(), "print").with_output(Vec::new());
        assert_eq!(step.output, None);
    }

    #[test]
    fn test_output_so_far() {
        let mut trace = steps(&[1, 2, 3]);
        trace[2] = trace[2].clone().with_output(vec!["[1, 2]".to_string()]);
        let mut playback = Playback::new(trace).unwrap();

        assert!(playback.output_so_far().is_empty());
        playback.jump_to_end();
        assert_eq!(playback.output_so_far(), ["[1, 2]"]);
    }
}
