//! Explanation building for scenario calculations.
//!
//! Steps are appended in calculation order, some of them only when the
//! value they explain contributes to the result. The builder numbers steps
//! as they are accepted, so skipped steps never leave gaps.

use crate::models::ExplanationStep;

/// A step waiting to be numbered by an [`ExplanationBuilder`].
#[derive(Debug, Clone)]
pub struct StepDraft {
    rule_id: String,
    label: String,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
}

impl StepDraft {
    /// Creates a step with empty input and output data.
    pub fn new(rule_id: &str, label: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            label: label.into(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: reasoning.into(),
        }
    }

    /// Attaches the figures that went into the step.
    pub fn with_input(mut self, input: serde_json::Value) -> Self {
        self.input = input;
        self
    }

    /// Attaches the figures the step produced.
    pub fn with_output(mut self, output: serde_json::Value) -> Self {
        self.output = output;
        self
    }
}

/// Accumulates numbered explanation steps.
///
/// # Example
///
/// ```
/// use childcare_calculator::calculation::{ExplanationBuilder, StepDraft};
///
/// let mut builder = ExplanationBuilder::new();
/// builder
///     .push(StepDraft::new("first", "First", "always"))
///     .push_if(false, || StepDraft::new("skipped", "Skipped", "never"))
///     .push(StepDraft::new("second", "Second", "always"));
///
/// let (text, steps) = builder.build();
/// assert_eq!(text, "1. First: always\n2. Second: always");
/// assert_eq!(steps[1].step_number, 2);
/// ```
#[derive(Debug, Default)]
pub struct ExplanationBuilder {
    steps: Vec<ExplanationStep>,
}

impl ExplanationBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step with the next step number.
    pub fn push(&mut self, draft: StepDraft) -> &mut Self {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(ExplanationStep {
            step_number,
            rule_id: draft.rule_id,
            label: draft.label,
            input: draft.input,
            output: draft.output,
            reasoning: draft.reasoning,
        });
        self
    }

    /// Appends a step only when `condition` holds.
    ///
    /// The draft is built lazily, so skipped steps cost nothing.
    pub fn push_if(&mut self, condition: bool, draft: impl FnOnce() -> StepDraft) -> &mut Self {
        if condition {
            self.push(draft());
        }
        self
    }

    /// Returns the number of steps accepted so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no steps have been accepted.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Renders the steps as newline-joined numbered lines.
    pub fn build(self) -> (String, Vec<ExplanationStep>) {
        let text = self
            .steps
            .iter()
            .map(ExplanationStep::render)
            .collect::<Vec<_>>()
            .join("\n");
        (text, self.steps)
    }
}
