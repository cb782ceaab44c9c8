//! Project configuration resolution
//!
//! Turns a partially-specified [`ProjectRequest`] into one consistent
//! [`ResolvedConfig`], asking the operator through a [`Prompter`] only when a
//! field is missing or a choice conflicts.

pub mod constraint;
pub mod controller;
pub mod emitter;
pub mod error;
pub mod request;

pub use controller::{Answer, Controller, Mode, Outcome, Question, State, Step};
pub use emitter::ResolvedConfig;
pub use error::ResolveError;
pub use request::{is_valid_project_name, ProjectRequest};

/// Answers controller questions. Implementations return only values offered
/// by the question.
pub trait Prompter {
    fn ask(&mut self, question: &Question) -> error::Result<Answer>;
}

/// Prompter for sessions without an operator
struct NoOperator;

impl Prompter for NoOperator {
    fn ask(&mut self, question: &Question) -> error::Result<Answer> {
        Err(ResolveError::Prompt(format!(
            "no operator available to answer {:?}",
            question
        )))
    }
}

/// Drive a controller to a terminal outcome
pub fn resolve_with<P: Prompter + ?Sized>(
    controller: &mut Controller,
    prompter: &mut P,
) -> error::Result<Outcome> {
    loop {
        match controller.step()? {
            Step::Ask(question) => {
                let answer = prompter.ask(&question)?;
                controller.answer(answer)?;
            }
            Step::Done(outcome) => return Ok(outcome),
        }
    }
}

/// Resolve a request with no operator: defaults fill gaps, conflicts enable
/// Tailwind and no confirmation is asked.
pub fn resolve(request: ProjectRequest) -> error::Result<ResolvedConfig> {
    let mut controller = Controller::new(request, Mode::Programmatic);
    match resolve_with(&mut controller, &mut NoOperator)? {
        Outcome::Resolved(config) => Ok(config),
        Outcome::Cancelled => Err(ResolveError::Prompt(
            "programmatic resolution cannot be cancelled".to_string(),
        )),
    }
}
