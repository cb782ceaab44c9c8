//! Interactive fallback state machine
//!
//! The controller walks the request field by field. A field that is already
//! present is skipped. A missing field either suspends with a [`Question`]
//! (interactive) or is filled with a deterministic default (programmatic).
//!
//! Callers alternate [`Controller::step`] and [`Controller::answer`] until a
//! terminal [`Outcome`] comes back. `step` is the only suspension point.

use super::constraint::{force_required_styling, infer_styling, reconcile};
use super::emitter::{emit, Fields, ResolvedConfig};
use super::error::{ResolveError, Result};
use super::request::{is_valid_project_name, ProjectRequest};
use crate::catalog::{CatalogEntry, Choice, Language, StylingMode, NONE};
use std::fmt;

/// Where the request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// An operator can answer questions; confirmation is required
    Interactive,
    /// Never suspends and never asks for confirmation
    Programmatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NeedsProjectName,
    NeedsLanguage,
    NeedsStyling,
    NeedsLibrary,
    ConflictDetected,
    NeedsDatabase,
    NeedsConfirmation,
    Resolved,
    Cancelled,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Resolved | State::Cancelled)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A question issued to the operator while the controller is suspended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Only asked when the supplied name is unusable
    ProjectName {
        default: &'static str,
        notice: Option<String>,
    },
    Language {
        options: &'static [Language],
    },
    Styling {
        options: &'static [StylingMode],
    },
    Library {
        options: &'static [Choice],
        /// Set when a previous answer had to be rejected
        notice: Option<String>,
    },
    /// The library needs Tailwind; enable it or pick a plain-compatible library
    EnableTailwind {
        library: String,
    },
    Database {
        options: &'static [Choice],
        notice: Option<String>,
    },
    Confirm {
        summary: Vec<(&'static str, String)>,
    },
}

/// The operator's pre-validated answer to the pending question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    ProjectName(String),
    Language(Language),
    Styling(StylingMode),
    Library(String),
    EnableTailwind(bool),
    Database(String),
    Confirm(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Resolved(ResolvedConfig),
    /// No configuration was produced
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Ask(Question),
    Done(Outcome),
}

pub struct Controller {
    catalog: &'static CatalogEntry,
    mode: Mode,
    state: State,
    request: ProjectRequest,
    /// Canonical library after reconciliation
    library: Option<String>,
    /// The operator declined enabling Tailwind for a conflicting library
    plain_only: bool,
    notice: Option<String>,
    pending: Option<Question>,
    config: Option<ResolvedConfig>,
}

impl Controller {
    pub fn new(request: ProjectRequest, mode: Mode) -> Self {
        Self {
            catalog: request.framework.catalog(),
            mode,
            state: State::NeedsProjectName,
            request,
            library: None,
            plain_only: false,
            notice: None,
            pending: None,
            config: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn request(&self) -> &ProjectRequest {
        &self.request
    }

    fn interactive(&self) -> bool {
        self.mode == Mode::Interactive
    }

    fn transition(&mut self, to: State) {
        log::debug!("resolver: {} -> {}", self.state, to);
        self.state = to;
    }

    fn suspend(&mut self, question: Question) -> Result<Step> {
        log::debug!("resolver: suspended in {}", self.state);
        self.pending = Some(question.clone());
        Ok(Step::Ask(question))
    }

    /// Advance through every transition that needs no input
    pub fn step(&mut self) -> Result<Step> {
        if let Some(question) = &self.pending {
            return Ok(Step::Ask(question.clone()));
        }

        loop {
            match self.state {
                State::NeedsProjectName => {
                    // Blank falls back to the catalog default at emission
                    let name = self
                        .request
                        .project_name
                        .as_deref()
                        .map(str::trim)
                        .filter(|n| !n.is_empty())
                        .map(str::to_string);
                    match name {
                        Some(name) if !is_valid_project_name(&name) => {
                            let err = ResolveError::InvalidProjectName { name };
                            if !self.interactive() {
                                return Err(err);
                            }
                            self.request.project_name = None;
                            return self.suspend(Question::ProjectName {
                                default: self.catalog.default_project_name,
                                notice: Some(err.to_string()),
                            });
                        }
                        name => {
                            self.request.project_name = name;
                            self.transition(State::NeedsLanguage);
                        }
                    }
                }
                State::NeedsLanguage => {
                    if self.request.language.is_none() {
                        if self.interactive() {
                            return self.suspend(Question::Language {
                                options: &Language::ALL,
                            });
                        }
                        self.request.language = Some(Language::Ts);
                    }
                    self.transition(State::NeedsStyling);
                }
                State::NeedsStyling => {
                    if self.request.styling.is_none() {
                        if self.interactive() {
                            return self.suspend(Question::Styling {
                                options: &StylingMode::ALL,
                            });
                        }
                        self.request.styling =
                            Some(infer_styling(self.catalog, self.request.ui_library.as_deref()));
                    }
                    self.transition(State::NeedsLibrary);
                }
                State::NeedsLibrary => {
                    let Some(styling) = self.request.styling else {
                        self.transition(State::NeedsStyling);
                        continue;
                    };

                    if self.request.ui_library.is_none() && self.interactive() {
                        let options = if self.plain_only {
                            self.catalog.plain_libraries
                        } else {
                            self.catalog.libraries_for(styling)
                        };
                        let notice = self.notice.take();
                        return self.suspend(Question::Library { options, notice });
                    }

                    match reconcile(self.catalog, styling, self.request.ui_library.as_deref()) {
                        Ok((_, library)) => {
                            self.library = Some(library);
                            self.transition(State::NeedsDatabase);
                        }
                        Err(ResolveError::HardConflict { library, .. }) => {
                            if self.interactive() {
                                self.request.ui_library = Some(library);
                                self.transition(State::ConflictDetected);
                            } else {
                                let (styling, library) = force_required_styling(
                                    self.catalog,
                                    self.request.ui_library.as_deref(),
                                )?;
                                log::debug!("resolver: enabled {} for '{}'", styling, library);
                                self.request.styling = Some(styling);
                                self.library = Some(library);
                                self.transition(State::NeedsDatabase);
                            }
                        }
                        Err(err @ ResolveError::UnknownLibrary { .. }) if self.interactive() => {
                            self.notice = Some(err.to_string());
                            self.request.ui_library = None;
                        }
                        Err(err) => return Err(err),
                    }
                }
                State::ConflictDetected => {
                    let library = self.request.ui_library.clone().unwrap_or_default();
                    return self.suspend(Question::EnableTailwind { library });
                }
                State::NeedsDatabase => {
                    let Some(raw) = self.request.database.clone() else {
                        if self.interactive() && self.catalog.databases.len() > 1 {
                            let notice = self.notice.take();
                            return self.suspend(Question::Database {
                                options: self.catalog.databases,
                                notice,
                            });
                        }
                        self.request.database = Some(NONE.to_string());
                        continue;
                    };

                    let database = self.catalog.canonicalize_database(&raw);
                    if !self.catalog.is_known_database(&database) {
                        let err = ResolveError::UnknownDatabase {
                            framework: self.catalog.framework,
                            value: database,
                        };
                        if !self.interactive() {
                            return Err(err);
                        }
                        self.notice = Some(err.to_string());
                        self.request.database = None;
                        continue;
                    }

                    self.config = Some(self.emit(database));
                    match self.mode {
                        Mode::Interactive => self.transition(State::NeedsConfirmation),
                        Mode::Programmatic => self.transition(State::Resolved),
                    }
                }
                State::NeedsConfirmation => {
                    let summary = self
                        .config
                        .as_ref()
                        .map(ResolvedConfig::summary)
                        .unwrap_or_default();
                    return self.suspend(Question::Confirm { summary });
                }
                State::Resolved => {
                    return match &self.config {
                        Some(config) => Ok(Step::Done(Outcome::Resolved(config.clone()))),
                        None => Ok(Step::Done(Outcome::Cancelled)),
                    };
                }
                State::Cancelled => return Ok(Step::Done(Outcome::Cancelled)),
            }
        }
    }

    fn emit(&self, database: String) -> ResolvedConfig {
        emit(Fields {
            project_name: self.request.project_name.clone(),
            framework: self.catalog.framework,
            language: self.request.language.unwrap_or(Language::Ts),
            use_tailwind: self.request.styling == Some(StylingMode::Tailwind),
            ui_library: self.library.clone().unwrap_or_else(|| NONE.to_string()),
            database,
        })
    }

    /// Resume after a suspension with the operator's answer
    pub fn answer(&mut self, answer: Answer) -> Result<()> {
        let Some(pending) = self.pending.clone() else {
            return Err(self.unexpected(&answer));
        };

        match (&pending, answer) {
            (Question::ProjectName { .. }, Answer::ProjectName(name)) => {
                // Re-checked on the next step
                self.request.project_name = Some(name);
            }
            (Question::Language { .. }, Answer::Language(language)) => {
                self.request.language = Some(language);
                self.transition(State::NeedsStyling);
            }
            (Question::Styling { .. }, Answer::Styling(styling)) => {
                self.request.styling = Some(styling);
                self.transition(State::NeedsLibrary);
            }
            (Question::Library { options, .. }, Answer::Library(value))
                if options.iter().any(|c| c.value == value) =>
            {
                self.request.ui_library = Some(value);
            }
            (Question::EnableTailwind { .. }, Answer::EnableTailwind(true)) => {
                self.request.styling = Some(StylingMode::Tailwind);
                self.transition(State::NeedsLibrary);
            }
            (Question::EnableTailwind { library }, Answer::EnableTailwind(false)) => {
                log::debug!("resolver: discarding '{}', plain libraries only", library);
                self.request.ui_library = None;
                self.plain_only = true;
                self.transition(State::NeedsLibrary);
            }
            (Question::Database { options, .. }, Answer::Database(value))
                if options.iter().any(|c| c.value == value) =>
            {
                self.request.database = Some(value);
            }
            (Question::Confirm { .. }, Answer::Confirm(true)) => {
                self.transition(State::Resolved);
            }
            (Question::Confirm { .. }, Answer::Confirm(false)) => {
                self.config = None;
                self.transition(State::Cancelled);
            }
            (_, answer) => return Err(self.unexpected(&answer)),
        }
        self.pending = None;
        Ok(())
    }

    fn unexpected(&self, answer: &Answer) -> ResolveError {
        ResolveError::UnexpectedAnswer {
            state: self.state.to_string(),
            answer: format!("{:?}", answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Framework, TAILWIND_ONLY};

    fn expect_ask(controller: &mut Controller) -> Question {
        match controller.step().unwrap() {
            Step::Ask(q) => q,
            Step::Done(o) => panic!("expected a question, got {:?}", o),
        }
    }

    fn expect_done(controller: &mut Controller) -> Outcome {
        match controller.step().unwrap() {
            Step::Done(o) => o,
            Step::Ask(q) => panic!("expected an outcome, got {:?}", q),
        }
    }

    #[test]
    fn test_programmatic_never_suspends() {
        let mut controller =
            Controller::new(ProjectRequest::new(Framework::Vue), Mode::Programmatic);
        let Outcome::Resolved(config) = expect_done(&mut controller) else {
            panic!("cancelled");
        };
        assert_eq!(config.language(), Language::Ts);
        assert!(config.use_tailwind());
        assert_eq!(config.ui_library(), TAILWIND_ONLY);
        assert_eq!(config.database(), NONE);
        assert_eq!(controller.state(), State::Resolved);
    }

    #[test]
    fn test_interactive_asks_missing_fields_in_order() {
        let mut controller = Controller::new(
            ProjectRequest::new(Framework::Astro).project_name("site"),
            Mode::Interactive,
        );

        assert!(matches!(expect_ask(&mut controller), Question::Language { .. }));
        controller.answer(Answer::Language(Language::Js)).unwrap();

        assert!(matches!(expect_ask(&mut controller), Question::Styling { .. }));
        controller.answer(Answer::Styling(StylingMode::Plain)).unwrap();

        let Question::Library { options, notice } = expect_ask(&mut controller) else {
            panic!("expected library question");
        };
        assert_eq!(options, Framework::Astro.catalog().plain_libraries);
        assert!(notice.is_none());
        controller.answer(Answer::Library("bootstrap".into())).unwrap();

        assert!(matches!(expect_ask(&mut controller), Question::Database { .. }));
        controller.answer(Answer::Database("astrodb".into())).unwrap();

        let Question::Confirm { summary } = expect_ask(&mut controller) else {
            panic!("expected confirmation");
        };
        assert_eq!(summary[0], ("Project", "site".to_string()));
        controller.answer(Answer::Confirm(true)).unwrap();

        let Outcome::Resolved(config) = expect_done(&mut controller) else {
            panic!("cancelled");
        };
        assert_eq!(config.language(), Language::Js);
        assert!(!config.use_tailwind());
        assert_eq!(config.ui_library(), "bootstrap");
        assert_eq!(config.database(), "astrodb");
    }

    #[test]
    fn test_present_fields_skip_straight_to_confirmation() {
        let request = ProjectRequest::new(Framework::Vue)
            .language(Language::Ts)
            .styling(StylingMode::Tailwind)
            .ui_library("daisy")
            .database("none");
        let mut controller = Controller::new(request, Mode::Interactive);
        assert!(matches!(expect_ask(&mut controller), Question::Confirm { .. }));
    }

    #[test]
    fn test_conflict_accept_enables_tailwind() {
        let request = ProjectRequest::new(Framework::Astro)
            .language(Language::Ts)
            .styling(StylingMode::Plain)
            .ui_library("daisyui")
            .database("none");
        let mut controller = Controller::new(request, Mode::Interactive);

        let question = expect_ask(&mut controller);
        assert_eq!(
            question,
            Question::EnableTailwind {
                library: "daisyui".into()
            }
        );
        assert_eq!(controller.state(), State::ConflictDetected);
        controller.answer(Answer::EnableTailwind(true)).unwrap();

        assert!(matches!(expect_ask(&mut controller), Question::Confirm { .. }));
        controller.answer(Answer::Confirm(true)).unwrap();
        let Outcome::Resolved(config) = expect_done(&mut controller) else {
            panic!("cancelled");
        };
        assert!(config.use_tailwind());
        assert_eq!(config.ui_library(), "daisyui");
    }

    #[test]
    fn test_conflict_decline_restricts_to_plain() {
        let request = ProjectRequest::new(Framework::Vue)
            .language(Language::Ts)
            .styling(StylingMode::Plain)
            .ui_library("daisyui");
        let mut controller = Controller::new(request, Mode::Interactive);

        assert!(matches!(expect_ask(&mut controller), Question::EnableTailwind { .. }));
        controller.answer(Answer::EnableTailwind(false)).unwrap();

        let Question::Library { options, .. } = expect_ask(&mut controller) else {
            panic!("expected library question");
        };
        assert!(!options.iter().any(|c| c.value == "daisyui"));
        assert!(options
            .iter()
            .all(|c| !Framework::Vue.catalog().requires_tailwind(c.value)));

        // the discarded library is not offered again
        assert!(controller.answer(Answer::Library("daisyui".into())).is_err());
        controller.answer(Answer::Library("vuetify".into())).unwrap();
        controller.answer(Answer::Database("none".into())).unwrap_err();

        assert!(matches!(expect_ask(&mut controller), Question::Database { .. }));
        controller.answer(Answer::Database("none".into())).unwrap();
        controller.step().unwrap();
        controller.answer(Answer::Confirm(true)).unwrap();

        let Outcome::Resolved(config) = expect_done(&mut controller) else {
            panic!("cancelled");
        };
        assert_eq!(config.ui_library(), "vuetify");
        assert!(!config.use_tailwind());
    }

    #[test]
    fn test_programmatic_conflict_prefers_tailwind() {
        let request = ProjectRequest::new(Framework::Astro)
            .styling(StylingMode::Plain)
            .ui_library("shadcn");
        let mut controller = Controller::new(request, Mode::Programmatic);
        let Outcome::Resolved(config) = expect_done(&mut controller) else {
            panic!("cancelled");
        };
        assert!(config.use_tailwind());
        assert_eq!(config.ui_library(), "shadcn");
    }

    #[test]
    fn test_unknown_library_reprompts_interactively() {
        let request = ProjectRequest::new(Framework::Vue)
            .language(Language::Ts)
            .styling(StylingMode::Plain)
            .ui_library("bulma");
        let mut controller = Controller::new(request, Mode::Interactive);

        let Question::Library { notice, .. } = expect_ask(&mut controller) else {
            panic!("expected library question");
        };
        assert!(notice.unwrap().contains("bulma"));
    }

    #[test]
    fn test_unknown_library_is_an_error_programmatically() {
        let request = ProjectRequest::new(Framework::Vue).ui_library("bulma");
        let mut controller = Controller::new(request, Mode::Programmatic);
        assert!(matches!(
            controller.step(),
            Err(ResolveError::UnknownLibrary { .. })
        ));
    }

    #[test]
    fn test_unknown_database_programmatically() {
        let request = ProjectRequest::new(Framework::Vue).database("astrodb");
        let mut controller = Controller::new(request, Mode::Programmatic);
        assert!(matches!(
            controller.step(),
            Err(ResolveError::UnknownDatabase { .. })
        ));
    }

    #[test]
    fn test_reject_cancels_and_stays_cancelled() {
        let request = ProjectRequest::new(Framework::Vue)
            .language(Language::Ts)
            .styling(StylingMode::Tailwind)
            .ui_library("none")
            .database("none");
        let mut controller = Controller::new(request, Mode::Interactive);
        expect_ask(&mut controller);
        controller.answer(Answer::Confirm(false)).unwrap();

        assert_eq!(expect_done(&mut controller), Outcome::Cancelled);
        assert_eq!(expect_done(&mut controller), Outcome::Cancelled);
        assert!(controller.state().is_terminal());
        assert!(controller.answer(Answer::Confirm(true)).is_err());
    }

    #[test]
    fn test_answer_without_question_is_rejected() {
        let mut controller =
            Controller::new(ProjectRequest::new(Framework::Astro), Mode::Interactive);
        assert!(controller.answer(Answer::Language(Language::Ts)).is_err());
    }

    #[test]
    fn test_mismatched_answer_keeps_question_pending() {
        let mut controller =
            Controller::new(ProjectRequest::new(Framework::Astro), Mode::Interactive);
        expect_ask(&mut controller);
        assert!(controller.answer(Answer::Confirm(true)).is_err());
        assert!(matches!(expect_ask(&mut controller), Question::Language { .. }));
    }

    #[test]
    fn test_unusable_name_is_an_error_programmatically() {
        let request = ProjectRequest::new(Framework::Vue).project_name("../../etc/x");
        let mut controller = Controller::new(request, Mode::Programmatic);
        assert_eq!(
            controller.step(),
            Err(ResolveError::InvalidProjectName {
                name: "../../etc/x".to_string()
            })
        );
    }

    #[test]
    fn test_unusable_name_reprompts_interactively() {
        let request = ProjectRequest::new(Framework::Astro)
            .project_name("my site")
            .language(Language::Ts)
            .styling(StylingMode::Plain)
            .ui_library("none")
            .database("none");
        let mut controller = Controller::new(request, Mode::Interactive);

        let Question::ProjectName { default, notice } = expect_ask(&mut controller) else {
            panic!("expected project name question");
        };
        assert_eq!(default, "my-astro-site");
        assert!(notice.unwrap().contains("my site"));

        // Still unusable: asked again
        controller.answer(Answer::ProjectName("a/b".into())).unwrap();
        assert!(matches!(expect_ask(&mut controller), Question::ProjectName { .. }));

        controller.answer(Answer::ProjectName("  my-site ".into())).unwrap();
        assert!(matches!(expect_ask(&mut controller), Question::Confirm { .. }));
        controller.answer(Answer::Confirm(true)).unwrap();

        let Outcome::Resolved(config) = expect_done(&mut controller) else {
            panic!("cancelled");
        };
        assert_eq!(config.project_name(), "my-site");
    }

    #[test]
    fn test_blank_name_uses_default_without_asking() {
        let request = ProjectRequest::new(Framework::Vue).project_name("   ");
        let mut controller = Controller::new(request, Mode::Programmatic);
        let Outcome::Resolved(config) = expect_done(&mut controller) else {
            panic!("cancelled");
        };
        assert_eq!(config.project_name(), "my-vue-app");
    }
}
