//! View-state snapshots and the reducer that advances them.
//!
//! The front end never mutates UI state in place. It holds one
//! [`ViewState`], feeds every discrete UI event through [`reduce`] and
//! renders whatever snapshot comes out. Each event is handled to
//! completion before the next one.

use serde::Serialize;

use crate::contact::{ContactForm, FormField, SubmitOutcome};
use crate::layout::{LayoutConstants, LayoutMode, ProjectPlacement};
use crate::toggle::ToggleSet;

/// Outcome shown under the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SubmitStatus {
    Sent,
    Failed,
    /// The form did not pass validation and was not sent.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Fresh mount: everything resets, layout computed for `width`.
    Mounted(u32),
    /// Viewport changed; the layout is recomputed every time.
    Resized(u32),
    Scrolled(u32),
    ToggleSkill(u32),
    /// Open or close the whole skills section.
    ToggleAllSkills,
    ToggleExperience(u32),
    ToggleProject(u32),
    EditField(FormField, String),
    SubmitRequested,
    SubmitFinished(SubmitOutcome),
}

/// Immutable UI snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub viewport_width: u32,
    pub scroll_offset: u32,
    pub layout: LayoutMode,
    pub expanded_skills: ToggleSet<u32>,
    pub expanded_experiences: ToggleSet<u32>,
    pub expanded_projects: ToggleSet<u32>,
    pub form: ContactForm,
    /// Set while a submission is in flight; blocks another one.
    pub submitting: bool,
    pub submit_status: Option<SubmitStatus>,
}

impl ViewState {
    /// Snapshot for a display surface `width` wide.
    pub fn mounted(width: u32, constants: &LayoutConstants) -> Self {
        Self {
            viewport_width: width,
            layout: LayoutMode::resolve(width, constants),
            ..Self::default()
        }
    }

    /// Slot assignment for `total` projects under the current layout.
    pub fn placement(&self, total: usize) -> ProjectPlacement {
        self.layout.place(total)
    }

    /// Whether the submit action is available.
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    /// Text for the current submission status, if any.
    pub fn status_message(&self, fallback_email: &str) -> Option<String> {
        self.submit_status.as_ref().map(|status| match status {
            SubmitStatus::Sent => SubmitOutcome::Sent.message(fallback_email),
            SubmitStatus::Failed => SubmitOutcome::Failed.message(fallback_email),
            SubmitStatus::Invalid(reason) => reason.clone(),
        })
    }
}

/// Advance `state` by one event.
pub fn reduce(state: &ViewState, event: UiEvent, constants: &LayoutConstants) -> ViewState {
    match event {
        UiEvent::Mounted(width) => ViewState::mounted(width, constants),
        UiEvent::Resized(width) => {
            let layout = LayoutMode::resolve(width, constants);
            if layout != state.layout {
                log::debug!("Layout at width {}: {:?}", width, layout);
            }
            ViewState {
                viewport_width: width,
                layout,
                ..state.clone()
            }
        }
        UiEvent::Scrolled(offset) => ViewState {
            scroll_offset: offset,
            ..state.clone()
        },
        UiEvent::ToggleSkill(id) => ViewState {
            expanded_skills: state.expanded_skills.toggle(id),
            ..state.clone()
        },
        UiEvent::ToggleAllSkills => ViewState {
            expanded_skills: state.expanded_skills.toggle_group(),
            ..state.clone()
        },
        UiEvent::ToggleExperience(id) => ViewState {
            expanded_experiences: state.expanded_experiences.toggle(id),
            ..state.clone()
        },
        UiEvent::ToggleProject(id) => ViewState {
            expanded_projects: state.expanded_projects.toggle(id),
            ..state.clone()
        },
        UiEvent::EditField(field, value) => ViewState {
            form: state.form.with_field(field, value),
            ..state.clone()
        },
        UiEvent::SubmitRequested => {
            if state.submitting {
                return state.clone();
            }
            match state.form.validate() {
                Ok(()) => ViewState {
                    submitting: true,
                    submit_status: None,
                    ..state.clone()
                },
                Err(e) => ViewState {
                    submit_status: Some(SubmitStatus::Invalid(e.to_string())),
                    ..state.clone()
                },
            }
        }
        UiEvent::SubmitFinished(outcome) => match outcome {
            SubmitOutcome::Sent => ViewState {
                submitting: false,
                submit_status: Some(SubmitStatus::Sent),
                form: ContactForm::default(),
                ..state.clone()
            },
            SubmitOutcome::Failed => ViewState {
                submitting: false,
                submit_status: Some(SubmitStatus::Failed),
                ..state.clone()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::failure_message;
    use crate::layout::ColumnAllocation;

    const WEB: LayoutConstants = LayoutConstants::WEB;

    fn run(events: Vec<UiEvent>) -> ViewState {
        events
            .into_iter()
            .fold(ViewState::default(), |s, e| reduce(&s, e, &WEB))
    }

    fn filled_form_events() -> Vec<UiEvent> {
        vec![
            UiEvent::EditField(FormField::Name, "Ada".into()),
            UiEvent::EditField(FormField::Email, "ada@example.com".into()),
            UiEvent::EditField(FormField::Subject, "Hello".into()),
            UiEvent::EditField(FormField::Message, "Nice work".into()),
        ]
    }

    #[test]
    fn test_mount_resolves_layout() {
        let state = run(vec![UiEvent::Mounted(3000)]);
        assert_eq!(
            state.layout,
            LayoutMode::Columns(ColumnAllocation { left: 1, right: 1 })
        );
        assert_eq!(state.placement(11).fallback, 6..11);
    }

    #[test]
    fn test_resize_recomputes_every_time() {
        let state = run(vec![
            UiEvent::Mounted(3000),
            UiEvent::Resized(700),
        ]);
        assert!(state.layout.is_stacked());
        assert_eq!(state.viewport_width, 700);
        assert_eq!(state.placement(11).fallback, 0..11);

        let state = reduce(&state, UiEvent::Resized(2200), &WEB);
        assert_eq!(state.layout, LayoutMode::Columns(ColumnAllocation::NONE));
    }

    #[test]
    fn test_resize_keeps_toggles() {
        let state = run(vec![
            UiEvent::Mounted(1200),
            UiEvent::ToggleProject(14),
            UiEvent::Resized(3000),
        ]);
        assert!(state.expanded_projects.contains(&14));
    }

    #[test]
    fn test_mount_resets_state() {
        let state = run(vec![
            UiEvent::ToggleProject(1),
            UiEvent::Scrolled(120),
            UiEvent::Mounted(1000),
        ]);
        assert!(state.expanded_projects.is_empty());
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_toggle_sets_are_independent() {
        let state = run(vec![
            UiEvent::ToggleSkill(1),
            UiEvent::ToggleExperience(1),
            UiEvent::ToggleExperience(2),
        ]);
        assert!(state.expanded_skills.contains(&1));
        assert_eq!(state.expanded_experiences.len(), 2);
        assert!(state.expanded_projects.is_empty());
    }

    #[test]
    fn test_toggle_all_skills() {
        let state = run(vec![UiEvent::ToggleSkill(2), UiEvent::ToggleAllSkills]);
        assert!(state.expanded_skills.is_group_open());
        assert!(state.expanded_skills.is_expanded(&5));

        let state = reduce(&state, UiEvent::ToggleSkill(3), &WEB);
        assert!(!state.expanded_skills.is_group_open());
        assert!(state.expanded_skills.contains(&3));
    }

    #[test]
    fn test_submit_requires_valid_form() {
        let state = run(vec![UiEvent::SubmitRequested]);
        assert!(!state.submitting);
        assert_eq!(
            state.status_message("hi@ihsan.cc").as_deref(),
            Some("Name cannot be empty")
        );
    }

    #[test]
    fn test_submit_blocks_resubmission() {
        let mut events = filled_form_events();
        events.push(UiEvent::SubmitRequested);
        let state = run(events);
        assert!(state.submitting);
        assert!(!state.can_submit());

        let again = reduce(&state, UiEvent::SubmitRequested, &WEB);
        assert_eq!(again, state);
    }

    #[test]
    fn test_failed_submit_shows_fallback_and_reenables() {
        let mut events = filled_form_events();
        events.push(UiEvent::SubmitRequested);
        events.push(UiEvent::SubmitFinished(SubmitOutcome::Failed));
        let state = run(events);

        assert!(state.can_submit());
        assert_eq!(state.submit_status, Some(SubmitStatus::Failed));
        assert_eq!(
            state.status_message("hi@ihsan.cc"),
            Some(failure_message("hi@ihsan.cc"))
        );
        // fields kept for another attempt
        assert_eq!(state.form.name, "Ada");
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut events = filled_form_events();
        events.push(UiEvent::SubmitRequested);
        events.push(UiEvent::SubmitFinished(SubmitOutcome::Sent));
        let state = run(events);

        assert!(state.can_submit());
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.submit_status, Some(SubmitStatus::Sent));
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let before = ViewState::mounted(1000, &WEB);
        let snapshot = before.clone();
        let _ = reduce(&before, UiEvent::ToggleProject(3), &WEB);
        assert_eq!(before, snapshot);
    }
}
