use std::borrow::Cow;

use super::{
    kinds::MarkupKind,
    state::{FormattingState, compute_formatting_state},
    toggle::{ToggleOutcome, TogglePolicy, plan_toggle},
};
use crate::editing::SelectionRange;

/// The editing surface the toggler reads from and writes to.
///
/// Hosts are expected to call [`MarkupToggler::check_formatting`] after every
/// selection or content change and render the result themselves.
pub trait EditorHost {
    /// Snapshot of the current buffer.
    fn text(&self) -> Cow<'_, str>;

    /// Current selection; collapsed when only a caret is shown.
    fn selection(&self) -> SelectionRange;

    /// Move the selection.
    fn select(&mut self, selection: SelectionRange);

    /// Replace the selected text, leaving a collapsed cursor right after the
    /// inserted text.
    fn replace_selection(&mut self, text: &str);

    /// Return input focus to the editing surface.
    fn focus(&mut self);
}

/// Applies bold/highlight toggles to an [`EditorHost`].
///
/// The toggler keeps no formatting state of its own. A host that is not
/// available yet is passed as `None`, which turns every call into a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupToggler {
    policy: TogglePolicy,
}

impl MarkupToggler {
    pub fn new(policy: TogglePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TogglePolicy {
        self.policy
    }

    /// Formatting active at the host's cursor (the selection start).
    pub fn check_formatting<H: EditorHost + ?Sized>(&self, host: Option<&H>) -> FormattingState {
        let Some(host) = host else {
            return FormattingState::default();
        };
        compute_formatting_state(&host.text(), host.selection().start)
    }

    pub fn toggle_bold<H: EditorHost + ?Sized>(&self, host: Option<&mut H>) -> ToggleOutcome {
        self.toggle(host, MarkupKind::Bold)
    }

    pub fn toggle_highlight<H: EditorHost + ?Sized>(&self, host: Option<&mut H>) -> ToggleOutcome {
        self.toggle(host, MarkupKind::Highlight)
    }

    /// Toggle `kind` at the host's selection and refocus the host.
    pub fn toggle<H: EditorHost + ?Sized>(
        &self,
        host: Option<&mut H>,
        kind: MarkupKind,
    ) -> ToggleOutcome {
        let Some(host) = host else {
            log::debug!("{kind} toggle ignored: no editor host");
            return ToggleOutcome::Unchanged;
        };

        let selection = host.selection();
        let plan = plan_toggle(&host.text(), selection, kind, &self.policy);

        let outcome = match plan {
            Ok(Some(plan)) => {
                host.select(SelectionRange::new(plan.replace.start, plan.replace.end));
                host.replace_selection(&plan.insert);
                host.select(plan.selection_after);
                plan.outcome
            }
            Ok(None) => ToggleOutcome::Unchanged,
            Err(e) => {
                log::debug!("{kind} toggle ignored: {e}");
                ToggleOutcome::Unchanged
            }
        };

        log::debug!("{kind} toggle at {selection:?}: {outcome:?}");
        host.focus();
        outcome
    }
}
