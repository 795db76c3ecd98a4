//! Modal Dialog Controller
//!
//! Async confirm/prompt dialogs replacing the blocking `window.confirm`
//! family. One dialog may be pending at a time: opening a new one resolves
//! the outstanding caller as dismissed (no silent orphaning), then takes
//! the slot.

use futures::channel::oneshot;
use leptos::prelude::*;

/// Structured result of the combined text+date prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskDraft {
    pub content: String,
    pub deadline: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalKind {
    Confirm,
    Prompt { initial: String },
    PromptWithDate {
        initial: String,
        initial_date: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalRequest {
    pub title: String,
    pub message: String,
    pub kind: ModalKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalOutcome {
    Confirmed(bool),
    Text(Option<String>),
    TextDate(Option<TaskDraft>),
}

/// Single pending-dialog slot. Installing a new sender drops the previous
/// one, which resolves that caller's await as dismissed.
#[derive(Default)]
struct ResolverSlot(Option<oneshot::Sender<ModalOutcome>>);

impl ResolverSlot {
    fn install(&mut self) -> oneshot::Receiver<ModalOutcome> {
        let (tx, rx) = oneshot::channel();
        self.0 = Some(tx);
        rx
    }

    fn resolve(&mut self, outcome: ModalOutcome) -> bool {
        match self.0.take() {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ModalController {
    request: RwSignal<Option<ModalRequest>>,
    resolver: StoredValue<ResolverSlot>,
}

pub fn use_modal() -> ModalController {
    expect_context::<ModalController>()
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            request: RwSignal::new(None),
            resolver: StoredValue::new(ResolverSlot::default()),
        }
    }

    /// Reactive handle to the currently open request, for the host view.
    pub fn request(&self) -> RwSignal<Option<ModalRequest>> {
        self.request
    }

    async fn open(self, request: ModalRequest) -> Option<ModalOutcome> {
        let rx = self
            .resolver
            .try_update_value(|slot| slot.install())
            .expect("modal resolver slot is never borrowed across await");
        self.request.set(Some(request));
        // A replaced sender drops, and the await resolves as dismissed.
        rx.await.ok()
    }

    /// Close the dialog, waking whoever awaits it.
    pub fn resolve(self, outcome: ModalOutcome) {
        self.request.set(None);
        self.resolver.update_value(|slot| {
            slot.resolve(outcome);
        });
    }

    pub async fn confirm(self, title: &str, message: &str) -> bool {
        let outcome = self
            .open(ModalRequest {
                title: title.to_string(),
                message: message.to_string(),
                kind: ModalKind::Confirm,
            })
            .await;
        matches!(outcome, Some(ModalOutcome::Confirmed(true)))
    }

    pub async fn prompt(self, title: &str, message: &str, initial: &str) -> Option<String> {
        let outcome = self
            .open(ModalRequest {
                title: title.to_string(),
                message: message.to_string(),
                kind: ModalKind::Prompt {
                    initial: initial.to_string(),
                },
            })
            .await;
        match outcome {
            Some(ModalOutcome::Text(text)) => text,
            _ => None,
        }
    }

    pub async fn prompt_with_date(
        self,
        title: &str,
        message: &str,
        initial: &str,
        initial_date: Option<&str>,
    ) -> Option<TaskDraft> {
        let outcome = self
            .open(ModalRequest {
                title: title.to_string(),
                message: message.to_string(),
                kind: ModalKind::PromptWithDate {
                    initial: initial.to_string(),
                    initial_date: initial_date.map(str::to_string),
                },
            })
            .await;
        match outcome {
            Some(ModalOutcome::TextDate(draft)) => draft,
            _ => None,
        }
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome for the Cancel button / overlay dismissal.
fn dismissed(kind: &ModalKind) -> ModalOutcome {
    match kind {
        ModalKind::Confirm => ModalOutcome::Confirmed(false),
        ModalKind::Prompt { .. } => ModalOutcome::Text(None),
        ModalKind::PromptWithDate { .. } => ModalOutcome::TextDate(None),
    }
}

/// Outcome for the OK button given the current input values.
fn accepted(kind: &ModalKind, text: &str, date: &str) -> ModalOutcome {
    match kind {
        ModalKind::Confirm => ModalOutcome::Confirmed(true),
        ModalKind::Prompt { .. } => ModalOutcome::Text(Some(text.to_string())),
        ModalKind::PromptWithDate { .. } => ModalOutcome::TextDate(Some(TaskDraft {
            content: text.to_string(),
            deadline: if date.is_empty() {
                None
            } else {
                Some(date.to_string())
            },
        })),
    }
}

/// Renders the pending dialog, if any. Mounted once at the app root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = use_modal();
    let (text, set_text) = signal(String::new());
    let (date, set_date) = signal(String::new());

    // Seed the inputs each time a dialog opens.
    Effect::new(move |_| {
        if let Some(req) = modal.request().get() {
            match req.kind {
                ModalKind::Confirm => {}
                ModalKind::Prompt { initial } => set_text.set(initial),
                ModalKind::PromptWithDate {
                    initial,
                    initial_date,
                } => {
                    set_text.set(initial);
                    set_date.set(initial_date.unwrap_or_default());
                }
            }
        }
    });

    view! {
        {move || modal.request().get().map(|req| {
            let has_text = !matches!(req.kind, ModalKind::Confirm);
            let has_date = matches!(req.kind, ModalKind::PromptWithDate { .. });
            let cancel_kind = req.kind.clone();
            let ok_kind = req.kind.clone();
            view! {
                <div class="modal-overlay">
                    <div class="modal">
                        <h3 class="modal-title">{req.title.clone()}</h3>
                        <p class="modal-message">{req.message.clone()}</p>
                        {has_text.then(|| view! {
                            <input
                                type="text"
                                class="modal-input"
                                prop:value=move || text.get()
                                on:input=move |ev| set_text.set(event_target_value(&ev))
                            />
                        })}
                        {has_date.then(|| view! {
                            <input
                                type="date"
                                class="modal-date-input"
                                prop:value=move || date.get()
                                on:input=move |ev| set_date.set(event_target_value(&ev))
                            />
                        })}
                        <div class="modal-actions">
                            <button
                                class="modal-cancel-btn"
                                on:click=move |_| modal.resolve(dismissed(&cancel_kind))
                            >
                                "Cancel"
                            </button>
                            <button
                                class="modal-ok-btn"
                                on:click=move |_| modal.resolve(accepted(
                                    &ok_kind,
                                    &text.get_untracked(),
                                    &date.get_untracked(),
                                ))
                            >
                                "OK"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn reopening_dismisses_outstanding_dialog() {
        let mut slot = ResolverSlot::default();
        let rx1 = slot.install();
        // Second dialog opens before the first resolves: the first caller's
        // await resolves as cancelled instead of hanging forever.
        let rx2 = slot.install();
        assert!(block_on(rx1).is_err());

        assert!(slot.resolve(ModalOutcome::Confirmed(true)));
        assert_eq!(block_on(rx2).unwrap(), ModalOutcome::Confirmed(true));
    }

    #[test]
    fn resolve_without_pending_dialog_is_a_no_op() {
        let mut slot = ResolverSlot::default();
        assert!(!slot.resolve(ModalOutcome::Confirmed(true)));
    }

    #[test]
    fn outcomes_follow_dialog_configuration() {
        assert_eq!(dismissed(&ModalKind::Confirm), ModalOutcome::Confirmed(false));
        assert_eq!(accepted(&ModalKind::Confirm, "", ""), ModalOutcome::Confirmed(true));

        let prompt = ModalKind::Prompt { initial: String::new() };
        assert_eq!(dismissed(&prompt), ModalOutcome::Text(None));
        assert_eq!(
            accepted(&prompt, "Buy milk", ""),
            ModalOutcome::Text(Some("Buy milk".to_string()))
        );

        let dated = ModalKind::PromptWithDate {
            initial: String::new(),
            initial_date: None,
        };
        assert_eq!(dismissed(&dated), ModalOutcome::TextDate(None));
        assert_eq!(
            accepted(&dated, "Dentist", "2026-09-01"),
            ModalOutcome::TextDate(Some(TaskDraft {
                content: "Dentist".to_string(),
                deadline: Some("2026-09-01".to_string()),
            }))
        );
        // Empty date collapses to no deadline rather than an empty string.
        assert_eq!(
            accepted(&dated, "Dentist", ""),
            ModalOutcome::TextDate(Some(TaskDraft {
                content: "Dentist".to_string(),
                deadline: None,
            }))
        );
    }
}
