//! Create-ticket form component
//!
//! Fetches the team-member directory on mount and, once it is available,
//! renders the title, description, deadline, and skill fields and dispatches
//! validated drafts to the parent page.

pub mod model;

use iocraft::prelude::*;

use crate::api::{FetchState, HttpTicketApi, TicketApi};
use crate::config::Config;
use crate::error::Result;
use crate::tui::components::MemberSelect;
use crate::tui::theme::theme;
use crate::types::{TeamMember, TicketDraft};

pub use model::{FormField, FormModel, SubmitDecision, submit_decision};

/// Props for the TicketForm component
#[derive(Default, Props)]
pub struct TicketFormProps {
    /// Whether the form pane has keyboard focus
    pub has_focus: bool,
    /// Whether a create request is currently pending
    pub submitting: bool,
    /// Invoked with the validated draft when the user submits
    pub on_submit: Option<Handler<TicketDraft>>,
    /// Set to true by the parent to clear the form after a successful create
    pub reset: Option<State<bool>>,
}

async fn fetch_directory() -> Result<Vec<TeamMember>> {
    let config = Config::load()?;
    let api = HttpTicketApi::from_config(&config)?;
    api.list_team_members().await
}

/// The create-ticket form pane.
///
/// The input controls only exist once the directory fetch succeeds; until
/// then the pane shows a loading placeholder or the failure reason, and key
/// input is ignored.
#[component]
pub fn TicketForm(props: &TicketFormProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let mut model = hooks.use_state(FormModel::new);
    let directory = hooks.use_state(FetchState::<Vec<TeamMember>>::default);
    let mut fetch_started = hooks.use_state(|| false);
    let mut should_submit = hooks.use_state(|| false);

    let load_directory: Handler<()> = hooks.use_async_handler({
        move |_: ()| {
            let mut directory = directory;
            async move {
                let result = fetch_directory().await;
                if let Err(ref e) = result {
                    tracing::warn!("directory fetch failed: {}", e);
                }
                directory.set(FetchState::from_result(result));
            }
        }
    });

    // Kick off the directory fetch exactly once
    if !fetch_started.get() {
        fetch_started.set(true);
        load_directory(());
    }

    // Parent signals a successful create; clear the fields
    if let Some(mut reset) = props.reset
        && reset.get()
    {
        reset.set(false);
        model.set(FormModel::new());
    }

    // Resolve a submit keypress outside the event closure so the handler
    // prop can be invoked with the validated draft
    if should_submit.get() {
        should_submit.set(false);
        let mut current = { model.read().clone() };
        match submit_decision(&mut current, props.submitting) {
            SubmitDecision::Submit(draft) => {
                model.set(current);
                if let Some(ref on_submit) = props.on_submit {
                    on_submit(draft);
                }
            }
            SubmitDecision::Blocked(_) => {
                model.set(current);
            }
            SubmitDecision::InFlight => {}
        }
    }

    // Keyboard handling; only while this pane has focus and the fields exist
    hooks.use_terminal_events({
        let has_focus = props.has_focus;
        move |event| {
            if !has_focus {
                return;
            }
            let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }
            if directory.read().success().is_none() {
                return;
            }

            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('s') {
                should_submit.set(true);
                return;
            }

            let mut current = { model.read().clone() };

            if current.dropdown_open {
                let members = directory.read().success().cloned().unwrap_or_default();
                match code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        current.dropdown_move(-1, members.len() + 1);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        current.dropdown_move(1, members.len() + 1);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        current.choose_member(&members);
                    }
                    KeyCode::Esc => current.close_dropdown(),
                    _ => {}
                }
                model.set(current);
                return;
            }

            match code {
                KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                    current.focused = current.focused.prev();
                }
                KeyCode::Tab => {
                    current.focused = current.focused.next();
                }
                KeyCode::BackTab => {
                    current.focused = current.focused.prev();
                }
                _ => match current.focused {
                    FormField::Title => edit_text(&mut current.title, code),
                    FormField::Description => edit_text(&mut current.description, code),
                    FormField::Deadline => edit_text(&mut current.deadline, code),
                    FormField::Skill => {
                        if matches!(code, KeyCode::Enter | KeyCode::Char(' '))
                            && let Some(members) = directory.read().success()
                        {
                            current.open_dropdown(members);
                        }
                    }
                },
            }
            model.set(current);
        }
    });

    let state = model.read().clone();
    let directory_state = directory.read().clone();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding: 1,
            gap: 1,
            overflow: Overflow::Hidden,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(content: "New Ticket", color: theme.text, weight: Weight::Bold)
                #(if props.submitting {
                    Some(element! {
                        Text(content: "creating...", color: theme.text_dimmed)
                    })
                } else {
                    None
                })
            }

            #(match &directory_state {
                FetchState::Loading => vec![
                    element! {
                        Text(content: "Loading team directory...", color: theme.text_dimmed)
                    }
                    .into_any(),
                ],
                FetchState::Failure(reason) => vec![
                    element! {
                        Text(
                            content: "Could not load the team directory",
                            color: theme.error,
                            weight: Weight::Bold,
                        )
                    }
                    .into_any(),
                    element! {
                        Text(content: reason.clone(), color: theme.text)
                    }
                    .into_any(),
                ],
                FetchState::Success(members) => form_fields(&state, members, props.has_focus),
            })
        }
    }
}

/// Single-line editing for the text fields
fn edit_text(value: &mut String, code: KeyCode) {
    match code {
        KeyCode::Char(c) => value.push(c),
        KeyCode::Backspace => {
            value.pop();
        }
        _ => {}
    }
}

/// The input controls, rendered once the directory is available
fn form_fields(
    state: &FormModel,
    members: &[TeamMember],
    has_focus: bool,
) -> Vec<AnyElement<'static>> {
    vec![
        text_field(
            "Title",
            &state.title,
            state.focused == FormField::Title && has_focus,
            state.errors.title.as_deref(),
        ),
        text_field(
            "Description",
            &state.description,
            state.focused == FormField::Description && has_focus,
            state.errors.description.as_deref(),
        ),
        text_field(
            "Deadline (YYYY-MM-DD)",
            &state.deadline,
            state.focused == FormField::Deadline && has_focus,
            state.errors.deadline.as_deref(),
        ),
        element! {
            MemberSelect(
                label: "Skill".to_string(),
                members: members.to_vec(),
                selected_id: state.selected_skill.clone(),
                open: state.dropdown_open,
                cursor: state.dropdown_cursor,
                has_focus: state.focused == FormField::Skill && has_focus,
            )
        }
        .into_any(),
    ]
}

fn text_field(
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
) -> AnyElement<'static> {
    let theme = theme();
    let label_color = if focused {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let border_color = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let content = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let error = error.map(str::to_string);

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: format!("{}:", label), color: label_color)
            View(
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                width: 100pct,
            ) {
                Text(content: content, color: theme.text)
            }
            #(error.map(|message| {
                element! {
                    Text(content: message, color: theme.error)
                }
            }))
        }
    }
    .into_any()
}
