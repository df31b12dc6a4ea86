//! Ticket page component
//!
//! The fullscreen screen composing the create form and the ticket list.
//! Fetches the collection on mount, dispatches create requests from the
//! form, and owns pane focus and list navigation.

pub mod model;

use iocraft::prelude::*;

use crate::api::{FetchState, HttpTicketApi, TicketApi};
use crate::config::Config;
use crate::error::Result;
use crate::tui::components::{Footer, TicketList, form_shortcuts, list_shortcuts, render_toast};
use crate::tui::form::TicketForm;
use crate::tui::theme::theme;
use crate::types::{Ticket, TicketDraft};

pub use model::PageModel;
use model::{clamp_selection, scroll_for};

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PaneFocus {
    #[default]
    Form,
    List,
}

impl PaneFocus {
    fn toggle(self) -> Self {
        match self {
            PaneFocus::Form => PaneFocus::List,
            PaneFocus::List => PaneFocus::Form,
        }
    }
}

// Card chrome is two border rows plus title, two description lines, and the
// deadline row
const CARD_HEIGHT: usize = 6;

async fn fetch_tickets() -> Result<Vec<Ticket>> {
    let config = Config::load()?;
    let api = HttpTicketApi::from_config(&config)?;
    api.list_tickets().await
}

async fn submit_draft(draft: TicketDraft) -> Result<Ticket> {
    let config = Config::load()?;
    let api = HttpTicketApi::from_config(&config)?;
    api.create_ticket(&draft).await
}

/// Fullscreen ticket board: create form on the left, fetched tickets on the
/// right
#[component]
pub fn TicketPage(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut model = hooks.use_state(PageModel::new);
    let mut focus = hooks.use_state(PaneFocus::default);
    let mut selected_index = hooks.use_state(|| 0usize);
    let mut scroll_offset = hooks.use_state(|| 0usize);
    let mut fetch_started = hooks.use_state(|| false);
    let mut should_reload = hooks.use_state(|| false);
    let should_exit = hooks.use_state(|| false);
    let form_reset = hooks.use_state(|| false);

    let load_tickets: Handler<()> = hooks.use_async_handler({
        move |_: ()| {
            let mut model = model;
            async move {
                let result = fetch_tickets().await.map_err(|e| e.to_string());
                if let Err(ref reason) = result {
                    tracing::warn!("ticket list fetch failed: {}", reason);
                }
                let mut current = { model.read().clone() };
                current.tickets_loaded(result);
                model.set(current);
            }
        }
    });

    let create_ticket: Handler<TicketDraft> = hooks.use_async_handler({
        move |draft: TicketDraft| {
            let mut model = model;
            let mut form_reset = form_reset;
            async move {
                {
                    let mut current = { model.read().clone() };
                    if !current.begin_create() {
                        return;
                    }
                    model.set(current);
                }

                let result = submit_draft(draft).await.map_err(|e| e.to_string());
                if let Err(ref reason) = result {
                    tracing::warn!("ticket create failed: {}", reason);
                }
                let created = result.is_ok();

                let mut current = { model.read().clone() };
                current.finish_create(result);
                model.set(current);

                if created {
                    form_reset.set(true);
                }
            }
        }
    });

    // Initial collection fetch, exactly once
    if !fetch_started.get() {
        fetch_started.set(true);
        load_tickets(());
    }

    // Manual refetch requested from the list pane
    if should_reload.get() {
        should_reload.set(false);
        let mut current = { model.read().clone() };
        current.reload_tickets();
        model.set(current);
        load_tickets(());
    }

    if should_exit.get() {
        system.exit();
    }

    let state = model.read().clone();
    let list_focused = focus.get() == PaneFocus::List;

    // Cards that fit between the header and footer rows
    let visible_count = ((height as usize).saturating_sub(4) / CARD_HEIGHT).max(1);
    let list_width = (width as u32).saturating_mul(3) / 5;

    hooks.use_terminal_events({
        let ticket_count = state.ticket_count();
        move |event| {
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

            if modifiers.contains(KeyModifiers::CONTROL) {
                match code {
                    KeyCode::Char('q') => {
                        let mut should_exit = should_exit;
                        should_exit.set(true);
                    }
                    KeyCode::Char('l') => focus.set(focus.get().toggle()),
                    _ => {}
                }
                return;
            }

            if focus.get() != PaneFocus::List {
                return;
            }

            match code {
                KeyCode::Down | KeyCode::Char('j') => {
                    let next = clamp_selection(selected_index.get() + 1, ticket_count);
                    selected_index.set(next);
                    scroll_offset.set(scroll_for(next, scroll_offset.get(), visible_count));
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let next = selected_index.get().saturating_sub(1);
                    selected_index.set(next);
                    scroll_offset.set(scroll_for(next, scroll_offset.get(), visible_count));
                }
                KeyCode::Char('r') => {
                    let mut should_reload = should_reload;
                    should_reload.set(true);
                    selected_index.set(0);
                    scroll_offset.set(0);
                }
                _ => {}
            }
        }
    });

    let shortcuts = if list_focused {
        list_shortcuts()
    } else {
        form_shortcuts()
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header bar
            View(
                width: 100pct,
                height: 1,
                padding_left: 1,
                background_color: theme.border,
                flex_shrink: 0.0,
            ) {
                Text(content: "tix — ticket board", color: theme.text, weight: Weight::Bold)
            }

            // Panes
            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Row) {
                View(width: 40pct, height: 100pct) {
                    TicketForm(
                        has_focus: !list_focused,
                        submitting: state.submitting,
                        on_submit: Some(create_ticket),
                        reset: Some(form_reset),
                    )
                }
                View(width: 60pct, height: 100pct) {
                    #(list_pane(&state, list_focused, selected_index.get(), scroll_offset.get(), visible_count, list_width))
                }
            }

            #(render_toast(&state.toast))

            Footer(shortcuts: shortcuts)
        }
    }
}

/// Render the right pane according to the collection fetch state.
fn list_pane(
    state: &PageModel,
    has_focus: bool,
    selected_index: usize,
    scroll_offset: usize,
    visible_count: usize,
    width: u32,
) -> AnyElement<'static> {
    let theme = theme();
    let border_color = if has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    match &state.tickets {
        FetchState::Loading => element! {
            View(
                width: 100pct,
                height: 100pct,
                border_style: BorderStyle::Round,
                border_color: border_color,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "Loading tickets...", color: theme.text_dimmed)
            }
        }
        .into_any(),
        FetchState::Failure(reason) => element! {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: border_color,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                gap: 1,
            ) {
                Text(content: "Could not load tickets", color: theme.error, weight: Weight::Bold)
                Text(content: reason.clone(), color: theme.text)
                Text(content: "press r to retry", color: theme.text_dimmed)
            }
        }
        .into_any(),
        FetchState::Success(tickets) => {
            let selected = clamp_selection(selected_index, tickets.len());
            element! {
                TicketList(
                    tickets: tickets.clone(),
                    selected_index: selected,
                    scroll_offset: scroll_offset,
                    has_focus: has_focus,
                    visible_count: visible_count,
                    width: Some(width),
                )
            }
            .into_any()
        }
    }
}
