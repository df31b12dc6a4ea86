//! Shared test helpers: an in-memory backend and fixtures.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tix::error::{Result, TixError};
use tix::types::{TeamMember, Ticket, TicketDraft};
use tix::TicketApi;

/// In-memory stand-in for the ticket backend.
///
/// Tickets created through it get sequential ids starting after the seeded
/// collection. Failure modes can be toggled to exercise error paths.
pub struct FakeApi {
    pub tickets: Mutex<Vec<Ticket>>,
    pub members: Vec<TeamMember>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_members: bool,
    pub create_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new(tickets: Vec<Ticket>, members: Vec<TeamMember>) -> Self {
        FakeApi {
            tickets: Mutex::new(tickets),
            members,
            fail_list: false,
            fail_create: false,
            fail_members: false,
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_members(mut self) -> Self {
        self.fail_members = true;
        self
    }

    pub fn create_call_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl TicketApi for FakeApi {
    fn list_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send {
        async move {
            if self.fail_list {
                return Err(TixError::Other("connection refused".to_string()));
            }
            Ok(self.tickets.lock().unwrap().clone())
        }
    }

    fn create_ticket(
        &self,
        draft: &TicketDraft,
    ) -> impl std::future::Future<Output = Result<Ticket>> + Send {
        let draft = draft.clone();
        async move {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(TixError::Api {
                    status: 500,
                    message: "database unavailable".to_string(),
                });
            }
            let mut tickets = self.tickets.lock().unwrap();
            let id = tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            let ticket = Ticket {
                id,
                title: draft.title,
                description: draft.description,
                deadline: draft.deadline,
                assigned_to: None,
                skills: draft.skills,
            };
            tickets.push(ticket.clone());
            Ok(ticket)
        }
    }

    fn list_team_members(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<TeamMember>>> + Send {
        async move {
            if self.fail_members {
                return Err(TixError::Other("directory unavailable".to_string()));
            }
            Ok(self.members.clone())
        }
    }
}

pub fn ticket(id: u64, title: &str) -> Ticket {
    Ticket {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        deadline: "2026-09-01".to_string(),
        assigned_to: None,
        skills: vec![],
    }
}

pub fn member(id: &str, name: &str, role: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    }
}

pub fn valid_draft() -> TicketDraft {
    TicketDraft {
        title: "Fix login redirect".to_string(),
        description: "Users land in a loop on /login".to_string(),
        deadline: "2026-09-01".to_string(),
        skills: vec![],
    }
}
