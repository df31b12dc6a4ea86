//! Wire models for the ticket backend.
//!
//! Field names follow the backend's JSON shapes exactly (camelCase where the
//! backend uses it), so these types double as the serialization layer.

use serde::{Deserialize, Serialize};

/// A ticket as returned by the backend.
///
/// Tickets are immutable once fetched: the client never edits or deletes
/// them, it only appends newly created ones to its local view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Server-assigned identifier, unique within the displayed collection
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Calendar date, `YYYY-MM-DD`
    pub deadline: String,
    /// Assignee display name, if the backend has assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Skill tags, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// A selectable team member from the directory endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl TeamMember {
    /// Display label used by the skill dropdown, e.g. `"Ana (Dev)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

/// Transient form state serialized as the create-ticket request body.
///
/// `skills` is modeled as a collection on the wire, but the form writes at
/// most one selected member id into it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserializes_backend_shape() {
        let json = r#"{"id":1,"title":"A","description":"d","deadline":"2025-01-01"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.title, "A");
        assert_eq!(ticket.deadline, "2025-01-01");
        assert!(ticket.assigned_to.is_none());
        assert!(ticket.skills.is_empty());
    }

    #[test]
    fn test_ticket_assigned_to_is_camel_case() {
        let json = r#"{"id":2,"title":"B","description":"d","deadline":"2025-02-02","assignedTo":"Ana","skills":["rust"]}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.assigned_to.as_deref(), Some("Ana"));
        assert_eq!(ticket.skills, vec!["rust"]);

        let out = serde_json::to_string(&ticket).unwrap();
        assert!(out.contains("\"assignedTo\":\"Ana\""));
    }

    #[test]
    fn test_member_label() {
        let member = TeamMember {
            id: "1".to_string(),
            name: "Ana".to_string(),
            role: "Dev".to_string(),
        };
        assert_eq!(member.label(), "Ana (Dev)");
    }

    #[test]
    fn test_draft_serializes_request_body() {
        let draft = TicketDraft {
            title: "Fix login".to_string(),
            description: "It is broken".to_string(),
            deadline: "2025-03-03".to_string(),
            skills: vec!["7".to_string()],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["title"], "Fix login");
        assert_eq!(json["skills"][0], "7");
    }

    #[test]
    fn test_draft_omits_empty_skills() {
        let draft = TicketDraft {
            title: "T".to_string(),
            description: "D".to_string(),
            deadline: "2025-01-01".to_string(),
            skills: vec![],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("skills").is_none());
    }
}
