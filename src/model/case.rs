use chrono::{DateTime, Utc};
use counseldesk_macros::Record;
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Lifecycle state of a case.
    pub enum CaseStatus("case status", default = Open) {
        Open => "open",
        InReview => "in-review",
        Closed => "closed",
        Pending => "pending",
    }
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::InReview => "In Review",
            CaseStatus::Closed => "Closed",
            CaseStatus::Pending => "Pending",
        }
    }
}

closed_enum! {
    /// How urgently a case needs attention.
    pub enum Priority("priority", default = Medium) {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        }
    }
}

/// A legal matter handled for a client.
///
/// `client_id` is a soft reference: nothing checks that the client exists,
/// and display code resolves a dangling id to a fallback label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "cases")]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub client_id: String,
    pub assigned_to: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// A new open, medium-priority case stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Case {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: CaseStatus::default(),
            priority: Priority::default(),
            client_id: client_id.into(),
            assigned_to: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }
}

/// Field-scoped update for a [`Case`].
///
/// Only the fields that are `Some` are written by [`CasePatch::apply`]; the
/// id is not patchable. `assigned_to` is doubly optional so a patch can clear
/// the assignee with `Some(None)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CasePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub client_id: Option<String>,
    pub assigned_to: Option<Option<String>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CasePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: CaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn assign(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(Some(assignee.into()));
        self
    }

    pub fn unassign(mut self) -> Self {
        self.assigned_to = Some(None);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Names of the fields this patch sets.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        if self.client_id.is_some() {
            fields.push("clientId");
        }
        if self.assigned_to.is_some() {
            fields.push("assignedTo");
        }
        if self.updated_at.is_some() {
            fields.push("updatedAt");
        }
        fields
    }

    pub fn apply(&self, case: &mut Case) {
        if let Some(title) = &self.title {
            case.title = title.clone();
        }
        if let Some(description) = &self.description {
            case.description = description.clone();
        }
        if let Some(status) = self.status {
            case.status = status;
        }
        if let Some(priority) = self.priority {
            case.priority = priority;
        }
        if let Some(client_id) = &self.client_id {
            case.client_id = client_id.clone();
        }
        if let Some(assigned_to) = &self.assigned_to {
            case.assigned_to = assigned_to.clone();
        }
        if let Some(updated_at) = self.updated_at {
            case.updated_at = updated_at;
        }
    }
}
