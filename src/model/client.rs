use chrono::{DateTime, Utc};
use counseldesk_macros::Record;
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Whether the firm is currently working for a client.
    pub enum ClientStatus("client status", default = Active) {
        Active => "active",
        Inactive => "inactive",
    }
}

impl ClientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "clients")]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ClientStatus,
}

impl Client {
    /// A new active client with empty contact details, created now.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Client {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            company: None,
            created_at: Utc::now(),
            status: ClientStatus::default(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = status;
        self
    }
}

/// Field-scoped update for a [`Client`]. See [`CasePatch`](crate::CasePatch).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<Option<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub status: Option<ClientStatus>,
}

impl ClientPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(Some(company.into()));
        self
    }

    pub fn clear_company(mut self) -> Self {
        self.company = Some(None);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn status(mut self, status: ClientStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        if self.phone.is_some() {
            fields.push("phone");
        }
        if self.company.is_some() {
            fields.push("company");
        }
        if self.created_at.is_some() {
            fields.push("createdAt");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        fields
    }

    pub fn apply(&self, client: &mut Client) {
        if let Some(name) = &self.name {
            client.name = name.clone();
        }
        if let Some(email) = &self.email {
            client.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            client.phone = phone.clone();
        }
        if let Some(company) = &self.company {
            client.company = company.clone();
        }
        if let Some(created_at) = self.created_at {
            client.created_at = created_at;
        }
        if let Some(status) = self.status {
            client.status = status;
        }
    }
}
