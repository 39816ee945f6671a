use crate::domain::shared::{
    errors::DomainError,
    validation::{self, Field},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw request payload for creating a thread.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddThreadPayload {
    pub title: Field,
    pub body: Field,
    pub owner: Field,
}

/// Validated thread creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    title: String,
    body: String,
    owner: String,
}

impl AddThread {
    const ENTITY: &'static str = "ADD_THREAD";

    pub fn new(payload: AddThreadPayload) -> Result<Self, DomainError> {
        validation::ensure_present(
            Self::ENTITY,
            &[&payload.title, &payload.body, &payload.owner],
        )?;

        Ok(Self {
            title: validation::into_text(Self::ENTITY, payload.title)?,
            body: validation::into_text(Self::ENTITY, payload.body)?,
            owner: validation::into_text(Self::ENTITY, payload.owner)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// A stored thread together with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
