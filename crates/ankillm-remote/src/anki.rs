//! AnkiConnect client
//!
//! Every call is a JSON POST to a single endpoint carrying
//! `{action, version, params?}` and answered with `{result, error}`.

use std::collections::BTreeMap;

use ankillm_core::prelude::*;
use ankillm_core::{NoteFields, NoteTemplate};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::DeckService;

/// Where the AnkiConnect add-on listens by default
pub const DEFAULT_ANKI_URL: &str = "http://localhost:8765";

const API_VERSION: u8 = 6;

#[derive(Debug, Serialize)]
struct ApiRequest<'a, P: Serialize> {
    action: &'a str,
    version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<P>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotePayload<'a> {
    deck_name: &'a str,
    model_name: &'a str,
    fields: &'a NoteFields,
    tags: &'a [String],
    options: BTreeMap<&'static str, bool>,
}

/// HTTP client for the AnkiConnect add-on
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http: reqwest::Client,
    endpoint: Url,
    tags: Vec<String>,
}

impl AnkiClient {
    pub fn new(http: reqwest::Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::config(format!("invalid AnkiConnect url {endpoint:?}: {e}")))?;
        Ok(Self {
            http,
            endpoint,
            tags: Vec::new(),
        })
    }

    /// Tags attached to every submitted note
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn invoke<P, T>(&self, action: &str, params: Option<P>) -> Result<Option<T>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = ApiRequest {
            action,
            version: API_VERSION,
            params,
        };
        trace!("AnkiConnect -> {}", action);

        let response: ApiResponse<T> = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::anki(format!("failed to send request: {e}")))?
            .json()
            .await
            .map_err(|e| Error::anki(format!("failed to read response: {e}")))?;

        match response.error {
            Some(message) if !message.is_empty() => {
                Err(Error::anki(format!("error from AnkiConnect: {message}")))
            }
            _ => Ok(response.result),
        }
    }

    pub async fn create_deck(&self, name: &str) -> Result<()> {
        let params = serde_json::json!({ "deck": name });
        self.invoke::<_, serde_json::Value>("createDeck", Some(params))
            .await
            .map_err(|e| Error::anki(format!("failed to create deck: {e}")))?;
        info!("Deck '{}' created", name);
        Ok(())
    }

    pub async fn deck_names(&self) -> Result<Vec<String>> {
        let names = self
            .invoke::<(), Vec<String>>("deckNames", None)
            .await
            .map_err(|e| Error::anki(format!("failed to get deck names: {e}")))?;
        Ok(names.unwrap_or_default())
    }

    pub async fn add_notes(
        &self,
        deck: &str,
        template: NoteTemplate,
        notes: &[NoteFields],
    ) -> Result<()> {
        let payload: Vec<NotePayload<'_>> = notes
            .iter()
            .map(|fields| NotePayload {
                deck_name: deck,
                model_name: template.name(),
                fields,
                tags: &self.tags,
                options: BTreeMap::from([("allowDuplicate", false)]),
            })
            .collect();

        let params = serde_json::json!({ "notes": payload });
        self.invoke::<_, serde_json::Value>("addNotes", Some(params))
            .await
            .map_err(|e| Error::anki(format!("failed to add notes: {e}")))?;
        info!("Added {} notes to '{}'", notes.len(), deck);
        Ok(())
    }
}

impl DeckService for AnkiClient {
    fn create_deck<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<()>> {
        AnkiClient::create_deck(self, name).boxed()
    }

    fn deck_names(&self) -> BoxFuture<'_, Result<Vec<String>>> {
        AnkiClient::deck_names(self).boxed()
    }

    fn add_notes<'a>(
        &'a self,
        deck: &'a str,
        template: NoteTemplate,
        notes: &'a [NoteFields],
    ) -> BoxFuture<'a, Result<()>> {
        AnkiClient::add_notes(self, deck, template, notes).boxed()
    }
}
