//! Gemini note generator
//!
//! Generation is a three step exchange with the Generative Language API:
//! a resumable upload of the PDF, a `generateContent` call constrained to the
//! template's JSON schema, then deletion of the uploaded file.

use std::collections::BTreeMap;

use ankillm_core::prelude::*;
use ankillm_core::{Note, NoteTemplate};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::document::{Document, PDF_MIME_TYPE};
use crate::schema::response_schema;
use crate::NoteGenerator;

/// Public Generative Language API host
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when neither config nor environment name one
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

const PROMPT: &str = include_str!("prompt.txt");

const API_KEY_HEADER: &str = "x-goog-api-key";
const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    file: UploadedFile,
}

#[derive(Debug, Clone, Deserialize)]
struct UploadedFile {
    name: String,
    uri: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Google Gemini backed [`NoteGenerator`]
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, config: GeminiConfig) -> Result<Self> {
        // Url::join drops the last segment unless the base ends with '/'
        let mut base = config.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| Error::config(format!("invalid Gemini base url {base:?}: {e}")))?;

        Ok(Self {
            http,
            api_key: config.api_key,
            model: config.model,
            base_url,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::llm(format!("invalid endpoint {path:?}: {e}")))
    }

    /// Upload the document and generate notes from it. The uploaded file is
    /// removed afterwards whether or not generation succeeded.
    pub async fn generate_notes(
        &self,
        document: Document,
        template: NoteTemplate,
    ) -> Result<Vec<Note>> {
        let file = self
            .upload(document)
            .await
            .map_err(|e| Error::llm(format!("failed to upload file: {e}")))?;
        debug!("Uploaded {} as {}", file.uri, file.name);

        let result = self.generate_content(&file, template).await;

        if let Err(e) = self.delete(&file).await {
            warn!("Failed to delete uploaded file {}: {}", file.name, e);
        }

        let notes = result?;
        info!("Generated {} notes with {}", notes.len(), self.model);
        Ok(notes)
    }

    async fn upload(&self, document: Document) -> Result<UploadedFile> {
        let start = self
            .http
            .post(self.endpoint("upload/v1beta/files")?)
            .header(API_KEY_HEADER, &self.api_key)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header(
                "X-Goog-Upload-Header-Content-Length",
                document.bytes.len().to_string(),
            )
            .header("X-Goog-Upload-Header-Content-Type", PDF_MIME_TYPE)
            .json(&json!({ "file": { "display_name": document.display_name } }))
            .send()
            .await
            .map_err(http_error)?;
        let start = check_status(start).await?;

        let upload_url = start
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| Error::llm("upload session missing upload url"))?;

        let finished = self
            .http
            .post(upload_url)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(document.bytes)
            .send()
            .await
            .map_err(http_error)?;

        let uploaded: UploadResponse = check_status(finished)
            .await?
            .json()
            .await
            .map_err(http_error)?;
        Ok(uploaded.file)
    }

    async fn generate_content(
        &self,
        file: &UploadedFile,
        template: NoteTemplate,
    ) -> Result<Vec<Note>> {
        let body = json!({
            "contents": [{
                "parts": [
                    { "text": PROMPT },
                    { "file_data": { "mime_type": PDF_MIME_TYPE, "file_uri": file.uri } }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(template),
            }
        });

        let path = format!("v1beta/models/{}:generateContent", self.model);
        let response = self
            .http
            .post(self.endpoint(&path)?)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(http_error)
            .map_err(generate_error)?;

        let response: GenerateResponse = check_status(response)
            .await
            .map_err(generate_error)?
            .json()
            .await
            .map_err(http_error)
            .map_err(generate_error)?;

        parse_notes(response)
    }

    async fn delete(&self, file: &UploadedFile) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("v1beta/{}", file.name))?)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(http_error)?;
        check_status(response).await?;
        Ok(())
    }
}

impl NoteGenerator for GeminiClient {
    fn generate(
        &self,
        document: Document,
        template: NoteTemplate,
    ) -> BoxFuture<'_, Result<Vec<Note>>> {
        self.generate_notes(document, template).boxed()
    }
}

fn parse_notes(response: GenerateResponse) -> Result<Vec<Note>> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::llm("no candidates in response"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let raw: Vec<BTreeMap<String, String>> = serde_json::from_str(&text)
        .map_err(|e| Error::llm(format!("failed to parse generated notes: {e}")))?;

    Ok(raw.into_iter().map(Note::from_fields).collect())
}

fn http_error(e: reqwest::Error) -> Error {
    Error::llm(e.to_string())
}

fn generate_error(e: Error) -> Error {
    Error::llm(format!("failed to generate anki card content: {e}"))
}

/// Turn a non-2xx response into an error carrying the API's own message
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(body);

    Err(Error::llm(format!("{status}: {message}")))
}
