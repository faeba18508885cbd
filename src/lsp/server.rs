use super::convert::{self, PositionEncoding};
use super::error::{Result, ServerError};
use crate::kernel::batch::type_through::{pair_insertion, OPENING_CHARS};
use crate::kernel::services::ports::{Environment, Settings};
use crate::kernel::{
    complete, quick_info, CompletionRequest, Document, LanguageId, QuickInfoRequest,
};
use lsp_server::{Connection, ErrorCode, Message, Notification, Request, RequestId, Response};
use lsp_types::notification::Notification as _;
use lsp_types::request::Request as _;
use lsp_types::{
    CompletionOptions, DocumentOnTypeFormattingOptions, HoverProviderCapability,
    InitializeParams, InitializeResult, SemanticTokens, SemanticTokensFullOptions,
    SemanticTokensOptions, SemanticTokensRangeResult, SemanticTokensResult,
    SemanticTokensServerCapabilities, ServerCapabilities, ServerInfo, TextDocumentSyncCapability,
    TextDocumentSyncKind, TextEdit, Url, WorkDoneProgressOptions,
};
use rustc_hash::FxHashMap;
use serde_json::Value;

pub const COMPLETION_TRIGGER_CHARS: [&str; 2] = ["%", "@"];

/// Runs the handshake and the message loop until `shutdown`/`exit` or disconnect.
///
/// `settings` are the file-based settings; `initializationOptions` replace them when present.
pub fn serve<E: Environment>(connection: Connection, settings: Settings, env: E) -> Result<()> {
    let (id, params) = connection.initialize_start()?;
    let params: InitializeParams = serde_json::from_value(params)?;

    let settings = settings_from_initialize(&params, settings);
    let encoding = PositionEncoding::negotiate(
        params
            .capabilities
            .general
            .as_ref()
            .and_then(|general| general.position_encodings.as_deref()),
    );

    let result = InitializeResult {
        capabilities: server_capabilities(encoding, &settings),
        server_info: Some(ServerInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    };
    connection.initialize_finish(id, serde_json::to_value(result)?)?;
    tracing::info!(?encoding, "initialized");

    let mut server = Server::new(settings, env, encoding);
    server.run(&connection)
}

fn settings_from_initialize(params: &InitializeParams, fallback: Settings) -> Settings {
    let Some(options) = params.initialization_options.clone() else {
        return fallback;
    };
    match serde_json::from_value::<Settings>(options) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid initializationOptions");
            fallback
        }
    }
}

pub fn server_capabilities(encoding: PositionEncoding, settings: &Settings) -> ServerCapabilities {
    let on_type_formatting = settings.type_through.enabled.then(|| {
        let mut triggers = OPENING_CHARS.iter().map(|ch| ch.to_string());
        DocumentOnTypeFormattingOptions {
            first_trigger_character: triggers.next().unwrap_or_default(),
            more_trigger_character: Some(triggers.collect()),
        }
    });

    ServerCapabilities {
        position_encoding: Some(encoding.to_lsp_kind()),
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::INCREMENTAL,
        )),
        hover_provider: Some(HoverProviderCapability::Simple(true)),
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(
                COMPLETION_TRIGGER_CHARS
                    .iter()
                    .map(|ch| ch.to_string())
                    .collect(),
            ),
            ..Default::default()
        }),
        semantic_tokens_provider: Some(
            SemanticTokensServerCapabilities::SemanticTokensOptions(SemanticTokensOptions {
                work_done_progress_options: WorkDoneProgressOptions::default(),
                legend: convert::semantic_tokens_legend(),
                range: Some(true),
                full: Some(SemanticTokensFullOptions::Bool(true)),
            }),
        ),
        document_on_type_formatting_provider: on_type_formatting,
        ..Default::default()
    }
}

pub struct Server<E> {
    settings: Settings,
    env: E,
    encoding: PositionEncoding,
    documents: FxHashMap<Url, Document>,
}

impl<E: Environment> Server<E> {
    pub fn new(settings: Settings, env: E, encoding: PositionEncoding) -> Self {
        Self {
            settings,
            env,
            encoding,
            documents: FxHashMap::default(),
        }
    }

    pub fn document(&self, uri: &Url) -> Option<&Document> {
        self.documents.get(uri)
    }

    fn run(&mut self, connection: &Connection) -> Result<()> {
        for msg in &connection.receiver {
            match msg {
                Message::Request(req) => {
                    if connection.handle_shutdown(&req)? {
                        tracing::info!("shutdown");
                        return Ok(());
                    }
                    let resp = self.handle_request(req);
                    connection
                        .sender
                        .send(Message::Response(resp))
                        .map_err(|_| ServerError::Disconnected)?;
                }
                Message::Notification(not) => {
                    if not.method == lsp_types::notification::Exit::METHOD {
                        tracing::warn!("exit without shutdown");
                        return Ok(());
                    }
                    self.handle_notification(not);
                }
                Message::Response(_) => {}
            }
        }
        Err(ServerError::Disconnected)
    }

    pub fn handle_request(&self, req: Request) -> Response {
        tracing::debug!(method = %req.method, id = ?req.id, "request");
        match req.method.as_str() {
            m if m == lsp_types::request::HoverRequest::METHOD => {
                dispatch::<lsp_types::request::HoverRequest>(req.id, req.params, |params| {
                    let position = params.text_document_position_params;
                    let document = self.documents.get(&position.text_document.uri)?;
                    let offset =
                        convert::position_to_offset(document, position.position, self.encoding);
                    let info = quick_info(
                        QuickInfoRequest {
                            document,
                            position: offset,
                        },
                        &self.env,
                        &self.settings.quick_info,
                    )?;
                    Some(convert::hover(document, info, self.encoding))
                })
            }
            m if m == lsp_types::request::Completion::METHOD => {
                dispatch::<lsp_types::request::Completion>(req.id, req.params, |params| {
                    let position = params.text_document_position;
                    let document = self.documents.get(&position.text_document.uri)?;
                    let caret =
                        convert::position_to_offset(document, position.position, self.encoding);
                    let set = complete(
                        CompletionRequest { document, caret },
                        &self.env,
                        &self.settings.completion,
                    )?;
                    tracing::trace!(items = set.items.len(), "completion");
                    Some(convert::completion_response(document, &set, self.encoding))
                })
            }
            m if m == lsp_types::request::SemanticTokensFullRequest::METHOD => {
                dispatch::<lsp_types::request::SemanticTokensFullRequest>(
                    req.id,
                    req.params,
                    |params| {
                        let document = self.documents.get(&params.text_document.uri)?;
                        let data = convert::semantic_tokens(
                            document,
                            0..document.line_count(),
                            self.encoding,
                        );
                        Some(SemanticTokensResult::Tokens(SemanticTokens {
                            result_id: None,
                            data,
                        }))
                    },
                )
            }
            m if m == lsp_types::request::SemanticTokensRangeRequest::METHOD => {
                dispatch::<lsp_types::request::SemanticTokensRangeRequest>(
                    req.id,
                    req.params,
                    |params| {
                        let document = self.documents.get(&params.text_document.uri)?;
                        let lines = params.range.start.line as usize
                            ..params.range.end.line as usize + 1;
                        let data = convert::semantic_tokens(document, lines, self.encoding);
                        Some(SemanticTokensRangeResult::Tokens(SemanticTokens {
                            result_id: None,
                            data,
                        }))
                    },
                )
            }
            m if m == lsp_types::request::OnTypeFormatting::METHOD => {
                dispatch::<lsp_types::request::OnTypeFormatting>(req.id, req.params, |params| {
                    if !self.settings.type_through.enabled {
                        return None;
                    }
                    let position = params.text_document_position;
                    let document = self.documents.get(&position.text_document.uri)?;
                    let typed = params.ch.chars().next()?;
                    let offset =
                        convert::position_to_offset(document, position.position, self.encoding);
                    let (at, close) = pair_insertion(document, offset, typed)?;
                    let at = convert::offset_to_position(document, at, self.encoding);
                    Some(vec![TextEdit::new(
                        lsp_types::Range::new(at, at),
                        close.to_string(),
                    )])
                })
            }
            _ => Response::new_err(
                req.id,
                ErrorCode::MethodNotFound as i32,
                format!("unhandled method: {}", req.method),
            ),
        }
    }

    pub fn handle_notification(&mut self, not: Notification) {
        tracing::debug!(method = %not.method, "notification");
        match not.method.as_str() {
            m if m == lsp_types::notification::DidOpenTextDocument::METHOD => {
                let Some(params) =
                    parse_notification::<lsp_types::notification::DidOpenTextDocument>(not.params)
                else {
                    return;
                };
                let doc = params.text_document;
                if !is_batch_document(&doc.uri, &doc.language_id) {
                    tracing::debug!(uri = %doc.uri, language = %doc.language_id, "ignoring non-batch document");
                    return;
                }
                self.documents.insert(doc.uri, Document::new(&doc.text));
            }
            m if m == lsp_types::notification::DidChangeTextDocument::METHOD => {
                let Some(params) = parse_notification::<
                    lsp_types::notification::DidChangeTextDocument,
                >(not.params) else {
                    return;
                };
                let Some(document) = self.documents.get_mut(&params.text_document.uri) else {
                    tracing::warn!(uri = %params.text_document.uri, "change for unknown document");
                    return;
                };
                for change in params.content_changes {
                    match change.range {
                        Some(range) => {
                            let range = convert::range_to_offsets(document, range, self.encoding);
                            document.replace(range, &change.text);
                        }
                        None => document.set_text(&change.text),
                    }
                }
            }
            m if m == lsp_types::notification::DidCloseTextDocument::METHOD => {
                if let Some(params) =
                    parse_notification::<lsp_types::notification::DidCloseTextDocument>(not.params)
                {
                    self.documents.remove(&params.text_document.uri);
                }
            }
            _ => {}
        }
    }
}

fn is_batch_document(uri: &Url, language_id: &str) -> bool {
    language_id == LanguageId::Batch.language_id()
        || uri
            .to_file_path()
            .ok()
            .and_then(|path| LanguageId::from_path(&path))
            .is_some()
}

fn dispatch<R>(id: RequestId, params: Value, handle: impl FnOnce(R::Params) -> R::Result) -> Response
where
    R: lsp_types::request::Request,
{
    match serde_json::from_value::<R::Params>(params) {
        Ok(params) => Response::new_ok(id, handle(params)),
        Err(err) => {
            tracing::warn!(method = R::METHOD, error = %err, "invalid params");
            Response::new_err(id, ErrorCode::InvalidParams as i32, err.to_string())
        }
    }
}

fn parse_notification<N>(params: Value) -> Option<N::Params>
where
    N: lsp_types::notification::Notification,
{
    match serde_json::from_value::<N::Params>(params) {
        Ok(params) => Some(params),
        Err(err) => {
            tracing::warn!(method = N::METHOD, error = %err, "invalid params");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lsp/server.rs"]
mod tests;
