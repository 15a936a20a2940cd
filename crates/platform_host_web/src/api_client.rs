//! `fetch`/`EventSource` implementation of [`platform_host::WebOsApi`].

use futures::channel::mpsc;
use platform_host::{
    ApiConfig, AutocompleteResponse, BootConfig, CommandResult, CreateNodeRequest, Endpoint,
    ExecuteCommandRequest, ExecutionRequest, ExecutionResult, FileNode, GameResponse,
    MinesweeperClickRequest, MinesweeperNewRequest, ProcessInfo, ProcessSubscription,
    TerminalContext, UpdateContentRequest, WebOsApi, WebOsApiFuture,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::bridge;

/// Named server-sent event carrying the process list.
pub const PROCESSES_EVENT: &str = "processes";

#[derive(Debug, Clone, Default)]
/// Browser backend client rooted at an [`ApiConfig`] base URL.
pub struct HttpWebOsApi {
    config: ApiConfig,
}

impl HttpWebOsApi {
    /// Creates a client for `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Backend location used by this client.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, endpoint: &Endpoint<'_>) -> String {
        self.config.url_for(endpoint, bridge::encode_component)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, String> {
        bridge::fetch_json(
            endpoint.method(),
            &self.url(&endpoint),
            None,
            endpoint.operation(),
        )
        .await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<T, String> {
        let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
        bridge::fetch_json(
            endpoint.method(),
            &self.url(&endpoint),
            Some(body),
            endpoint.operation(),
        )
        .await
    }
}

impl WebOsApi for HttpWebOsApi {
    fn boot_config<'a>(&'a self) -> WebOsApiFuture<'a, Result<BootConfig, String>> {
        Box::pin(self.get(Endpoint::BootConfig))
    }

    fn list_nodes<'a>(
        &'a self,
        parent_id: &'a str,
    ) -> WebOsApiFuture<'a, Result<Vec<FileNode>, String>> {
        Box::pin(self.get(Endpoint::ListNodes { parent_id }))
    }

    fn fetch_node<'a>(&'a self, id: &'a str) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(self.get(Endpoint::Node { id }))
    }

    fn create_directory<'a>(
        &'a self,
        parent_id: &'a str,
        name: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(async move {
            self.send(
                Endpoint::CreateNode,
                &CreateNodeRequest::directory(parent_id, name),
            )
            .await
        })
    }

    fn create_file<'a>(
        &'a self,
        parent_id: &'a str,
        name: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(async move {
            self.send(Endpoint::CreateNode, &CreateNodeRequest::file(parent_id, name))
                .await
        })
    }

    fn update_content<'a>(
        &'a self,
        id: &'a str,
        content: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(async move {
            let body = UpdateContentRequest {
                content: content.to_string(),
            };
            self.send(Endpoint::UpdateContent { id }, &body).await
        })
    }

    fn delete_node<'a>(&'a self, id: &'a str) -> WebOsApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let endpoint = Endpoint::DeleteNode { id };
            bridge::fetch_unit(endpoint.method(), &self.url(&endpoint), endpoint.operation())
                .await
        })
    }

    fn execute_command<'a>(
        &'a self,
        command: &'a str,
    ) -> WebOsApiFuture<'a, Result<CommandResult, String>> {
        Box::pin(async move {
            let body = ExecuteCommandRequest {
                command: command.to_string(),
            };
            self.send(Endpoint::ExecuteCommand, &body).await
        })
    }

    fn terminal_context<'a>(&'a self) -> WebOsApiFuture<'a, Result<TerminalContext, String>> {
        Box::pin(self.get(Endpoint::TerminalContext))
    }

    fn autocomplete<'a>(
        &'a self,
        input: &'a str,
    ) -> WebOsApiFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async move {
            let response: AutocompleteResponse =
                self.get(Endpoint::Autocomplete { input }).await?;
            Ok(response.suggestions)
        })
    }

    fn execute_code<'a>(&'a self, code: &'a str) -> WebOsApiFuture<'a, Result<String, String>> {
        Box::pin(async move {
            let body = ExecutionRequest {
                code: code.to_string(),
            };
            let result: ExecutionResult = self.send(Endpoint::ExecuteCode, &body).await?;
            Ok(result.output)
        })
    }

    fn minesweeper_new<'a>(
        &'a self,
        session_id: &'a str,
    ) -> WebOsApiFuture<'a, Result<GameResponse, String>> {
        Box::pin(async move {
            let body = MinesweeperNewRequest {
                session_id: session_id.to_string(),
            };
            self.send(Endpoint::MinesweeperNew, &body).await
        })
    }

    fn minesweeper_click<'a>(
        &'a self,
        session_id: &'a str,
        row: u8,
        col: u8,
    ) -> WebOsApiFuture<'a, Result<GameResponse, String>> {
        Box::pin(async move {
            let body = MinesweeperClickRequest {
                session_id: session_id.to_string(),
                row,
                col,
            };
            self.send(Endpoint::MinesweeperClick, &body).await
        })
    }

    fn subscribe_processes(&self) -> Result<ProcessSubscription, String> {
        let (sender, receiver) = mpsc::unbounded();
        let close = bridge::open_event_source(
            &self.url(&Endpoint::Processes),
            PROCESSES_EVENT,
            Box::new(move |data| {
                if let Ok(rows) = serde_json::from_str::<Vec<ProcessInfo>>(&data) {
                    let _ = sender.unbounded_send(rows);
                }
            }),
        )?;
        Ok(ProcessSubscription::new(receiver, close))
    }
}
