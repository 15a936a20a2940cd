//! Backend API service contract.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    Stream,
};

use super::types::{
    BootConfig, CommandResult, FileNode, GameResponse, ProcessInfo, TerminalContext,
};

/// Object-safe boxed future used by [`WebOsApi`] async methods.
pub type WebOsApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the desktop backend.
///
/// Every method reports transport and non-2xx failures as `Err` with a readable message.
pub trait WebOsApi {
    /// `GET /system/boot`
    fn boot_config<'a>(&'a self) -> WebOsApiFuture<'a, Result<BootConfig, String>>;

    /// `GET /file-nodes?parentId=`
    fn list_nodes<'a>(
        &'a self,
        parent_id: &'a str,
    ) -> WebOsApiFuture<'a, Result<Vec<FileNode>, String>>;

    /// `GET /file-nodes/{id}`
    fn fetch_node<'a>(&'a self, id: &'a str) -> WebOsApiFuture<'a, Result<FileNode, String>>;

    /// `POST /file-nodes` for a directory.
    fn create_directory<'a>(
        &'a self,
        parent_id: &'a str,
        name: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>>;

    /// `POST /file-nodes` for an empty file.
    fn create_file<'a>(
        &'a self,
        parent_id: &'a str,
        name: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>>;

    /// `PUT /file-nodes/{id}/content`
    fn update_content<'a>(
        &'a self,
        id: &'a str,
        content: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>>;

    /// `DELETE /file-nodes/{id}`
    fn delete_node<'a>(&'a self, id: &'a str) -> WebOsApiFuture<'a, Result<(), String>>;

    /// `POST /terminal/exec`
    fn execute_command<'a>(
        &'a self,
        command: &'a str,
    ) -> WebOsApiFuture<'a, Result<CommandResult, String>>;

    /// `GET /terminal/context`
    fn terminal_context<'a>(&'a self) -> WebOsApiFuture<'a, Result<TerminalContext, String>>;

    /// `GET /terminal/autocomplete?input=`, returning the suggestion list.
    fn autocomplete<'a>(
        &'a self,
        input: &'a str,
    ) -> WebOsApiFuture<'a, Result<Vec<String>, String>>;

    /// `POST /compiler/execute`, returning the output text.
    fn execute_code<'a>(&'a self, code: &'a str) -> WebOsApiFuture<'a, Result<String, String>>;

    /// `POST /games/minesweeper/new`
    fn minesweeper_new<'a>(
        &'a self,
        session_id: &'a str,
    ) -> WebOsApiFuture<'a, Result<GameResponse, String>>;

    /// `POST /games/minesweeper/click`
    fn minesweeper_click<'a>(
        &'a self,
        session_id: &'a str,
        row: u8,
        col: u8,
    ) -> WebOsApiFuture<'a, Result<GameResponse, String>>;

    /// Opens the `/processes` event stream.
    ///
    /// # Errors
    ///
    /// Returns an error when the stream cannot be opened on this host.
    fn subscribe_processes(&self) -> Result<ProcessSubscription, String>;
}

/// Live process-list stream. Dropping the subscription closes the underlying connection.
pub struct ProcessSubscription {
    receiver: UnboundedReceiver<Vec<ProcessInfo>>,
    on_close: Option<Box<dyn FnOnce()>>,
}

impl ProcessSubscription {
    /// Wraps a receiver fed by a host event source. `on_close` runs once on drop.
    pub fn new(
        receiver: UnboundedReceiver<Vec<ProcessInfo>>,
        on_close: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            receiver,
            on_close: Some(Box::new(on_close)),
        }
    }

    /// Creates a subscription fed through the returned sender. `on_close` runs once on drop.
    pub fn channel(
        on_close: impl FnOnce() + 'static,
    ) -> (UnboundedSender<Vec<ProcessInfo>>, Self) {
        let (sender, receiver) = mpsc::unbounded();
        (sender, Self::new(receiver, on_close))
    }

    /// A subscription that ends without yielding.
    pub fn empty() -> Self {
        let (_sender, receiver) = mpsc::unbounded();
        Self {
            receiver,
            on_close: None,
        }
    }
}

impl Stream for ProcessSubscription {
    type Item = Vec<ProcessInfo>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

impl Drop for ProcessSubscription {
    fn drop(&mut self) {
        self.receiver.close();
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
    }
}

impl std::fmt::Debug for ProcessSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessSubscription")
            .field("open", &self.on_close.is_some())
            .finish()
    }
}

const UNAVAILABLE: &str = "backend unavailable";

#[derive(Debug, Clone, Copy, Default)]
/// Backend stand-in for hosts without network access. Every call fails, which drives the
/// desktop into its demo content.
pub struct NoopWebOsApi;

impl WebOsApi for NoopWebOsApi {
    fn boot_config<'a>(&'a self) -> WebOsApiFuture<'a, Result<BootConfig, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn list_nodes<'a>(
        &'a self,
        _parent_id: &'a str,
    ) -> WebOsApiFuture<'a, Result<Vec<FileNode>, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn fetch_node<'a>(&'a self, _id: &'a str) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn create_directory<'a>(
        &'a self,
        _parent_id: &'a str,
        _name: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn create_file<'a>(
        &'a self,
        _parent_id: &'a str,
        _name: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn update_content<'a>(
        &'a self,
        _id: &'a str,
        _content: &'a str,
    ) -> WebOsApiFuture<'a, Result<FileNode, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn delete_node<'a>(&'a self, _id: &'a str) -> WebOsApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn execute_command<'a>(
        &'a self,
        _command: &'a str,
    ) -> WebOsApiFuture<'a, Result<CommandResult, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn terminal_context<'a>(&'a self) -> WebOsApiFuture<'a, Result<TerminalContext, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn autocomplete<'a>(
        &'a self,
        _input: &'a str,
    ) -> WebOsApiFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn execute_code<'a>(&'a self, _code: &'a str) -> WebOsApiFuture<'a, Result<String, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn minesweeper_new<'a>(
        &'a self,
        _session_id: &'a str,
    ) -> WebOsApiFuture<'a, Result<GameResponse, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn minesweeper_click<'a>(
        &'a self,
        _session_id: &'a str,
        _row: u8,
        _col: u8,
    ) -> WebOsApiFuture<'a, Result<GameResponse, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn subscribe_processes(&self) -> Result<ProcessSubscription, String> {
        Ok(ProcessSubscription::empty())
    }
}
