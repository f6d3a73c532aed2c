//! Test doubles for the transport collaborators.

mod chat_client;
mod message;
mod resolver;
mod world;

use std::future::Future;

pub use chat_client::{ClientCall, RecordingChatClient};
pub use message::FakeMessage;
pub use resolver::{MockResolver, StaticResolver};
pub use world::{DispatchWorld, RecordingHandler, all_definition, log_definition};

/// Drives `future` to completion on a fresh current-thread runtime.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build test runtime")
        .block_on(future)
}
