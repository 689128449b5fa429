//! Joke fetching
//!
//! A stateless fetcher for the hosted chat-completion endpoint, the wire types
//! it speaks, and a worker that runs it off the UI thread.

pub mod fetcher;
pub mod types;
pub mod worker;

pub use fetcher::{
    parse_reply, ChatCall, HttpReply, HttpTransport, JokeFetcher, Transport, GENERIC_API_ERROR,
    NO_JOKE_FALLBACK,
};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};
pub use worker::{JokeEvent, JokeWorker, RepaintHook};
