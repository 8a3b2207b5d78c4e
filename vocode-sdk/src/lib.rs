//! Vocode SDK for Rust
//!
//! A Rust client library for the Vocode voice AI REST API: agents, voices,
//! actions, calls, phone numbers, prompts, webhooks, vector databases,
//! account connections and usage.
//!
//! # Example
//!
//! ```no_run
//! use vocode_sdk::Client;
//! use vocode_sdk::types::CallParams;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client using the VOCODE_API_KEY environment variable
//! let client = Client::from_env()?;
//!
//! // Start an outbound call
//! let call = client
//!     .calls()
//!     .create(CallParams::new("+15550100", "+15550111", "agent-id"))
//!     .await?;
//!
//! println!("call {} is {:?}", call.id, call.status);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod pagination;
pub mod resources;
pub mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::ApiErrorBody;
pub use error::ApiErrorDetail;
pub use error::ParamViolation;
pub use error::Result;
pub use error::VocodeError;
pub use pagination::Page;
pub use pagination::PageParams;
pub use pagination::Sort;
