mod account_connections;
mod actions;
mod agents;
mod calls;
mod numbers;
mod prompts;
mod usage;
mod vector_databases;
mod voices;
mod webhooks;

pub use account_connections::AccountConnections;
pub use actions::Actions;
pub use agents::Agents;
pub use calls::Calls;
pub use numbers::Numbers;
pub use prompts::Prompts;
pub use usage::UsageResource;
pub use vector_databases::VectorDatabases;
pub use voices::Voices;
pub use webhooks::Webhooks;
