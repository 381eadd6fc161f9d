mod app;
mod llm;
mod network;

pub use app::{AppConfig, CommitConfig, UIConfig};
pub use llm::{ApiStyle, LLMConfig, ProviderConfig, ResolvedProvider};
pub use network::NetworkConfig;
