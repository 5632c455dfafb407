//! Public SDK for the edge streaming SSR platform.
//!
//! This crate re-exports all platform functionality:
//!
//! ```ignore
//! use edge_sdk::prelude::*;
//!
//! let ctx = RequestContext::from_path_with_query(Method::Get, "/catalog?q=red");
//! let logger = StructuredLogger::new(ctx.request_id.clone());
//! logger.info_builder("Handling request").field("view", "catalog").emit();
//!
//! sink.send_shell(&shell.render_opening()).await?;
//!
//! let mut client = FetchClient::new(ctx.request_id.clone(), ctx.timing.clone());
//! let data: MyData = client.fetch(url, DependencyTag::Catalog).await?;
//!
//! sink.send_section("content", &render(&data)).await?;
//! sink.send_closing(shell.render_closing()).await?;
//! ```

pub use edge_core;
pub use edge_data;
pub use edge_observability;
pub use edge_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use edge_core::*;
    pub use edge_data::*;
    pub use edge_observability::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
    pub use edge_streaming::*;
}
