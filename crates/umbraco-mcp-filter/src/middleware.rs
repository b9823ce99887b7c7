//! Tool handler middleware.
//!
//! Handlers receive their API client through [`ToolContext`] rather than a
//! process-wide global, so concurrent tenants never share a client.
//!
//! A [`Pipeline`] wraps a handler in an ordered list of middleware. The first
//! middleware added is the outermost: it runs first when the tool is called
//! and sees the final result last.
//!
//! ```ignore
//! let handler = Pipeline::new()
//!     .layer(ErrorHandling)
//!     .layer(PreExecutionCheck::new(|ctx, _args| ensure_allowed(ctx)))
//!     .build(Arc::new(GetDocument));
//!
//! let output = handler.call(&ctx, json!({ "id": "..." })).await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HandlerError;

/// Per-call context with the injected API client.
#[derive(Debug)]
pub struct ToolContext<C> {
    pub tool_name: String,
    pub client: Arc<C>,
}

impl<C> ToolContext<C> {
    pub fn new(tool_name: impl Into<String>, client: Arc<C>) -> Self {
        Self {
            tool_name: tool_name.into(),
            client,
        }
    }
}

impl<C> Clone for ToolContext<C> {
    fn clone(&self) -> Self {
        Self {
            tool_name: self.tool_name.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

/// Result of a tool call as returned to the MCP client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutput {
    pub content: Value,
    #[serde(default)]
    pub is_error: bool,
}

impl ToolOutput {
    pub fn success(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: Value::String(message.into()),
            is_error: true,
        }
    }
}

/// A callable tool implementation.
#[async_trait]
pub trait ToolHandler<C: Send + Sync + 'static>: Send + Sync {
    async fn call(&self, ctx: &ToolContext<C>, args: Value) -> Result<ToolOutput, HandlerError>;
}

/// Wraps a handler in additional behaviour.
pub trait Middleware<C: Send + Sync + 'static>: Send + Sync {
    fn wrap(&self, inner: Arc<dyn ToolHandler<C>>) -> Arc<dyn ToolHandler<C>>;
}

/// Ordered middleware chain.
pub struct Pipeline<C: Send + Sync + 'static> {
    layers: Vec<Arc<dyn Middleware<C>>>,
}

impl<C: Send + Sync + 'static> Default for Pipeline<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Send + Sync + 'static> Pipeline<C> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a middleware. Earlier layers wrap later ones.
    pub fn layer(mut self, middleware: impl Middleware<C> + 'static) -> Self {
        self.layers.push(Arc::new(middleware));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Compose the layers around `handler`, innermost last.
    pub fn build(&self, handler: Arc<dyn ToolHandler<C>>) -> Arc<dyn ToolHandler<C>> {
        self.layers
            .iter()
            .rev()
            .fold(handler, |inner, layer| layer.wrap(inner))
    }
}

/// Converts handler errors into an error [`ToolOutput`].
pub struct ErrorHandling;

struct ErrorHandlingHandler<C: Send + Sync + 'static> {
    inner: Arc<dyn ToolHandler<C>>,
}

impl<C: Send + Sync + 'static> Middleware<C> for ErrorHandling {
    fn wrap(&self, inner: Arc<dyn ToolHandler<C>>) -> Arc<dyn ToolHandler<C>> {
        Arc::new(ErrorHandlingHandler { inner })
    }
}

#[async_trait]
impl<C: Send + Sync + 'static> ToolHandler<C> for ErrorHandlingHandler<C> {
    async fn call(&self, ctx: &ToolContext<C>, args: Value) -> Result<ToolOutput, HandlerError> {
        match self.inner.call(ctx, args).await {
            Ok(output) => Ok(output),
            Err(e) => {
                tracing::error!(tool = %ctx.tool_name, error = %e, "Tool call failed");
                Ok(ToolOutput::error(e.to_string()))
            }
        }
    }
}

type CheckFn<C> = dyn Fn(&ToolContext<C>, &Value) -> Result<(), String> + Send + Sync;

/// Runs a check before the handler and rejects the call when it fails.
pub struct PreExecutionCheck<C: Send + Sync + 'static> {
    check: Arc<CheckFn<C>>,
}

impl<C: Send + Sync + 'static> PreExecutionCheck<C> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&ToolContext<C>, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }
}

struct PreExecutionCheckHandler<C: Send + Sync + 'static> {
    check: Arc<CheckFn<C>>,
    inner: Arc<dyn ToolHandler<C>>,
}

impl<C: Send + Sync + 'static> Middleware<C> for PreExecutionCheck<C> {
    fn wrap(&self, inner: Arc<dyn ToolHandler<C>>) -> Arc<dyn ToolHandler<C>> {
        Arc::new(PreExecutionCheckHandler {
            check: Arc::clone(&self.check),
            inner,
        })
    }
}

#[async_trait]
impl<C: Send + Sync + 'static> ToolHandler<C> for PreExecutionCheckHandler<C> {
    async fn call(&self, ctx: &ToolContext<C>, args: Value) -> Result<ToolOutput, HandlerError> {
        if let Err(reason) = (self.check)(ctx, &args) {
            tracing::debug!(tool = %ctx.tool_name, reason = %reason, "Pre-execution check rejected call");
            return Err(HandlerError::PreconditionFailed {
                tool: ctx.tool_name.clone(),
                reason,
            });
        }
        self.inner.call(ctx, args).await
    }
}
