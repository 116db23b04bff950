//! Entry point delivering a translator by future or by callback
//!
//! Both delivery modes run the same [`Resolver::resolve`] operation; they only
//! differ in how its result reaches the caller.

use std::fmt;

use futures::future::{BoxFuture, FutureExt};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::Settings;
use crate::utils::errors::{I18nError, Result};
use super::context::Context;
use super::resolver::Resolver;
use super::translator::Translator;

/// Handler receiving the outcome of one retrieval, invoked exactly once
pub type Callback = Box<dyn FnOnce(Result<Translator>) + Send + 'static>;

/// How a dispatched retrieval is delivered
pub enum Dispatch {
    /// No callback given, the caller awaits the translator
    Pending(BoxFuture<'static, Result<Translator>>),
    /// Callback registered, running on the returned task
    Delivered(JoinHandle<()>),
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Pending(_) => f.write_str("Dispatch::Pending"),
            Dispatch::Delivered(handle) => f.debug_tuple("Dispatch::Delivered").field(handle).finish(),
        }
    }
}

/// Translation document retrieval with a default context
#[derive(Debug, Clone)]
pub struct I18n {
    resolver: Resolver,
    context: Context,
}

impl I18n {
    /// Create a new I18n instance
    pub fn new(resolver: Resolver, context: Context) -> Self {
        Self { resolver, context }
    }

    /// Build the resolver and the host context from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            Resolver::new(&settings.fetch)?,
            Context::from_host_config(&settings.host),
        ))
    }

    /// Context used when a call does not supply one
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Resolver shared by every call on this instance
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Future mode: resolves to a translator or to the primary failure
    pub fn translator(&self, context: Option<Context>) -> BoxFuture<'static, Result<Translator>> {
        let context = context.unwrap_or_else(|| self.context.clone());
        let resolver = self.resolver.clone();
        async move { resolver.resolve(&context).await }.boxed()
    }

    /// Callback mode: `callback` runs once on a spawned task with the outcome.
    ///
    /// Fails without issuing a request when there is no tokio runtime to
    /// spawn onto.
    pub fn with_callback<F>(&self, context: Option<Context>, callback: F) -> Result<JoinHandle<()>>
    where
        F: FnOnce(Result<Translator>) + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| {
            I18nError::InvalidArgument(format!("callback requires a tokio runtime: {}", e))
        })?;
        let context = context.unwrap_or_else(|| self.context.clone());

        let resolver = self.resolver.clone();
        Ok(runtime.spawn(async move {
            let result = resolver.resolve(&context).await;
            debug!(success = result.is_ok(), "Delivering translator to callback");
            callback(result);
        }))
    }

    /// Deliver through `callback` when one is given, otherwise hand back a future
    pub fn dispatch(&self, callback: Option<Callback>, context: Option<Context>) -> Result<Dispatch> {
        match callback {
            None => Ok(Dispatch::Pending(self.translator(context))),
            Some(callback) => self.with_callback(context, callback).map(Dispatch::Delivered),
        }
    }
}

/// One-shot retrieval configured from `settings`
pub fn i18n(settings: &Settings, callback: Option<Callback>, context: Option<Context>) -> Result<Dispatch> {
    I18n::from_settings(settings)?.dispatch(callback, context)
}
