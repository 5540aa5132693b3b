use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, warn};

use plasma_core::error::{PlasmaError, Result};
use plasma_core::messages::{headers, CommandFields, Message, MessageKind, Operation, RemotingFields};

use crate::config::ServiceConfig;
use crate::fault;

/// Handler for one command operation. Overrides the core's placeholder
/// (or its built-in `ping`) for that code.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    fn operation(&self) -> Operation;
    async fn handle(&self, cmd: &Message) -> Result<Vec<Message>>;
}

/// RPC service reached through `RemotingMessage`.
#[async_trait]
pub trait RemotingService: Send + Sync {
    /// Destination id this service is registered under.
    fn destination(&self) -> &str;
    /// Invoke `operation` with the message body as arguments. The result
    /// becomes the body of the acknowledgement.
    async fn invoke(&self, operation: &str, args: Value) -> Result<Value>;
}

/// Registry and dispatcher for command handlers and remoting services.
///
/// Handlers are registered at startup and only read afterwards.
pub struct Dispatcher {
    config: ServiceConfig,
    commands: DashMap<Operation, Arc<dyn CommandHandler>>,
    remoting: DashMap<String, Arc<dyn RemotingService>>,
}

impl Dispatcher {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            commands: DashMap::new(),
            remoting: DashMap::new(),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn register_command(&self, handler: Arc<dyn CommandHandler>) {
        self.commands.insert(handler.operation(), handler);
    }

    /// Register a remoting service. Its destination must be declared in config.
    pub fn register_remoting(&self, svc: Arc<dyn RemotingService>) -> Result<()> {
        let dest = svc.destination().to_owned();
        if self.config.destination(&dest).is_none() {
            return Err(PlasmaError::UnknownDestination(dest));
        }
        self.remoting.insert(dest, svc);
        Ok(())
    }

    pub fn registered_operations(&self) -> Vec<Operation> {
        self.commands.iter().map(|e| *e.key()).collect()
    }

    pub fn registered_destinations(&self) -> Vec<String> {
        self.remoting.iter().map(|e| e.key().clone()).collect()
    }

    /// Dispatch an inbound message. Failures are answered with a single
    /// correlated `ErrorMessage` instead of being returned.
    pub async fn dispatch(&self, msg: &Message) -> Vec<Message> {
        match self.try_dispatch(msg).await {
            Ok(replies) => replies,
            Err(err) => {
                warn!(
                    class = msg.class_name(),
                    message_id = ?msg.message_id(),
                    fault_code = err.fault_code().as_str(),
                    error = %err,
                    "dispatch failed"
                );
                let reply = fault::error_reply(msg, &err, self.config.endpoint.expose_fault_detail);
                vec![self.finish(reply)]
            }
        }
    }

    /// Dispatch an inbound message, returning failures to the caller.
    pub async fn try_dispatch(&self, msg: &Message) -> Result<Vec<Message>> {
        debug!(class = msg.class_name(), message_id = ?msg.message_id(), "dispatch");

        let replies = match &msg.kind {
            MessageKind::Command(cmd) => self.dispatch_command(msg, cmd).await?,
            MessageKind::Remoting(rem) => vec![self.dispatch_remoting(msg, rem).await?],
            _ => msg.respond()?,
        };

        Ok(replies.into_iter().map(|r| self.finish(r)).collect())
    }

    async fn dispatch_command(&self, msg: &Message, cmd: &CommandFields) -> Result<Vec<Message>> {
        let handler = cmd
            .operation()
            .and_then(|op| self.commands.get(&op).map(|e| e.value().clone()));

        match handler {
            Some(h) => h.handle(msg).await,
            None => msg.respond(),
        }
    }

    async fn dispatch_remoting(&self, msg: &Message, rem: &RemotingFields) -> Result<Message> {
        let dest = msg
            .envelope
            .destination
            .as_deref()
            .ok_or_else(|| PlasmaError::BadRequest("remoting message without destination".into()))?;

        let dest_cfg = self
            .config
            .destination(dest)
            .ok_or_else(|| PlasmaError::UnknownDestination(dest.to_owned()))?;
        if let (Some(expected), Some(got)) = (dest_cfg.source.as_deref(), rem.source.as_deref()) {
            if expected != got {
                return Err(PlasmaError::BadRequest(format!(
                    "source {got} does not match destination {dest}"
                )));
            }
        }

        let operation = rem
            .operation
            .as_deref()
            .ok_or_else(|| PlasmaError::BadRequest("remoting message without operation".into()))?;

        let svc = self
            .remoting
            .get(dest)
            .map(|e| e.value().clone())
            .ok_or_else(|| PlasmaError::UnknownDestination(format!("{dest} (no service bound)")))?;

        let result = svc.invoke(operation, msg.body().clone()).await?;

        let mut ack = Message::acknowledge_message();
        ack.acknowledge(msg)?;
        ack.envelope.body = result;
        Ok(ack)
    }

    /// Stamp an outbound reply: message id, timestamp, default TTL, endpoint.
    fn finish(&self, mut reply: Message) -> Message {
        reply.ensure_message_id();

        let env = &mut reply.envelope;
        if env.timestamp.is_none() {
            env.timestamp = Some(now_millis());
        }
        let ttl = self.config.endpoint.default_time_to_live_ms;
        if env.time_to_live.is_none() && ttl > 0 {
            env.time_to_live = Some(ttl);
        }
        env.headers
            .entry(headers::ENDPOINT)
            .or_insert_with(|| Value::String(self.config.endpoint.id.clone()));
        reply
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(millis)
        .unwrap_or_default()
}

/// Whole milliseconds, saturating at `i64::MAX`.
fn millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}
