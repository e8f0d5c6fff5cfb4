use crate::error::{LogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Application layer that produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Backend,
    Frontend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Module or component an entry is attributed to.
///
/// Some packages only make sense for one stack; see [`Package::allowed_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    // backend
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
    // frontend
    Api,
    Component,
    Hook,
    Page,
    State,
    Style,
    // either
    Auth,
    Config,
    Middleware,
    Utils,
}

impl Package {
    pub fn allowed_for(self, stack: Stack) -> bool {
        use Package::*;

        match self {
            Auth | Config | Middleware | Utils => true,
            Cache | Controller | CronJob | Db | Domain | Handler | Repository | Route
            | Service => stack == Stack::Backend,
            Api | Component | Hook | Page | State | Style => stack == Stack::Frontend,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Package::Cache => "cache",
            Package::Controller => "controller",
            Package::CronJob => "cron_job",
            Package::Db => "db",
            Package::Domain => "domain",
            Package::Handler => "handler",
            Package::Repository => "repository",
            Package::Route => "route",
            Package::Service => "service",
            Package::Api => "api",
            Package::Component => "component",
            Package::Hook => "hook",
            Package::Page => "page",
            Package::State => "state",
            Package::Style => "style",
            Package::Auth => "auth",
            Package::Config => "config",
            Package::Middleware => "middleware",
            Package::Utils => "utils",
        }
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stack::Backend => f.write_str("backend"),
            Stack::Frontend => f.write_str("frontend"),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

impl Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single structured log document, serialized as
/// `{"stack", "level", "package", "message"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEntry {
    pub fn new(stack: Stack, level: Level, package: Package, message: impl Into<String>) -> Self {
        Self {
            stack,
            level,
            package,
            message: message.into(),
        }
    }

    /// Shorthand for a backend entry.
    pub fn backend(level: Level, package: Package, message: impl Into<String>) -> Self {
        Self::new(Stack::Backend, level, package, message)
    }

    /// Checks that the package belongs to the entry's stack.
    pub fn validate(&self) -> Result<()> {
        if self.package.allowed_for(self.stack) {
            Ok(())
        } else {
            Err(LogError::InvalidPackage {
                stack: self.stack,
                package: self.package,
            })
        }
    }
}
