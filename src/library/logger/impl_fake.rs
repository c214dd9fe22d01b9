use crate::library::logger::interface::{join_namespace, Logger};
use std::sync::{Arc, Mutex};

/// Keeps every logged line in memory, shared between namespaced children.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub namespace: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == LogLevel::Error)
            .map(|entry| entry.message)
            .collect()
    }

    fn push(
        &self,
        level: LogLevel,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        entries.push(LogEntry {
            level,
            namespace: self.namespace.clone(),
            message: message.to_string(),
        });
        Ok(())
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push(LogLevel::Info, message)
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push(LogLevel::Error, message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerFake {
            namespace: Some(join_namespace(&self.namespace, namespace)),
            entries: self.entries.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_children_share_entries() {
        let logger = LoggerFake::new();
        let child = logger.with_namespace("detector").with_namespace("analyzer");

        child.info("started").unwrap();
        child.error("boom").unwrap();

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].namespace.as_deref(), Some("detector:analyzer"));
        assert_eq!(logger.errors(), vec!["boom".to_string()]);
    }
}
