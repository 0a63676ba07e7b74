use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown audit type '{0}' (expected mini-app, ai-agent or blockchain)")]
    UnknownAuditType(String),
    #[error("audit target must not be empty")]
    EmptyTarget,
}
