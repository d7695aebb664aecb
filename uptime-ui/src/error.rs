use uptime_core::ParseReferenceError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid start date")]
    Reference(#[from] ParseReferenceError),
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("could not listen for `{event}`: {reason}")]
    EventListener { event: &'static str, reason: String },
}
