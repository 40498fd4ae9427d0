use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by the fallible context accessors.
pub enum ContextError {
    /// No ancestor component provided the requested context.
    #[error("{context} was read outside of its provider")]
    MissingProvider {
        /// Type name of the missing context.
        context: &'static str,
    },
}
