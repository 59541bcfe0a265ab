use thiserror::Error;

/// Boxed error returned by a failing system factory.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while registering a system with a registry or world.
#[derive(Debug, Error)]
pub enum SystemRegistrationError {
    #[error("system '{name}' is already registered")]
    DuplicateName { name: String },

    #[error("system '{name}' could not be constructed: {source}")]
    Construction {
        name: String,
        #[source]
        source: BoxError,
    },
}
