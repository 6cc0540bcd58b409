use aws_sdk_bedrock::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrock::operation::list_foundation_models::ListFoundationModelsError;
use catalog_core::MissingEnvVar;
use thiserror::Error;

/// Fault taxonomy for the catalog pipeline. Two request fault kinds are
/// distinguished: client-side faults (construction, dispatch, auth) and
/// faults returned by the service itself. Both are logged once at the fetch
/// site and propagated unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    MissingEnv(#[from] MissingEnvVar),

    #[error("client error: {0}")]
    Client(String),

    #[error("service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },
}

impl CatalogError {
    pub(crate) fn from_sdk(err: SdkError<ListFoundationModelsError>) -> Self {
        match err {
            SdkError::ServiceError(context) => {
                let status = context.raw().status().as_u16();
                let message = context
                    .err()
                    .message()
                    .unwrap_or("unspecified service error")
                    .to_string();
                CatalogError::Service { status, message }
            }
            other => CatalogError::Client(DisplayErrorContext(&other).to_string()),
        }
    }

    /// True when the fault originated on our side of the wire.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, CatalogError::MissingEnv(_) | CatalogError::Client(_))
    }
}
