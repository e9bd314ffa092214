//! Lambda runtime adapter

use lambda_runtime::{service_fn, LambdaEvent};

use crate::handler;
use crate::types::{InvocationEvent, InvocationResponse};

/// Handle one invocation delivered by the Lambda runtime.
///
/// Faults go back to the runtime as errors so the platform reports them as
/// failed invocations.
pub async fn function_handler(
    event: LambdaEvent<InvocationEvent>,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    let request_id = event.context.request_id.clone();

    match handler::handle(&event.payload) {
        Ok(response) => {
            tracing::debug!(%request_id, body = %response.body, "Invocation handled");
            Ok(response)
        }
        Err(err) => {
            tracing::error!(%request_id, error = %err, "Invocation failed");
            Err(err.into())
        }
    }
}

/// Serve invocations until the runtime shuts the process down.
pub async fn run() -> Result<(), lambda_runtime::Error> {
    lambda_runtime::run(service_fn(function_handler)).await
}
