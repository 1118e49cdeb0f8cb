pub mod analyze;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;

use sentiscope_core::WorkflowError;

/// Prints a workflow error and returns the failure exit code. Typed
/// workflow errors render their user-facing message; anything else gets the
/// full error chain.
pub fn render_error(err: anyhow::Error) -> i32 {
    match err.downcast_ref::<WorkflowError>() {
        Some(workflow_err) => eprintln!("{workflow_err}"),
        None => eprintln!("error: {err:#}"),
    }
    1
}
