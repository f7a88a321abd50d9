//! Driving async operations from synchronous callers

use std::future::Future;
use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

/// Run a future to completion from synchronous code
///
/// - inside a multi-thread runtime: reuse it via `block_in_place`
/// - inside a current-thread runtime: run on a helper thread with its own
///   current-thread runtime, since that runtime cannot be blocked
/// - outside any runtime: create a current-thread runtime for this call
///
/// # Errors
///
/// Returns the I/O error if a runtime cannot be created
pub fn block_on<F>(future: F) -> std::io::Result<F::Output>
where
    F: Future + Send,
    F::Output: Send,
{
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            Ok(tokio::task::block_in_place(|| handle.block_on(future)))
        }
        Ok(_) => std::thread::scope(|scope| {
            let helper = scope.spawn(|| -> std::io::Result<F::Output> {
                Ok(current_thread_runtime()?.block_on(future))
            });
            match helper.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }),
        Err(_) => Ok(current_thread_runtime()?.block_on(future)),
    }
}

fn current_thread_runtime() -> std::io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}
