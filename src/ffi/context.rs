//! Worker-pool creation and destruction.

use crate::smoother::ExecutionContext;
use log::warn;

/// Create an execution context with `workers` threads.
///
/// # Returns
/// A pointer to the context, or null if `workers` is 0 or the pool could not
/// be built. The pointer must eventually be freed with `bs_destroy_context()`.
#[no_mangle]
pub extern "C" fn bs_create_context(workers: u32) -> *mut ExecutionContext {
    match ExecutionContext::new(workers as usize) {
        Ok(ctx) => Box::into_raw(Box::new(ctx)),
        Err(err) => {
            warn!("bs_create_context failed: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Destroy an execution context and join its threads.
///
/// # Safety
/// - `ctx` must be a pointer returned by `bs_create_context()`, or null
/// - `ctx` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn bs_destroy_context(ctx: *mut ExecutionContext) {
    if !ctx.is_null() {
        drop(Box::from_raw(ctx));
    }
}

/// Number of worker threads in the context, or 0 if `ctx` is null.
///
/// # Safety
/// - `ctx` must be a valid context pointer, or null
#[no_mangle]
pub unsafe extern "C" fn bs_context_workers(ctx: *const ExecutionContext) -> u32 {
    if ctx.is_null() {
        return 0;
    }
    (*ctx).workers() as u32
}
