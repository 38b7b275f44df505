//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::payroll::Payroll;

/// Shared application state.
///
/// Holds the single [`Payroll`] instance. Handlers lock it for the duration
/// of one synchronous operation and never across an await point.
#[derive(Clone)]
pub struct AppState {
    payroll: Arc<Mutex<Payroll>>,
}

impl AppState {
    /// Creates a new application state around a loaded payroll.
    pub fn new(payroll: Payroll) -> Self {
        Self {
            payroll: Arc::new(Mutex::new(payroll)),
        }
    }

    /// Locks the payroll for one operation.
    pub fn payroll(&self) -> MutexGuard<'_, Payroll> {
        // Every mutation commits only after it has been persisted, so the
        // state behind a poisoned lock is still consistent.
        self.payroll.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
