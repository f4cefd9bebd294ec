//! The swap form's submission lifecycle: `Idle -> Submitting -> Resolved | Idle`.
use crate::core::convert::convert;
use crate::core::price::PriceRecord;
use crate::core::validate::ConversionRequest;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapState {
    Idle,
    Submitting,
    Resolved(Decimal),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwapError {
    #[error("A conversion is already in progress")]
    InFlight,
}

/// Holds the price list for one form and the state of its single
/// outstanding conversion. Clones share state.
#[derive(Clone)]
pub struct SwapSession {
    prices: Arc<Vec<PriceRecord>>,
    state: Arc<Mutex<SwapState>>,
    delay: Duration,
}

impl SwapSession {
    pub fn new(prices: Vec<PriceRecord>, delay: Duration) -> Self {
        Self {
            prices: Arc::new(prices),
            state: Arc::new(Mutex::new(SwapState::Idle)),
            delay,
        }
    }

    pub fn state(&self) -> SwapState {
        *lock(&self.state)
    }

    /// Resolves `request` after the configured delay.
    ///
    /// Returns `Ok(None)` and goes back to `Idle` when either price is
    /// unavailable. Rejects the call while another conversion is pending.
    #[instrument(
        name = "SwapSubmit",
        skip(self),
        fields(from = %request.from_currency, to = %request.to_currency)
    )]
    pub async fn submit(&self, request: &ConversionRequest) -> Result<Option<Decimal>, SwapError> {
        let mut pending = {
            let mut state = lock(&self.state);
            if *state == SwapState::Submitting {
                return Err(SwapError::InFlight);
            }
            *state = SwapState::Submitting;
            Pending {
                state: &self.state,
                settled: false,
            }
        };

        tokio::time::sleep(self.delay).await;

        let result = convert(
            request.amount,
            &request.from_currency,
            &request.to_currency,
            &self.prices,
        );
        match result {
            Some(amount) => pending.settle(SwapState::Resolved(amount)),
            None => pending.settle(SwapState::Idle),
        }
        debug!(?result, "Conversion settled");
        Ok(result)
    }
}

/// Returns the session to `Idle` if a submission is dropped before settling.
struct Pending<'a> {
    state: &'a Mutex<SwapState>,
    settled: bool,
}

impl Pending<'_> {
    fn settle(&mut self, next: SwapState) {
        *lock(self.state) = next;
        self.settled = true;
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Conversion cancelled");
            *lock(self.state) = SwapState::Idle;
        }
    }
}

fn lock(state: &Mutex<SwapState>) -> MutexGuard<'_, SwapState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
