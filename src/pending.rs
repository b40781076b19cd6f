//! Single-slot buffer for a user intent interrupted by sign-in.
//!
//! When an action needs an authenticated user, the intent is saved here,
//! the user is sent to sign in, and on return the application calls
//! [`PendingActions::take`] to replay it. Only the latest intent survives,
//! and intents older than [`PENDING_ACTION_TTL`] are dropped on read.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::logging::{debug, error};
use crate::model::Product;
use crate::storage::{JsonStore, StorageError, keys};

/// How long a saved intent stays replayable.
pub const PENDING_ACTION_TTL: Duration = Duration::from_secs(60 * 60);

/// What the user was trying to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PendingIntent {
    #[serde(rename_all = "camelCase")]
    AddToCart {
        product: Product,
        #[serde(default = "default_quantity")]
        quantity: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    AddToWishlist {
        product: Product,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Checkout {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_url: Option<String>,
    },
}

fn default_quantity() -> u32 {
    1
}

impl PendingIntent {
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::AddToCart { product, .. } | Self::AddToWishlist { product, .. } => Some(product),
            Self::Checkout { .. } => None,
        }
    }

    pub fn return_url(&self) -> Option<&str> {
        match self {
            Self::AddToCart { return_url, .. }
            | Self::AddToWishlist { return_url, .. }
            | Self::Checkout { return_url } => return_url.as_deref(),
        }
    }
}

/// A saved intent and when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingAction {
    #[serde(flatten)]
    pub intent: PendingIntent,
    /// Epoch milliseconds.
    pub timestamp: u64,
}

impl PendingAction {
    /// Whether the action is older than [`PENDING_ACTION_TTL`] at `now_millis`.
    pub fn is_expired(&self, now_millis: u64) -> bool {
        let ttl = u64::try_from(PENDING_ACTION_TTL.as_millis()).unwrap_or(u64::MAX);
        now_millis.saturating_sub(self.timestamp) > ttl
    }
}

/// The persisted pending-action slot.
pub struct PendingActions {
    store: JsonStore,
    clock: Arc<dyn Clock>,
}

impl PendingActions {
    pub fn new(store: JsonStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Stamp `intent` with the current time and store it, replacing any
    /// previously saved action.
    pub fn save(&self, intent: PendingIntent) -> Result<PendingAction, StorageError> {
        let action = PendingAction {
            intent,
            timestamp: self.clock.now_millis(),
        };
        self.store.write(keys::PENDING_ACTION, &action)?;
        Ok(action)
    }

    /// The saved action, unless there is none or it has expired.
    ///
    /// An expired action is cleared as a side effect.
    pub fn peek(&self) -> Option<PendingAction> {
        let action: PendingAction = self
            .store
            .read::<Option<PendingAction>>(keys::PENDING_ACTION, None)?;

        if action.is_expired(self.clock.now_millis()) {
            debug!(saved_at = action.timestamp, "dropping expired pending action");
            if let Err(e) = self.store.remove(keys::PENDING_ACTION) {
                error!(error = %e, "failed to clear expired pending action");
            }
            return None;
        }
        Some(action)
    }

    /// Return the live saved action and clear the slot.
    pub fn take(&self) -> Result<Option<PendingAction>, StorageError> {
        let action = self.peek();
        if action.is_some() {
            self.clear()?;
        }
        Ok(action)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::PENDING_ACTION)
    }
}
