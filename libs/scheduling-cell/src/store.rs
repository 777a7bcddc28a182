use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::models::{
    Booking, EntityId, NewProvider, NewRequester, Provider, Requester, WaitlistEntry,
};

/// Append-only arenas for every entity kind plus the waitlist and the
/// blackout set. The arenas are keyed by identity; since ids are
/// monotonic, iteration order is insertion order, which keeps stable
/// sorts over them deterministic.
#[derive(Debug)]
pub(crate) struct StoreInner {
    pub(crate) requesters: BTreeMap<EntityId, Requester>,
    pub(crate) providers: BTreeMap<EntityId, Provider>,
    pub(crate) bookings: BTreeMap<EntityId, Booking>,
    pub(crate) waitlist: Vec<WaitlistEntry>,
    pub(crate) blackout_dates: BTreeSet<NaiveDate>,
    next_id: EntityId,
}

impl StoreInner {
    fn new() -> Self {
        Self {
            requesters: BTreeMap::new(),
            providers: BTreeMap::new(),
            bookings: BTreeMap::new(),
            waitlist: Vec::new(),
            blackout_dates: BTreeSet::new(),
            next_id: 1,
        }
    }

    /// Mint the next identity from the counter shared by all entity
    /// kinds. The caller holds the write guard, so ids are unique
    /// under concurrency.
    pub(crate) fn mint_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Owns all engine state for the lifetime of the process. The single
/// `RwLock` is the serialization point mandated for the engine: every
/// check-then-commit sequence in the booking service runs under one
/// write guard, so no interleaving can double-book a provider.
#[derive(Clone)]
pub struct SchedulingStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl SchedulingStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::new())),
        }
    }

    /// Register a requester. Always succeeds and returns a fresh id.
    pub async fn add_requester(&self, new: NewRequester) -> EntityId {
        let mut state = self.inner.write().await;
        let id = state.mint_id();
        debug!("Adding requester {} ({})", id, new.name);

        state.requesters.insert(
            id,
            Requester {
                id,
                name: new.name,
                email: new.email,
                phone: new.phone,
                address: new.address,
                birth_date: new.birth_date,
                preferred_providers: new.preferred_providers,
                family_members: new.family_members,
            },
        );
        id
    }

    /// Register a provider. A missing weekly schedule gets the
    /// Monday-Friday 09:00-17:00 default.
    pub async fn add_provider(&self, new: NewProvider) -> EntityId {
        let mut state = self.inner.write().await;
        let id = state.mint_id();
        debug!("Adding provider {} ({})", id, new.name);

        let weekly_hours = new
            .weekly_hours
            .unwrap_or_else(Provider::default_weekly_hours);
        state.providers.insert(
            id,
            Provider {
                id,
                name: new.name,
                specialization: new.specialization,
                weekly_hours,
            },
        );
        id
    }

    /// Mark a calendar date as closed for booking. Checked before any
    /// other creation rule.
    pub async fn add_blackout_date(&self, date: NaiveDate) {
        let mut state = self.inner.write().await;
        state.blackout_dates.insert(date);
    }

    pub async fn is_blackout_date(&self, date: NaiveDate) -> bool {
        self.inner.read().await.blackout_dates.contains(&date)
    }

    pub async fn requester(&self, id: EntityId) -> Option<Requester> {
        self.inner.read().await.requesters.get(&id).cloned()
    }

    pub async fn provider(&self, id: EntityId) -> Option<Provider> {
        self.inner.read().await.providers.get(&id).cloned()
    }

    pub async fn booking(&self, id: EntityId) -> Option<Booking> {
        self.inner.read().await.bookings.get(&id).cloned()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().await
    }
}

impl Default for SchedulingStore {
    fn default() -> Self {
        Self::new()
    }
}
