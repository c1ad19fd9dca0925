use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slots::sources::AppointmentSource;

/// Identity of a generated slot: one schedule, one day, one start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub schedule_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

impl SlotKey {
    pub fn new(schedule_id: Uuid, date: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            schedule_id,
            date,
            start_time,
        }
    }
}

/// Slots known to exist, either persisted before the run or staged by it.
#[derive(Debug, Clone, Default)]
pub struct ExistingSlotIndex {
    keys: HashSet<SlotKey>,
}

impl ExistingSlotIndex {
    pub fn new(keys: impl IntoIterator<Item = SlotKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Seeds the index from appointments persisted on any day in
    /// `[start, end]`.
    pub async fn load<A>(source: &A, start: NaiveDate, end: NaiveDate) -> eyre::Result<Self>
    where
        A: AppointmentSource + ?Sized,
    {
        let keys = source.get_keys_in_range(start, end).await?;
        Ok(Self::new(keys))
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.keys.contains(key)
    }

    /// Records a key. Returns `false` when it was already present.
    pub fn insert(&mut self, key: SlotKey) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
