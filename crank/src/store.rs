use std::collections::HashMap;
use std::sync::Mutex;

use solana_sdk::pubkey::Pubkey;

use crate::error::CrankError;

/// Per-buffer eligibility state. `next_eligible` only moves when a fresh
/// on-chain observation arrives; attempts never advance it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRecord {
    pub last_attempt: Option<i64>,
    pub next_eligible: i64,
    pub min_interval: i64,
    pub attempts_since_observation: u32,
}

impl ScheduleRecord {
    pub fn new(round_open_timestamp: i64, min_interval: i64) -> Self {
        ScheduleRecord {
            last_attempt: None,
            next_eligible: round_open_timestamp + min_interval,
            min_interval,
            attempts_since_observation: 0,
        }
    }
}

/// The two ways a record may change.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleUpdate {
    /// The buffer account changed on chain. Re-derives the eligibility
    /// window and clears the attempt counter.
    Observation {
        round_open_timestamp: i64,
        min_interval: i64,
    },
    /// An update request was dispatched at chain time `at`. Marks the
    /// attempt but leaves `next_eligible` untouched.
    Attempt { at: i64 },
}

#[derive(Debug)]
pub struct ScheduleStore {
    records: Mutex<HashMap<Pubkey, ScheduleRecord>>,
}

impl ScheduleStore {
    pub fn new(records: HashMap<Pubkey, ScheduleRecord>) -> Result<Self, CrankError> {
        if records.is_empty() {
            return Err(CrankError::EmptyPool);
        }
        Ok(ScheduleStore {
            records: Mutex::new(records),
        })
    }

    pub fn get(&self, handle: &Pubkey) -> Option<ScheduleRecord> {
        self.records.lock().unwrap().get(handle).cloned()
    }

    pub fn handles(&self) -> Vec<Pubkey> {
        self.records.lock().unwrap().keys().copied().collect()
    }

    /// Handles whose eligible time has passed at chain time `now`.
    pub fn due(&self, now: i64) -> Vec<Pubkey> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, record)| now >= record.next_eligible)
            .map(|(handle, _)| *handle)
            .collect()
    }

    /// Sole mutation primitive. Returns the record after the update, or
    /// None for a handle the store has never seen.
    pub fn upsert(&self, handle: &Pubkey, update: ScheduleUpdate) -> Option<ScheduleRecord> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.get_mut(handle) else {
            log::error!("schedule update for unknown buffer: {handle}");
            return None;
        };

        match update {
            ScheduleUpdate::Observation {
                round_open_timestamp,
                min_interval,
            } => {
                record.next_eligible = round_open_timestamp + min_interval;
                record.min_interval = min_interval;
                record.attempts_since_observation = 0;
            }
            ScheduleUpdate::Attempt { at } => {
                record.last_attempt = Some(at);
                record.attempts_since_observation += 1;
            }
        }

        Some(record.clone())
    }
}
