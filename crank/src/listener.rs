use solana_sdk::pubkey::Pubkey;

use bufferpool_sdk::BufferRelayerState;

use crate::events::{CrankEventKind, EventSink};
use crate::store::{ScheduleStore, ScheduleUpdate};

/// Feeds one buffer account notification into the schedule. Undecodable
/// payloads are logged and dropped; the previous record stays in force.
pub fn apply_account_update(
    store: &ScheduleStore,
    events: &EventSink,
    min_interval_override: Option<i64>,
    handle: Pubkey,
    bytes: &[u8],
) {
    let buffer = match BufferRelayerState::try_from(bytes) {
        Ok(buffer) => buffer,
        Err(err) => {
            log::warn!("discarding undecodable update for {handle}: {err}");
            return;
        }
    };

    let min_interval =
        min_interval_override.unwrap_or(buffer.min_update_delay_seconds as i64);

    store.upsert(
        &handle,
        ScheduleUpdate::Observation {
            round_open_timestamp: buffer.current_round.round_open_timestamp,
            min_interval,
        },
    );
    events.emit(
        handle,
        CrankEventKind::StateUpdated {
            result: buffer.latest_result,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ScheduleRecord;
    use bufferpool_sdk::{AccountType, BufferRound};
    use std::collections::HashMap;

    fn encoded_buffer(round_open_timestamp: i64, min_update_delay_seconds: u32) -> Vec<u8> {
        borsh::to_vec(&BufferRelayerState {
            account_type: AccountType::BufferRelayer,
            min_update_delay_seconds,
            current_round: BufferRound {
                round_open_timestamp,
                ..Default::default()
            },
            latest_result: vec![9, 9],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_listener_observation_reschedules() {
        let handle = Pubkey::new_unique();
        let store =
            ScheduleStore::new(HashMap::from([(handle, ScheduleRecord::new(1000, 30))])).unwrap();
        let (events, mut rx) = EventSink::channel();

        apply_account_update(&store, &events, None, handle, &encoded_buffer(1031, 30));

        let record = store.get(&handle).unwrap();
        assert_eq!(record.next_eligible, 1061);
        assert_eq!(record.attempts_since_observation, 0);

        let event = rx.try_recv().unwrap();
        assert_eq!(event.handle, handle);
        assert_eq!(
            event.kind,
            CrankEventKind::StateUpdated { result: vec![9, 9] }
        );
    }

    #[test]
    fn test_listener_interval_override() {
        let handle = Pubkey::new_unique();
        let store =
            ScheduleStore::new(HashMap::from([(handle, ScheduleRecord::new(1000, 30))])).unwrap();
        let (events, _rx) = EventSink::channel();

        apply_account_update(&store, &events, Some(10), handle, &encoded_buffer(1031, 30));

        assert_eq!(store.get(&handle).unwrap().next_eligible, 1041);
    }

    #[test]
    fn test_listener_discards_undecodable_payload() {
        let handle = Pubkey::new_unique();
        let store =
            ScheduleStore::new(HashMap::from([(handle, ScheduleRecord::new(1000, 30))])).unwrap();
        let (events, mut rx) = EventSink::channel();

        apply_account_update(&store, &events, None, handle, &[0xff, 0x00, 0x01]);

        assert_eq!(store.get(&handle).unwrap(), ScheduleRecord::new(1000, 30));
        assert!(rx.try_recv().is_err());
    }
}
