//! Fixed tunnel layout: a forward chain broken at three rooms, closed by a
//! shared run of increments.

use std::collections::BTreeSet;

use super::CaveError;
use crate::types::{CONNECTIONS_PER_ROOM, ROOM_COUNT, RoomId};

/// Consumed left to right, once, across the whole layout pass.
pub const TUNNEL_INCREMENTS: [usize; 13] = [4, 5, 6, 7, 8, 9, 9, 9, 8, 7, 6, 5, 4];

const ROOMS_WITHOUT_FORWARD_TUNNEL: [u8; 3] = [5, 15, 20];

pub(super) fn connect_rooms(
    increments: &[usize],
) -> Result<Vec<[RoomId; CONNECTIONS_PER_ROOM]>, CaveError> {
    let mut tunnels: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); ROOM_COUNT];
    let mut increments = increments.iter().copied();

    for index in 0..ROOM_COUNT {
        let room = RoomId::from_index(index);
        if !ROOMS_WITHOUT_FORWARD_TUNNEL.contains(&room.get()) {
            dig(&mut tunnels, index, 1)?;
        }
        while tunnels[index].len() < CONNECTIONS_PER_ROOM {
            let Some(increment) = increments.next() else {
                return Err(CaveError::IncrementsExhausted { room, degree: tunnels[index].len() });
            };
            dig(&mut tunnels, index, increment)?;
        }
    }

    freeze(tunnels)
}

fn freeze(
    tunnels: Vec<BTreeSet<usize>>,
) -> Result<Vec<[RoomId; CONNECTIONS_PER_ROOM]>, CaveError> {
    tunnels
        .into_iter()
        .enumerate()
        .map(|(index, exits)| {
            let degree = exits.len();
            let exits: Vec<RoomId> = exits.into_iter().map(RoomId::from_index).collect();
            exits
                .try_into()
                .map_err(|_| CaveError::DegreeMismatch { room: RoomId::from_index(index), degree })
        })
        .collect()
}

fn dig(tunnels: &mut [BTreeSet<usize>], from: usize, increment: usize) -> Result<(), CaveError> {
    let to = from + increment;
    if to >= tunnels.len() {
        return Err(CaveError::IncrementOutOfRange { room: RoomId::from_index(from), increment });
    }
    tunnels[from].insert(to);
    tunnels[to].insert(from);
    Ok(())
}
