//! Radius-bounded clue propagation. A room is influenced by an entity when it
//! lies `1..=radius` tunnels from the entity's room; the entity's own room never is.

use std::collections::VecDeque;

use super::Cave;
use crate::types::{ROOM_COUNT, RoomId, Thing};

impl Cave {
    /// Rooms whose shortest tunnel distance from `origin` is in `1..=radius`,
    /// in breadth-first order.
    pub fn rooms_within(&self, origin: RoomId, radius: u8) -> Vec<RoomId> {
        let mut reached = Vec::new();
        if radius == 0 {
            return reached;
        }

        let mut distance: [Option<u8>; ROOM_COUNT] = [None; ROOM_COUNT];
        distance[origin.index()] = Some(0);
        let mut frontier = VecDeque::from([origin]);

        while let Some(room) = frontier.pop_front() {
            let Some(depth) = distance[room.index()] else {
                continue;
            };
            if depth == radius {
                continue;
            }
            for &next in self.room(room).connections() {
                if distance[next.index()].is_some() {
                    continue;
                }
                distance[next.index()] = Some(depth + 1);
                reached.push(next);
                frontier.push_back(next);
            }
        }
        reached
    }

    pub(crate) fn apply_influence(&mut self, origin: RoomId, thing: Thing, radius: u8) {
        for room in self.rooms_within(origin, radius) {
            let room = &mut self.rooms[room.index()];
            if !room.occupants.contains(&thing) {
                room.influenced_by.insert(thing);
            }
        }
    }

    pub(crate) fn clear_influence(&mut self, origin: RoomId, thing: Thing, radius: u8) {
        for room in self.rooms_within(origin, radius) {
            self.rooms[room.index()].influenced_by.remove(&thing);
        }
    }

    /// True when every room's clue set equals a from-scratch recomputation
    /// over current locations.
    pub fn influence_is_consistent(&self) -> bool {
        let mut expected = vec![Vec::new(); ROOM_COUNT];
        for thing in Thing::ALL {
            for room in self.rooms_within(self.location(thing), thing.sensing_radius()) {
                expected[room.index()].push(thing);
            }
        }
        self.rooms.iter().zip(expected).all(|(room, mut things)| {
            things.sort();
            room.influenced_by.iter().copied().eq(things)
        })
    }
}
