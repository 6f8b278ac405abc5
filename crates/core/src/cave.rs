//! The cave: an arena of rooms indexed by `RoomId` plus the entities living in it.
//! Rooms and entities refer to each other only through ids; every mutation of
//! occupancy or influence goes through `Cave`.

use std::collections::BTreeSet;

use crate::dice::Dice;
use crate::types::*;

mod influence;
mod layout;
mod placement;

pub use layout::TUNNEL_INCREMENTS;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaveError {
    #[error("tunnel increments ran out while room {room} still had {degree} connections")]
    IncrementsExhausted { room: RoomId, degree: usize },
    #[error("room {room} cannot tunnel {increment} rooms ahead")]
    IncrementOutOfRange { room: RoomId, increment: usize },
    #[error("room {room} ended up with {degree} connections instead of {CONNECTIONS_PER_ROOM}")]
    DegreeMismatch { room: RoomId, degree: usize },
    #[error("no empty room left to place {thing:?}")]
    NoEmptyRoom { thing: Thing },
}

#[derive(Clone, Debug)]
pub struct Room {
    id: RoomId,
    connections: [RoomId; CONNECTIONS_PER_ROOM],
    occupants: BTreeSet<Thing>,
    influenced_by: BTreeSet<Thing>,
}

impl Room {
    fn new(id: RoomId, connections: [RoomId; CONNECTIONS_PER_ROOM]) -> Self {
        Self { id, connections, occupants: BTreeSet::new(), influenced_by: BTreeSet::new() }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Connected rooms in ascending order.
    pub fn connections(&self) -> &[RoomId; CONNECTIONS_PER_ROOM] {
        &self.connections
    }

    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }

    pub fn occupants(&self) -> &BTreeSet<Thing> {
        &self.occupants
    }

    pub fn holds(&self, kind: EntityKind) -> bool {
        self.occupants.iter().any(|thing| thing.kind() == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Entities whose presence can be sensed from this room.
    pub fn influenced_by(&self) -> &BTreeSet<Thing> {
        &self.influenced_by
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    thing: Thing,
    location: RoomId,
}

impl Entity {
    pub fn thing(&self) -> Thing {
        self.thing
    }

    pub fn kind(&self) -> EntityKind {
        self.thing.kind()
    }

    pub fn location(&self) -> RoomId {
        self.location
    }
}

#[derive(Clone, Debug)]
pub struct Cave {
    rooms: Vec<Room>,
    entities: [Entity; Thing::COUNT],
}

impl Cave {
    /// Builds the fixed tunnel layout and populates it at random.
    pub fn generate(dice: &mut impl Dice) -> Result<Self, CaveError> {
        let connections = layout::connect_rooms(&TUNNEL_INCREMENTS)?;
        let placements = placement::choose_placements(dice)?;
        let cave = Self::assemble(connections, placements);
        tracing::debug!(
            player = %cave.location(Thing::Player),
            wumpus = %cave.location(Thing::Wumpus),
            "cave generated"
        );
        Ok(cave)
    }

    /// Builds the fixed tunnel layout with every entity at a chosen room,
    /// indexed in `Thing::ALL` order.
    pub fn with_placements(placements: [RoomId; Thing::COUNT]) -> Result<Self, CaveError> {
        let connections = layout::connect_rooms(&TUNNEL_INCREMENTS)?;
        Ok(Self::assemble(connections, placements))
    }

    fn assemble(
        connections: Vec<[RoomId; CONNECTIONS_PER_ROOM]>,
        placements: [RoomId; Thing::COUNT],
    ) -> Self {
        let rooms = connections
            .into_iter()
            .enumerate()
            .map(|(index, exits)| Room::new(RoomId::from_index(index), exits))
            .collect();
        let entities = Thing::ALL.map(|thing| Entity { thing, location: placements[thing.index()] });
        let mut cave = Self { rooms, entities };
        for thing in Thing::ALL {
            let room = cave.location(thing);
            cave.rooms[room.index()].occupants.insert(thing);
            cave.apply_influence(room, thing, thing.sensing_radius());
        }
        cave
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn entity(&self, thing: Thing) -> &Entity {
        &self.entities[thing.index()]
    }

    pub fn location(&self, thing: Thing) -> RoomId {
        self.entity(thing).location
    }

    /// A uniformly chosen tunnel out of `room`.
    pub fn random_exit(&self, room: RoomId, dice: &mut impl Dice) -> RoomId {
        dice.pick(self.room(room).connections())
    }

    /// Moves `thing` without any adjacency check, clearing its old clues
    /// before laying new ones.
    pub(crate) fn relocate(&mut self, thing: Thing, to: RoomId) {
        let from = self.location(thing);
        let radius = thing.sensing_radius();
        self.clear_influence(from, thing, radius);
        self.rooms[from.index()].occupants.remove(&thing);
        self.rooms[to.index()].occupants.insert(thing);
        self.entities[thing.index()].location = to;
        self.apply_influence(to, thing, radius);
    }

    pub fn view(&self, id: RoomId) -> RoomView {
        let room = self.room(id);
        RoomView {
            id,
            exits: room.connections,
            clues: room.influenced_by.iter().map(|thing| thing.kind()).collect(),
        }
    }
}
