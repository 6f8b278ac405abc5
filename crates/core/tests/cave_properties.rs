use std::collections::{BTreeSet, VecDeque};

use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use wumpus_core::{CONNECTIONS_PER_ROOM, Cave, ROOM_COUNT, RoomId, Thing};

fn distances_from(cave: &Cave, origin: RoomId) -> Vec<Option<usize>> {
    let mut distance = vec![None; ROOM_COUNT + 1];
    distance[usize::from(origin.get())] = Some(0);
    let mut queue = VecDeque::from([origin]);
    while let Some(room) = queue.pop_front() {
        let depth = distance[usize::from(room.get())].unwrap_or(0);
        for &exit in cave.room(room).connections() {
            let slot = &mut distance[usize::from(exit.get())];
            if slot.is_none() {
                *slot = Some(depth + 1);
                queue.push_back(exit);
            }
        }
    }
    distance
}

fn check_cave(seed: u64) -> Result<(), String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cave = Cave::generate(&mut rng).map_err(|err| err.to_string())?;

    if cave.rooms().len() != ROOM_COUNT {
        return Err(format!("expected {ROOM_COUNT} rooms, got {}", cave.rooms().len()));
    }
    for room in cave.rooms() {
        let exits: BTreeSet<RoomId> = room.connections().iter().copied().collect();
        if exits.len() != CONNECTIONS_PER_ROOM || exits.contains(&room.id()) {
            return Err(format!("room {} has exits {exits:?}", room.id()));
        }
        if exits.iter().any(|exit| !cave.room(*exit).is_connected_to(room.id())) {
            return Err(format!("room {} has a one-way tunnel", room.id()));
        }
    }

    for thing in Thing::ALL {
        let home = cave.location(thing);
        if !cave.room(home).occupants().contains(&thing) {
            return Err(format!("{thing:?} is not listed in room {home}"));
        }
        let distance = distances_from(&cave, home);
        for room in cave.rooms() {
            let Some(steps) = distance[usize::from(room.id().get())] else {
                return Err(format!("room {} is unreachable from {home}", room.id()));
            };
            let expected = (1..=usize::from(thing.sensing_radius())).contains(&steps);
            if room.influenced_by().contains(&thing) != expected {
                return Err(format!(
                    "{thing:?} at {home}: room {} at distance {steps} has wrong clue state",
                    room.id()
                ));
            }
        }
    }

    let occupied: usize = cave.rooms().iter().map(|room| room.occupants().len()).sum();
    if occupied != Thing::COUNT {
        return Err(format!("{occupied} occupancy entries for {} entities", Thing::COUNT));
    }
    Ok(())
}

#[test]
fn test_generated_caves_are_well_formed() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(256));
    runner
        .run(&any::<u64>(), |seed| {
            check_cave(seed).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("generated caves should keep graph and influence invariants");
}
