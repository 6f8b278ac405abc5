//! Player actions: walking (with bat snatches) and loosing arrows.

use super::*;

impl<D: Dice> Session<D> {
    pub(super) fn walk(&mut self, target: RoomId) {
        let here = self.cave.location(Thing::Player);
        if !self.cave.room(here).is_connected_to(target) {
            self.player.events.push(Event::CantGoThere);
            return;
        }
        self.cave.relocate(Thing::Player, target);
        self.check_player_room();
    }

    /// Evaluates the player's room; bats keep carrying the player off until
    /// the player lands somewhere without them.
    fn check_player_room(&mut self) {
        loop {
            match self.peril_at(self.cave.location(Thing::Player)) {
                Some(EntityKind::Bats) => {
                    self.bat_snatch();
                    self.player.events.push(Event::BatSnatch);
                }
                Some(EntityKind::Pit) => {
                    self.player.events.push(Event::FellInPit);
                    return;
                }
                Some(EntityKind::Wumpus) => {
                    self.player.events.extend([Event::BumpedWumpus, Event::WumpusGotYou]);
                    return;
                }
                Some(EntityKind::Player) | None => return,
            }
        }
    }

    fn peril_at(&self, room: RoomId) -> Option<EntityKind> {
        let room = self.cave.room(room);
        [EntityKind::Bats, EntityKind::Pit, EntityKind::Wumpus]
            .into_iter()
            .find(|&kind| room.holds(kind))
    }

    /// Carries the player through a random tunnel 1..=5 times. Rooms passed
    /// on the way are not evaluated.
    fn bat_snatch(&mut self) {
        let hops = MIN_BAT_HOPS + self.dice.roll_below(MAX_BAT_HOPS - MIN_BAT_HOPS + 1);
        let from = self.cave.location(Thing::Player);
        for _ in 0..hops {
            let here = self.cave.location(Thing::Player);
            let next = self.cave.random_exit(here, &mut self.dice);
            self.cave.relocate(Thing::Player, next);
        }
        tracing::debug!(%from, to = %self.cave.location(Thing::Player), hops, "bat snatch");
    }

    /// Flies an arrow along `path`. The arrow follows the path while each room
    /// is connected to the last; at the first break it wanders at random for
    /// the rest of its range.
    pub(super) fn loose_arrow(&mut self, path: &[RoomId]) {
        self.player.arrows = self.player.arrows.saturating_sub(1);
        let mut arrow = self.cave.location(Thing::Player);
        let mut hops_left = ARROW_RANGE;

        for &aimed in path {
            if hops_left == 0 {
                break;
            }
            if self.cave.room(arrow).is_connected_to(aimed) {
                arrow = aimed;
                hops_left -= 1;
                self.arrow_lands(arrow);
                continue;
            }

            tracing::debug!(%arrow, %aimed, hops_left, "arrow goes astray");
            while hops_left > 0 {
                arrow = self.cave.random_exit(arrow, &mut self.dice);
                hops_left -= 1;
                self.arrow_lands(arrow);
            }
            break;
        }

        if self.player.arrows == 0 {
            self.player.events.push(Event::OutOfArrows);
        }
    }

    fn arrow_lands(&mut self, room: RoomId) {
        let occupants = self.cave.room(room).occupants();
        if occupants.contains(&Thing::Player) {
            self.player.events.push(Event::ArrowReturned);
        } else if occupants.contains(&Thing::Wumpus) {
            self.player.events.push(Event::WumpusShot);
        }
    }
}
