use super::*;

impl<D: Dice> Session<D> {
    /// Every arrow disturbs the wumpus; most of the time it wakes and shifts
    /// one tunnel over.
    pub(super) fn wumpus_hears_arrow(&mut self) {
        if self.dice.roll_below(WUMPUS_WAKE_SIDES) >= WUMPUS_WAKE_CHANCES {
            tracing::trace!("wumpus sleeps on");
            return;
        }

        self.wumpus.events.push(Event::WumpusWoke);
        let from = self.cave.location(Thing::Wumpus);
        let to = self.cave.random_exit(from, &mut self.dice);
        self.cave.relocate(Thing::Wumpus, to);
        tracing::debug!(%from, %to, "wumpus moved");

        if self.cave.room(to).occupants().contains(&Thing::Player) {
            self.wumpus.events.extend([Event::WumpusBumpedYou, Event::WumpusGotYou]);
        }
    }
}
