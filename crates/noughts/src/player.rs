//! Players and their seating.

use derive_getters::Getters;
use derive_new::new;
use noughts_core::Mark;

/// A named player and the mark they place.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Display name, as typed.
    name: String,
    /// Mark this player places.
    mark: Mark,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// The two players of a game, in turn order.
///
/// Player 2 always holds the mark Player 1 did not choose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seating {
    players: [Player; 2],
}

impl Seating {
    /// Seats Player 1 with their chosen mark and Player 2 with the other.
    pub fn new(first_name: String, first_mark: Mark, second_name: String) -> Self {
        Self {
            players: [
                Player::new(first_name, first_mark),
                Player::new(second_name, first_mark.opponent()),
            ],
        }
    }

    /// Player 1, who moves first.
    pub fn first(&self) -> &Player {
        &self.players[0]
    }

    /// Player 2.
    pub fn second(&self) -> &Player {
        &self.players[1]
    }

    /// Player at seat `index` (0 or 1, wrapping).
    pub fn seat(&self, index: usize) -> &Player {
        &self.players[index % 2]
    }

    /// The player placing `mark`.
    pub fn holding(&self, mark: Mark) -> &Player {
        if *self.first().mark() == mark {
            self.first()
        } else {
            self.second()
        }
    }
}
