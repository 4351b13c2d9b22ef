//! Rewards handed out when a unit investigates a relic.
use crate::catalogue::Catalogue;
use crate::config::GameConfig;
use crate::state::{Board, Faction, Player, Position, Unit};

/// What a relic investigation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RelicOutcome {
    /// Progress toward the blessing being researched.
    Fortune,
    Wealth,
    /// The area around the relic is revealed.
    Vision,
    Health,
    Power,
    Stamina,
    /// The unit no longer costs upkeep.
    Upkeep,
    Nothing,
}

impl RelicOutcome {
    pub const WEALTH_REWARD: f64 = 25.0;
    pub const STAT_BOOST: f64 = 5.0;
    pub const VISION_RADIUS: i32 = 10;
    /// Rolls at or above this find nothing.
    pub const SUCCESS_THRESHOLD: u32 = 70;

    /// Maps a percentile roll (0-99) to an outcome for the given faction.
    pub fn from_roll(roll: u32, faction: Faction) -> Self {
        let roll = if faction == Faction::Scrutineers {
            roll % Self::SUCCESS_THRESHOLD
        } else {
            roll
        };

        match roll {
            0..10 => RelicOutcome::Fortune,
            10..20 => RelicOutcome::Wealth,
            20..30 => RelicOutcome::Vision,
            30..40 => RelicOutcome::Health,
            40..50 => RelicOutcome::Power,
            50..60 => RelicOutcome::Stamina,
            60..70 => RelicOutcome::Upkeep,
            _ => RelicOutcome::Nothing,
        }
    }
}

/// Applies the outcome of `roll` to the player and the investigating unit.
///
/// Fortune falls back to wealth when nothing is being researched, and vision
/// falls back to wealth when fog of war is disabled. The returned outcome is
/// the reward that was actually granted. Revealed quads are clipped to `board`.
pub fn investigate_relic(
    player: &mut Player,
    unit_index: usize,
    relic: Position,
    roll: u32,
    board: &Board,
    catalogue: &Catalogue,
    config: &GameConfig,
) -> RelicOutcome {
    match RelicOutcome::from_roll(roll, player.faction) {
        RelicOutcome::Fortune => {
            let blessing_cost = player
                .ongoing_blessing
                .and_then(|ongoing| catalogue.blessing(ongoing.blessing))
                .map(|blessing| blessing.cost);
            match blessing_cost {
                Some(cost) => {
                    if let Some(ongoing) = player.ongoing_blessing.as_mut() {
                        ongoing.fortune_consumed += cost / 5.0;
                    }
                    RelicOutcome::Fortune
                }
                None => grant_wealth(player),
            }
        }
        RelicOutcome::Wealth => grant_wealth(player),
        RelicOutcome::Vision if config.fog_of_war => {
            let radius = RelicOutcome::VISION_RADIUS;
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let seen = relic.offset(dx, dy);
                    if board.contains(seen) {
                        player.quads_seen.insert(seen);
                    }
                }
            }
            RelicOutcome::Vision
        }
        RelicOutcome::Vision => grant_wealth(player),
        outcome @ (RelicOutcome::Health
        | RelicOutcome::Power
        | RelicOutcome::Stamina
        | RelicOutcome::Upkeep) => {
            if let Some(unit) = player.units.get_mut(unit_index) {
                boost_unit(unit, outcome);
                outcome
            } else {
                RelicOutcome::Nothing
            }
        }
        RelicOutcome::Nothing => RelicOutcome::Nothing,
    }
}

fn grant_wealth(player: &mut Player) -> RelicOutcome {
    player.wealth += RelicOutcome::WEALTH_REWARD;
    RelicOutcome::Wealth
}

fn boost_unit(unit: &mut Unit, outcome: RelicOutcome) {
    match outcome {
        RelicOutcome::Health => {
            unit.health += RelicOutcome::STAT_BOOST;
            unit.plan.max_health += RelicOutcome::STAT_BOOST;
        }
        RelicOutcome::Power => unit.plan.power += RelicOutcome::STAT_BOOST,
        RelicOutcome::Stamina => {
            unit.plan.total_stamina += 1;
            unit.remaining_stamina += 1;
        }
        RelicOutcome::Upkeep => unit.plan.cost = 0.0,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrutineers_never_roll_nothing() {
        for roll in 0..100 {
            assert_ne!(
                RelicOutcome::from_roll(roll, Faction::Scrutineers),
                RelicOutcome::Nothing
            );
        }
        assert_eq!(
            RelicOutcome::from_roll(85, Faction::Capitalists),
            RelicOutcome::Nothing
        );
    }

    #[test]
    fn roll_bands_map_to_outcomes() {
        let faction = Faction::Infidels;
        assert_eq!(RelicOutcome::from_roll(5, faction), RelicOutcome::Fortune);
        assert_eq!(RelicOutcome::from_roll(15, faction), RelicOutcome::Wealth);
        assert_eq!(RelicOutcome::from_roll(25, faction), RelicOutcome::Vision);
        assert_eq!(RelicOutcome::from_roll(35, faction), RelicOutcome::Health);
        assert_eq!(RelicOutcome::from_roll(45, faction), RelicOutcome::Power);
        assert_eq!(RelicOutcome::from_roll(55, faction), RelicOutcome::Stamina);
        assert_eq!(RelicOutcome::from_roll(65, faction), RelicOutcome::Upkeep);
        assert_eq!(RelicOutcome::from_roll(90, faction), RelicOutcome::Nothing);
    }
}
