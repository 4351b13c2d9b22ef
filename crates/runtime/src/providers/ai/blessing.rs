//! Blessing research selection for computer players.

use game_core::{AttackStyle, BlessingId, Catalogue, Player, Resource, Totals};

use super::scoring::first_max;

/// Chooses the next blessing a computer player researches.
///
/// Aggressive players chase new unit plans and defensive players chase
/// fortifications. Everyone else, and those two once their preference is
/// exhausted, researches whichever blessing unlocks the most of their lacking
/// resource.
#[derive(Clone, Copy)]
pub struct BlessingSelector<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> BlessingSelector<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// The blessing to research next, or `None` once everything is researched.
    pub fn choose(&self, player: &Player, totals: Totals) -> Option<BlessingId> {
        let catalogue = self.catalogue;
        let attacking = player.playstyle.unwrap_or_default().attacking;

        if catalogue.unresearched_blessings(player).next().is_none() {
            tracing::debug!(player = %player.name, "BlessingSelector: all blessings researched");
            return None;
        }

        let preferred = match attacking {
            AttackStyle::Aggressive => catalogue
                .unresearched_blessings(player)
                .find(|(id, _)| catalogue.unlocks_units(*id)),
            AttackStyle::Defensive => catalogue
                .unresearched_blessings(player)
                .find(|(id, _)| catalogue.unlocks_strength(*id)),
            AttackStyle::Neutral => None,
        };
        if let Some((id, blessing)) = preferred {
            tracing::debug!(
                player = %player.name,
                ?attacking,
                blessing = %blessing.name,
                "BlessingSelector: playstyle preference"
            );
            return Some(id);
        }

        let lacking = totals.lacking();
        let pick = first_max(
            catalogue
                .unresearched_blessings(player)
                .filter(|(id, _)| !self.is_excluded(*id, attacking)),
            |(id, _)| self.unlocked_value(*id, lacking),
        );

        tracing::debug!(
            player = %player.name,
            %lacking,
            blessing = ?pick.map(|(_, b)| b.name.as_str()),
            "BlessingSelector: lacking resource"
        );
        pick.map(|(id, _)| id)
    }

    /// Chooses and starts research, leaving the player untouched when
    /// nothing is left.
    pub fn select(&self, player: &mut Player, totals: Totals) -> Option<BlessingId> {
        let blessing = self.choose(player, totals)?;
        player.begin_blessing(blessing);
        Some(blessing)
    }

    /// Sum of `resource` over every improvement the blessing unlocks.
    pub fn unlocked_value(&self, blessing: BlessingId, resource: Resource) -> f64 {
        self.catalogue
            .unlocked_improvements(blessing)
            .map(|(_, imp)| f64::from(resource.of_effect(&imp.effect)))
            .sum()
    }

    fn is_excluded(&self, blessing: BlessingId, attacking: AttackStyle) -> bool {
        match attacking {
            AttackStyle::Aggressive => self.catalogue.unlocks_units(blessing),
            AttackStyle::Defensive => self.catalogue.unlocks_strength(blessing),
            AttackStyle::Neutral => false,
        }
    }
}
