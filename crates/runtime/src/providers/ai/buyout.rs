//! Finishing constructions early with wealth.
//!
//! A computer player only buys out when its treasury holds a comfortable
//! multiple of the price, so a single purchase never empties it.

use game_core::{
    Catalogue, ConstructionTarget, GameConfig, Player, buyout_construction, buyout_price,
};

/// A construction finished with wealth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Buyout {
    pub target: ConstructionTarget,
    pub price: f64,
}

pub struct BuyoutPolicy<'a> {
    catalogue: &'a Catalogue,
    config: &'a GameConfig,
}

impl<'a> BuyoutPolicy<'a> {
    pub fn new(catalogue: &'a Catalogue, config: &'a GameConfig) -> Self {
        Self { catalogue, config }
    }

    pub fn should_buy(&self, wealth: f64, price: f64) -> bool {
        wealth >= price * self.config.ai.buyout_wealth_multiple
    }

    /// Buys out the settlement's current construction when the player can
    /// comfortably afford it.
    pub fn run(&self, player: &mut Player, settlement_index: usize) -> Option<Buyout> {
        let settlement = player.settlements.get(settlement_index)?;
        let price = buyout_price(self.catalogue, settlement)?;
        if !self.should_buy(player.wealth, price) {
            tracing::debug!(
                settlement = %settlement.name,
                price,
                wealth = player.wealth,
                "BuyoutPolicy: too expensive"
            );
            return None;
        }

        let target = buyout_construction(self.catalogue, player, settlement_index)?;
        tracing::debug!(?target, price, wealth = player.wealth, "BuyoutPolicy: bought out");
        Some(Buyout { target, price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        CatalogueSpec, Effect, Faction, ImprovementCategory, ImprovementSpec, Position,
        Settlement, UnitPlanSpec,
    };

    fn catalogue() -> Catalogue {
        Catalogue::compile(CatalogueSpec {
            blessings: Vec::new(),
            improvements: vec![ImprovementSpec {
                name: "Granary".into(),
                description: String::new(),
                category: ImprovementCategory::Bountiful,
                cost: 30.0,
                tier: 1,
                requires: None,
                effect: Effect {
                    harvest: 3,
                    ..Effect::NONE
                },
            }],
            projects: Vec::new(),
            unit_plans: vec![UnitPlanSpec {
                name: "Scout".into(),
                power: 10.0,
                max_health: 10.0,
                total_stamina: 2,
                cost: 5.0,
                requires: None,
                can_settle: false,
                heals: false,
            }],
        })
        .expect("catalogue compiles")
    }

    fn player_building_granary(catalogue: &Catalogue, wealth: f64) -> Player {
        let granary = catalogue.improvement_id("Granary").expect("granary");
        let mut town = Settlement::new("Market", Position::new(3, 3), vec![Position::new(3, 3)]);
        town.set_current_work(ConstructionTarget::Improvement(granary));
        if let Some(work) = town.current_work.as_mut() {
            work.zeal_consumed = 20.0;
        }

        let mut player = Player::new("Merchant", Faction::Capitalists);
        player.wealth = wealth;
        player.settlements.push(town);
        player
    }

    #[test]
    fn wealth_must_cover_the_configured_multiple() {
        let catalogue = catalogue();
        let config = GameConfig::default();
        let policy = BuyoutPolicy::new(&catalogue, &config);

        assert!(policy.should_buy(20.0, 10.0));
        assert!(!policy.should_buy(19.9, 10.0));
        assert!(policy.should_buy(0.0, 0.0));
    }

    #[test]
    fn buys_out_when_comfortably_rich() {
        let catalogue = catalogue();
        let config = GameConfig::default();
        let policy = BuyoutPolicy::new(&catalogue, &config);

        let mut player = player_building_granary(&catalogue, 25.0);
        let bought = policy.run(&mut player, 0).expect("bought out");
        assert_eq!(bought.price, 10.0);
        assert_eq!(player.wealth, 15.0);
        assert!(player.settlements[0].current_work.is_none());
        assert_eq!(player.settlements[0].improvements.len(), 1);
    }

    #[test]
    fn keeps_building_when_the_margin_is_thin() {
        let catalogue = catalogue();
        let config = GameConfig::default();
        let policy = BuyoutPolicy::new(&catalogue, &config);

        let mut player = player_building_granary(&catalogue, 15.0);
        assert_eq!(policy.run(&mut player, 0), None);
        assert_eq!(player.wealth, 15.0);
        assert!(player.settlements[0].current_work.is_some());
    }
}
