//! Name-addressed starting positions.
//!
//! A [`ScenarioSpec`] names blessings, improvements and unit plans the way
//! content files do. [`ScenarioSpec::build`] resolves those names against a
//! [`Catalogue`] and lays out a [`GameState`].
use thiserror::Error;

use crate::catalogue::{Catalogue, UnitPlanId};
use crate::env::MapDimensions;
use crate::state::{
    Board, Faction, GameState, Player, Playstyle, Position, Quad, Settlement, Unit,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("player '{player}' references unknown blessing '{key}'")]
    UnknownBlessing { player: String, key: String },

    #[error("settlement '{settlement}' references unknown improvement '{name}'")]
    UnknownImprovement { settlement: String, name: String },

    #[error("'{owner}' references unknown unit plan '{name}'")]
    UnknownUnitPlan { owner: String, name: String },

    #[error("{what} at {position} lies outside the {width}x{height} board")]
    OutOfBounds {
        what: String,
        position: Position,
        width: u32,
        height: u32,
    },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
    pub dimensions: MapDimensions,
    /// Yield every quad starts with.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_quad: Quad,
    /// Per-quad overrides.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quads: Vec<(Position, Quad)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub relics: Vec<Position>,
    pub players: Vec<PlayerSpec>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub name: String,
    pub faction: Faction,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wealth: f64,
    /// Present for computer-controlled players.
    #[cfg_attr(feature = "serde", serde(default))]
    pub playstyle: Option<Playstyle>,
    /// Researched blessing keys.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blessings: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub settlements: Vec<SettlementSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: Vec<UnitSpec>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettlementSpec {
    pub name: String,
    pub location: Position,
    /// The settlement works every on-board quad within this many steps.
    #[cfg_attr(feature = "serde", serde(default = "default_work_radius"))]
    pub work_radius: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u8,
    #[cfg_attr(feature = "serde", serde(default = "default_satisfaction"))]
    pub satisfaction: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub improvements: Vec<String>,
    /// Unit plan names stationed inside the settlement.
    #[cfg_attr(feature = "serde", serde(default))]
    pub garrison: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub produced_settler: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    pub plan: String,
    pub location: Position,
}

#[cfg(feature = "serde")]
fn default_work_radius() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn default_level() -> u8 {
    Settlement::MIN_LEVEL
}

#[cfg(feature = "serde")]
fn default_satisfaction() -> f64 {
    Settlement::DEFAULT_SATISFACTION
}

impl ScenarioSpec {
    /// Resolves every name and lays out the initial state.
    pub fn build(&self, catalogue: &Catalogue) -> Result<GameState, ScenarioError> {
        let dims = self.dimensions;
        let mut board = Board::filled(dims, self.default_quad);

        for (position, quad) in &self.quads {
            let slot = board
                .quad_mut(*position)
                .ok_or_else(|| out_of_bounds("quad", *position, dims))?;
            *slot = *quad;
        }
        for relic in &self.relics {
            if !dims.contains(*relic) {
                return Err(out_of_bounds("relic", *relic, dims));
            }
            board.set_relic(*relic, true);
        }

        let players = self
            .players
            .iter()
            .map(|spec| spec.build(catalogue, dims))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameState::new(self.seed, board, players))
    }
}

impl PlayerSpec {
    fn build(&self, catalogue: &Catalogue, dims: MapDimensions) -> Result<Player, ScenarioError> {
        let mut player = Player::new(self.name.clone(), self.faction);
        player.wealth = self.wealth;
        player.playstyle = self.playstyle;

        for key in &self.blessings {
            let id = catalogue
                .blessing_id(key)
                .ok_or_else(|| ScenarioError::UnknownBlessing {
                    player: self.name.clone(),
                    key: key.clone(),
                })?;
            player.blessings.insert(id);
        }

        for spec in &self.settlements {
            player.settlements.push(spec.build(catalogue, dims)?);
        }

        for unit in &self.units {
            if !dims.contains(unit.location) {
                return Err(out_of_bounds(
                    &format!("unit '{}'", unit.plan),
                    unit.location,
                    dims,
                ));
            }
            player
                .units
                .push(make_unit(catalogue, &self.name, &unit.plan, unit.location)?);
        }

        Ok(player)
    }
}

impl SettlementSpec {
    fn build(
        &self,
        catalogue: &Catalogue,
        dims: MapDimensions,
    ) -> Result<Settlement, ScenarioError> {
        if !dims.contains(self.location) {
            return Err(out_of_bounds(
                &format!("settlement '{}'", self.name),
                self.location,
                dims,
            ));
        }

        let radius = self.work_radius.min(dims.width.max(dims.height));
        let quads = crate::state::spiral(self.location, radius)
            .filter(|position| dims.contains(*position))
            .collect();
        let mut settlement = Settlement::new(self.name.clone(), self.location, quads)
            .with_level(self.level)
            .with_satisfaction(self.satisfaction);
        settlement.produced_settler = self.produced_settler;

        for name in &self.improvements {
            let id = catalogue
                .improvement_id(name)
                .ok_or_else(|| ScenarioError::UnknownImprovement {
                    settlement: self.name.clone(),
                    name: name.clone(),
                })?;
            settlement.improvements.push(id);
        }
        for plan in &self.garrison {
            let unit = make_unit(catalogue, &self.name, plan, self.location)?;
            settlement.garrison.push(unit);
        }

        Ok(settlement)
    }
}

fn make_unit(
    catalogue: &Catalogue,
    owner: &str,
    plan_name: &str,
    location: Position,
) -> Result<Unit, ScenarioError> {
    let unknown = || ScenarioError::UnknownUnitPlan {
        owner: owner.to_string(),
        name: plan_name.to_string(),
    };
    let id: UnitPlanId = catalogue.unit_plan_id(plan_name).ok_or_else(unknown)?;
    let plan = catalogue.unit_plan(id).ok_or_else(unknown)?;
    Ok(Unit::new(id, plan, location))
}

fn out_of_bounds(what: &str, position: Position, dims: MapDimensions) -> ScenarioError {
    ScenarioError::OutOfBounds {
        what: what.to_string(),
        position,
        width: dims.width,
        height: dims.height,
    }
}
