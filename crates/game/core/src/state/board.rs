//! The shared quad grid.
use crate::env::MapDimensions;
use crate::state::Position;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Biome {
    Desert,
    #[default]
    Forest,
    Sea,
    Mountain,
}

/// A single board cell with its per-resource yield.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Quad {
    pub biome: Biome,
    pub wealth: i32,
    pub harvest: i32,
    pub zeal: i32,
    pub fortune: i32,
    /// Set while an uninvestigated relic sits on this quad.
    pub is_relic: bool,
}

impl Quad {
    pub const fn new(biome: Biome, wealth: i32, harvest: i32, zeal: i32, fortune: i32) -> Self {
        Self {
            biome,
            wealth,
            harvest,
            zeal,
            fortune,
            is_relic: false,
        }
    }
}

/// Row-major grid of quads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    dimensions: MapDimensions,
    quads: Vec<Quad>,
}

impl Board {
    /// Creates a board with every quad set to `fill`.
    pub fn filled(dimensions: MapDimensions, fill: Quad) -> Self {
        Self {
            dimensions,
            quads: vec![fill; dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn quad(&self, position: Position) -> Option<&Quad> {
        self.index(position).and_then(|i| self.quads.get(i))
    }

    pub fn quad_mut(&mut self, position: Position) -> Option<&mut Quad> {
        self.index(position).and_then(|i| self.quads.get_mut(i))
    }

    pub fn is_relic(&self, position: Position) -> bool {
        self.quad(position).is_some_and(|quad| quad.is_relic)
    }

    /// Places or clears a relic. Positions off the board are ignored.
    pub fn set_relic(&mut self, position: Position, is_relic: bool) {
        if let Some(quad) = self.quad_mut(position) {
            quad.is_relic = is_relic;
        }
    }

    pub fn relic_count(&self) -> usize {
        self.quads.iter().filter(|quad| quad.is_relic).count()
    }

    /// Nearest relic within `radius` steps of `origin`, scanning ring by ring.
    ///
    /// The quad under `origin` is not considered. The radius is capped at the
    /// board's longer side, beyond which no quad can lie.
    pub fn nearest_relic(&self, origin: Position, radius: u32) -> Option<Position> {
        spiral(origin, self.reach(radius))
            .skip(1)
            .find(|position| self.is_relic(*position))
    }

    /// `radius` capped at the longest distance between two quads.
    pub fn reach(&self, radius: u32) -> u32 {
        radius.min(self.dimensions.width.max(self.dimensions.height))
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

/// Positions within `radius` of `origin`, nearest ring first.
///
/// Ring 0 is `origin` itself. Each later ring is walked row by row, top to
/// bottom and left to right. Positions may fall off the board; callers filter.
pub fn spiral(origin: Position, radius: u32) -> impl Iterator<Item = Position> {
    let radius = radius.min(i32::MAX as u32) as i32;
    (0..=radius).flat_map(move |ring| {
        (-ring..=ring).flat_map(move |dy| {
            (-ring..=ring)
                .filter(move |dx| dx.abs() == ring || dy.abs() == ring)
                .map(move |dx| origin.offset(dx, dy))
        })
    })
}
