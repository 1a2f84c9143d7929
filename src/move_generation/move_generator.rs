use crate::game_state::board_state::BoardState;
use crate::game_state::othello_types::{Color, SquareSet};
use crate::move_generation::directional_scan::DirectionalScanGenerator;
use crate::move_generation::kogge_stone::KoggeStoneGenerator;

/// Legal-destination enumeration. Implementations must be pure and agree on
/// every board: an empty result means the mover has to pass.
pub trait MoveGenerator: Send + Sync {
    fn legal_moves(&self, board: &BoardState, mover: Color) -> SquareSet;
}

/// Selects which generator a `GameState` consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    DirectionalScan,
    #[default]
    KoggeStone,
}

static DIRECTIONAL_SCAN: DirectionalScanGenerator = DirectionalScanGenerator;
static KOGGE_STONE: KoggeStoneGenerator = KoggeStoneGenerator;

impl GeneratorKind {
    pub fn generator(self) -> &'static dyn MoveGenerator {
        match self {
            GeneratorKind::DirectionalScan => &DIRECTIONAL_SCAN,
            GeneratorKind::KoggeStone => &KOGGE_STONE,
        }
    }
}
