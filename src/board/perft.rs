use super::{Piece, Position, PROMOTION_PIECES};

const NO_PROMOTION: [Option<Piece>; 1] = [None];
const PROMOTIONS: [Option<Piece>; 4] = [
    Some(PROMOTION_PIECES[0]),
    Some(PROMOTION_PIECES[1]),
    Some(PROMOTION_PIECES[2]),
    Some(PROMOTION_PIECES[3]),
];

impl Position {
    /// Count the positions reachable in exactly `depth` plies.
    ///
    /// Each promotion choice counts as its own move.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for (from, to) in self.walk_move_pairs() {
            let choices: &[Option<Piece>] = if self.is_promotion(from, to) {
                &PROMOTIONS
            } else {
                &NO_PROMOTION
            };
            for &promotion in choices {
                if depth == 1 {
                    nodes += 1;
                } else if let Ok(next) = self.apply_move(from, to, promotion) {
                    nodes += next.perft(depth - 1);
                }
            }
        }
        nodes
    }
}
