use crate::cards::Hand;
use crate::cards::Hole;

/// Lazy Cartesian product of one hole per player.
///
/// Walks the product like an odometer: the last player's choice turns
/// fastest and the first player's slowest. Combinations where two holes
/// share a card, or a hole touches the board, are skipped.
#[derive(Debug, Clone)]
pub struct Matchups {
    choices: Vec<Vec<Hole>>,
    index: Vec<usize>,
    board: Hand,
    done: bool,
}

impl Matchups {
    pub fn new(choices: Vec<Vec<Hole>>, board: Hand) -> Self {
        let done = choices.is_empty() || choices.iter().any(|c| c.is_empty());
        Self {
            index: vec![0; choices.len()],
            choices,
            board,
            done,
        }
    }
    fn current(&self) -> Vec<Hole> {
        self.index
            .iter()
            .zip(self.choices.iter())
            .map(|(i, c)| c[*i])
            .collect()
    }
    fn turn(&mut self) {
        for (i, choice) in self.index.iter_mut().zip(self.choices.iter()).rev() {
            *i += 1;
            if *i < choice.len() {
                return;
            }
            *i = 0;
        }
        self.done = true;
    }
    /// the board plus every hole, or None if any two overlap
    pub fn dead(holes: &[Hole], board: Hand) -> Option<Hand> {
        holes
            .iter()
            .map(|h| Hand::from(*h))
            .try_fold(board, |dead, hole| match dead.intersects(&hole) {
                true => None,
                false => Some(Hand::add(dead, hole)),
            })
    }
}

impl Iterator for Matchups {
    type Item = Vec<Hole>;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let holes = self.current();
            self.turn();
            if Self::dead(&holes, self.board).is_some() {
                return Some(holes);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::Range;

    fn choices(ranges: &[&str]) -> Vec<Vec<Hole>> {
        ranges
            .iter()
            .map(|r| Range::try_from(*r).unwrap().holes().to_vec())
            .collect()
    }

    #[test]
    fn fixed_hands_make_one_matchup() {
        let matchups = Matchups::new(choices(&["AhKh", "QsQd"]), Hand::empty());
        assert_eq!(matchups.count(), 1);
    }

    #[test]
    fn odometer_order() {
        let choices = choices(&["AhKh 2c2d", "QsQd 7c8c"]);
        let matchups = Matchups::new(choices.clone(), Hand::empty()).collect::<Vec<_>>();
        assert_eq!(
            matchups,
            vec![
                vec![choices[0][0], choices[1][0]],
                vec![choices[0][0], choices[1][1]],
                vec![choices[0][1], choices[1][0]],
                vec![choices[0][1], choices[1][1]],
            ]
        );
    }

    #[test]
    fn skips_shared_cards() {
        let matchups = Matchups::new(choices(&["AhKh AsKs", "AhQd JcTc"]), Hand::empty());
        assert_eq!(matchups.count(), 3);
    }

    #[test]
    fn skips_board_collisions() {
        let board = Hand::try_from("Ks 7d 2c").unwrap();
        let matchups = Matchups::new(choices(&["AhKh AsKs", "QsQd"]), board);
        assert_eq!(matchups.count(), 1);
    }

    #[test]
    fn empty_choice_yields_nothing() {
        let matchups = Matchups::new(vec![vec![], choices(&["QsQd"]).remove(0)], Hand::empty());
        assert_eq!(matchups.count(), 0);
    }

    #[test]
    fn dead_cards() {
        let holes = choices(&["AhKh", "QsQd"]).concat();
        let board = Hand::try_from("2c 3c 4c").unwrap();
        assert_eq!(Matchups::dead(&holes, board).map(|d| d.size()), Some(7));
        let holes = choices(&["AhKh", "AhQd"]).concat();
        assert_eq!(Matchups::dead(&holes, board), None);
    }
}
