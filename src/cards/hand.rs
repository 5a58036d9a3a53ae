use super::card::Card;
use super::suit::Suit;
use crate::equity::EquityError;

/// Hand represents an unordered set of Cards.
///
/// Stored as a u64 where only the 52 LSBs are meaningful: bit `i` is set
/// iff `Card::from(i)` is a member. This keeps every set operation a single
/// bitwise instruction and avoids heap allocation for any size of set,
/// whether it holds two hole cards, a board, or the dead cards of a deal.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// all 52 cards
    pub const fn deck() -> Self {
        Self(Self::mask())
    }

    /// disjoint union. overlapping inputs are a logic error
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0, "{} overlaps {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn union(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }
    pub fn intersection(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 & rhs.0)
    }
    pub fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }

    /// the 52-card deck minus this set
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// the cards of this set that belong to a suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }

    pub fn remove(&mut self, card: Card) {
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 &= mask;
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001000100010000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// any number of cards, but each card at most once
impl TryFrom<&str> for Hand {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s)?
            .into_iter()
            .try_fold(Hand::empty(), |hand, card| match hand.contains(&card) {
                true => Err(EquityError::CardCollision(card)),
                false => Ok(Hand::add(hand, Hand::from(card))),
            })
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random::<u64>())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::C)), 0b_1000100010001); // C (2c, 6c, Tc, Ac)
        assert_eq!(u16::from(hand.of(&Suit::D)), 0b_0001000100010); // D (3d, 7d, Jd)
        assert_eq!(u16::from(hand.of(&Suit::H)), 0b_0010001000100); // H (4h, 8h, Qh)
        assert_eq!(u16::from(hand.of(&Suit::S)), 0b_0100010001000); // S (5s, 9s, Ks)
    }

    #[test]
    fn set_algebra() {
        let a = Hand::try_from("AsKs").unwrap();
        let b = Hand::try_from("KsQs").unwrap();
        assert_eq!(Hand::union(a, b), Hand::try_from("AsKsQs").unwrap());
        assert_eq!(Hand::intersection(a, b), Hand::try_from("Ks").unwrap());
        assert!(a.intersects(&b));
        assert!(a.contains(&Card::try_from("As").unwrap()));
        assert!(!a.contains(&Card::try_from("Qs").unwrap()));
        assert_eq!(a.size(), 2);
    }

    #[test]
    fn complement() {
        let hand = Hand::random();
        assert_eq!(hand.size() + hand.complement().size(), 52);
        assert!(!hand.intersects(&hand.complement()));
        assert_eq!(Hand::empty().complement(), Hand::deck());
    }

    #[test]
    fn duplicate_card() {
        assert_eq!(
            Hand::try_from("AhKdAh"),
            Err(EquityError::CardCollision(Card::try_from("Ah").unwrap()))
        );
    }

    #[test]
    fn display_sorted() {
        assert_eq!(Hand::try_from("Ah 2c Kd").unwrap().to_string(), "2cKdAh");
    }
}
