use super::rank::Rank;
use super::suit::Suit;
use crate::equity::EquityError;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: compact index `0..52`
/// - `u64`: single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards parse from two-character strings like `"As"` (ace of spades)
/// or `"tc"` (ten of clubs); either character may be in either case.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let text = s.trim();
        let chars = text.chars().collect::<Vec<char>>();
        match chars.as_slice() {
            [r, s] => {
                let invalid = |_| EquityError::InvalidCardText(text.to_string());
                let rank = Rank::try_from(r.to_string().as_str()).map_err(invalid)?;
                let suit = Suit::try_from(s.to_string().as_str()).map_err(invalid)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(EquityError::InvalidCardText(text.to_string())),
        }
    }
}

impl Card {
    /// Parses a string of card notations into a vector of cards.
    ///
    /// Whitespace and commas are ignored. Each card is two characters, rank
    /// then suit; ranks are upper-cased and suits lower-cased before lookup.
    /// A dangling single character fails like any other bad token.
    pub fn parse(s: &str) -> Result<Vec<Self>, EquityError> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect::<Vec<char>>()
            .chunks(2)
            .map(|pair| match pair {
                [r, s] => format!("{}{}", r.to_ascii_uppercase(), s.to_ascii_lowercase()),
                _ => pair.iter().collect::<String>(),
            })
            .map(|token| Self::try_from(token.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(0..52))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        let suit = card.suit();
        let rank = card.rank();
        assert!(card == Card::from((rank, suit)));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::random();
        assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
    }

    #[test]
    fn encoding_order() {
        assert_eq!(u8::from(Card::try_from("2c").unwrap()), 0);
        assert_eq!(u8::from(Card::try_from("2s").unwrap()), 3);
        assert_eq!(u8::from(Card::try_from("Ts").unwrap()), 35);
        assert_eq!(u8::from(Card::try_from("As").unwrap()), 51);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(Card::try_from("aH").unwrap(), Card::try_from("Ah").unwrap());
        assert_eq!(Card::try_from("tc").unwrap(), Card::try_from("TC").unwrap());
    }

    #[test]
    fn invalid_text() {
        assert_eq!(
            Card::try_from("Ax"),
            Err(EquityError::InvalidCardText("Ax".to_string()))
        );
        assert_eq!(
            Card::try_from("1h"),
            Err(EquityError::InvalidCardText("1h".to_string()))
        );
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("Ahh").is_err());
    }

    #[test]
    fn parse_separated() {
        let cards = Card::parse("as, KD\nqh").unwrap();
        assert_eq!(cards.iter().map(|c| c.to_string()).collect::<Vec<_>>(), ["As", "Kd", "Qh"]);
        assert_eq!(Card::parse("AsK"), Err(EquityError::InvalidCardText("K".to_string())));
        assert!(Card::parse("").unwrap().is_empty());
    }
}
