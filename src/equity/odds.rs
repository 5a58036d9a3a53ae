/// A percentage expressed as odds against or in favour.
///
/// Below 50% the odds are how many times more likely the player is to
/// miss; at or above 50% they are how many times more likely to hit.
/// The two extremes have no finite odds and get their own variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Odds {
    Favorite(f64),
    Underdog(f64),
    Drawing,
    Lock,
}

impl From<f64> for Odds {
    fn from(p: f64) -> Self {
        if p <= 0.0 {
            Self::Drawing
        } else if p >= 100.0 {
            Self::Lock
        } else if p < 50.0 {
            Self::Underdog((100.0 - p) / p)
        } else {
            Self::Favorite(p / (100.0 - p))
        }
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Favorite(x) => write!(f, "{:.2}:1 fav", x),
            Self::Underdog(x) => write!(f, "{:.2}:1 dog", x),
            Self::Drawing => write!(f, "drawing dead"),
            Self::Lock => write!(f, "lock"),
        }
    }
}
