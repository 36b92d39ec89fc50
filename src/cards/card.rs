use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Equality is equality of `(rank, suit)`.
///
/// # Text
///
/// The canonical token is exactly two characters, rank upper case then suit
/// lower case: `"As"`, `"Td"`, `"7c"`. [`Card::parse`] is lenient about case,
/// surrounding whitespace, and the `"10"` spelling of ten; [`Card::format`]
/// always produces the canonical token. Payloads serialize cards as tokens.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

/// The only multi-character rank spelling users type.
const TEN_ALIAS: &str = "10";

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }

    /// Normalizes and parses a single user-entered token.
    ///
    /// Whitespace is trimmed, the first `"10"` becomes `T`, the first character
    /// is upper-cased and the second lower-cased. Anything that is not then
    /// exactly rank + suit is rejected whole.
    pub fn parse(token: &str) -> Result<Self, CardError> {
        let token = token.trim().replacen(TEN_ALIAS, "T", 1);
        let chars = token.chars().collect::<Vec<char>>();
        match chars.as_slice() {
            [r, s] => {
                let rank = Rank::try_from(r.to_ascii_uppercase())?;
                let suit = Suit::try_from(s.to_ascii_lowercase())?;
                Ok(Self::from((rank, suit)))
            }
            _ => Err(CardError::Shape(token)),
        }
    }
    /// Parses a string of concatenated canonical tokens, e.g. `"AsKsQsJs"`.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    pub fn parse_many(s: &str) -> Result<Vec<Self>, CardError> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::parse(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
    /// The canonical two-character token.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// All 52 cards in picker order: Ace down to Two, spades hearts diamonds clubs.
    pub fn picker() -> impl Iterator<Item = Card> {
        Rank::descending().flat_map(|r| Suit::picker().into_iter().map(move |s| Card::from((r, s))))
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
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
impl std::str::FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52u8))
    }
}

impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token).map_err(serde::de::Error::custom)
    }
}
