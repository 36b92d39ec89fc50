pub mod card;
pub use card::*;

pub mod choice;
pub use choice::*;

pub mod error;
pub use error::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
