//! Literature (also known as Canadian Fish).
//!
//! Two teams compete to collect sets of six cards. On their turn a seat either
//! asks an opponent for a specific card or declares who holds every card of a
//! set. Wrong asks and wrong declarations burn the set to the other team.
//!
//! - 3v3: 54 cards, nine sets including the special set
//! - 4v4: 48 cards, eight sets

mod game;
mod snapshot;

pub use game::{LiteratureGame, LiteratureGameBuilder};
pub use snapshot::GameSnapshot;
