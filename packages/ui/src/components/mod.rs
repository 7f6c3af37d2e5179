mod footer;
mod memory_card;
mod navbar;
mod travel_card;

pub use footer::Footer;
pub use memory_card::MemoryCard;
pub use navbar::{NavPage, Navbar};
pub use travel_card::TravelCard;
