pub mod movement_card;
pub mod movement_list;

pub use movement_card::MovementCard;
pub use movement_list::MovementList;
