pub mod apca;
pub mod checker;
pub mod composite;
pub mod hex;
pub mod wcag;
