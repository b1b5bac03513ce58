pub mod carts;
pub mod menu;
pub mod orders;
pub mod system;
