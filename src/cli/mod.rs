pub mod convert;
pub mod prices;
pub mod setup;
pub mod sum;
pub mod ui;
