pub mod balance;
pub mod cognitive;
pub mod decision;
pub mod demographics;
pub mod examination;
pub mod instrument;
pub mod scat6;
pub mod scoat6;
pub mod screens;
pub mod symptoms;
