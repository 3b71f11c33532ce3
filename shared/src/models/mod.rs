//! Domain models for the Vinoteca admin backend

pub mod accommodation;
pub mod contact;
pub mod customer;
pub mod delivery_schedule;
pub mod faq;
pub mod order;
pub mod payment;
pub mod payment_method;
pub mod settings;
pub mod stock_movement;
pub mod tasting;
pub mod wine;

pub use accommodation::*;
pub use contact::*;
pub use customer::*;
pub use delivery_schedule::*;
pub use faq::*;
pub use order::*;
pub use payment::*;
pub use payment_method::*;
pub use settings::*;
pub use stock_movement::*;
pub use tasting::*;
pub use wine::*;
