//! HTTP handlers for the Vinoteca admin API

pub mod accommodations;
pub mod contacts;
pub mod customers;
pub mod delivery_schedules;
pub mod faqs;
pub mod health;
pub mod orders;
pub mod payment_methods;
pub mod payments;
pub mod settings;
pub mod stock_movements;
pub mod tastings;
pub mod wines;

pub use accommodations::*;
pub use contacts::*;
pub use customers::*;
pub use delivery_schedules::*;
pub use faqs::*;
pub use health::*;
pub use orders::*;
pub use payment_methods::*;
pub use payments::*;
pub use settings::*;
pub use stock_movements::*;
pub use tastings::*;
pub use wines::*;
