//! Business logic services for the Vinoteca admin backend

pub mod accommodations;
pub mod contacts;
pub mod customers;
pub mod delivery_schedules;
pub mod faqs;
pub mod orders;
pub mod payment_methods;
pub mod payments;
pub mod settings;
pub mod stock_movements;
pub mod tastings;
pub mod wines;

pub use accommodations::AccommodationService;
pub use contacts::ContactService;
pub use customers::CustomerService;
pub use delivery_schedules::DeliveryScheduleService;
pub use faqs::FaqService;
pub use orders::OrderService;
pub use payment_methods::PaymentMethodService;
pub use payments::PaymentService;
pub use settings::SettingService;
pub use stock_movements::StockMovementService;
pub use tastings::TastingService;
pub use wines::WineService;
