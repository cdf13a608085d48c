//! Shared card components for the dashboard. Each card receives already
//! aggregated data plus the load status of its fetch and only renders.

mod load_indicator;
pub use load_indicator::LoadIndicator;

mod status_card;
pub use status_card::StatusCard;

mod service_card;
pub use service_card::ServiceCard;

mod event_card;
pub use event_card::EventCard;
