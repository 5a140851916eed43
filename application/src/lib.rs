pub mod auth_service;
pub mod blog_service;
pub mod booking_service;
pub mod cart_service;
pub mod catalog_service;
pub mod chatbot_service;
pub mod payment_service;
pub mod team_service;
