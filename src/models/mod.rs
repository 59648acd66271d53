pub mod data;
pub mod fcm;
pub mod message;
pub mod notification;
pub mod options;
pub mod priority;
pub mod request;
pub mod target;
pub mod topics;
