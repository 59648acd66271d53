pub mod clients;
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

pub use clients::fcm::FcmClient;
pub use errors::FcmError;
pub use models::{
    data::{PayloadData, PayloadDataBuilder},
    notification::{PayloadNotification, PayloadNotificationBuilder},
    options::{Options, OptionsBuilder},
    priority::Priority,
    request::{Request, RequestBuilder},
    target::{Recipient, Target},
    topics::{TopicTarget, Topics, TopicsBuilder},
};
