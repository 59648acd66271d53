use serde_json::{Map, Value};

use crate::{
    errors::FcmError,
    models::{
        data::PayloadData,
        fcm::{
            AndroidConfig, AndroidNotification, ApnsConfig, ApnsHeaders, ApnsPayload, Aps,
            ApsAlert, FcmMessage, FcmNotification, FcmRequest,
        },
        notification::PayloadNotification,
        options::Options,
        priority::Priority,
        target::{Recipient, Target, resolve_target},
        topics::Topics,
    },
    utils::prune,
};

const DEFAULT_SOUND: &str = "default";

/// One outgoing send: a resolved target plus everything it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    target: Target,
    options: Options,
    notification: PayloadNotification,
    data: PayloadData,
}

/// Platform settings derived from the options and notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub priority: Option<Priority>,
    pub sound: Option<String>,
}

impl Delivery {
    /// Priority encodings are rendered when the caller set a priority or sent
    /// any notification or options at all. The sound falls back to `default`
    /// only for a non-empty notification.
    pub fn resolve(options: &Options, notification: &PayloadNotification) -> Self {
        let has_payload = !options.is_empty() || !notification.is_empty();

        let priority = match options.priority() {
            Some(priority) => Some(priority),
            None if has_payload => Some(Priority::default()),
            None => None,
        };

        let sound = notification
            .sound
            .clone()
            .or_else(|| (!notification.is_empty()).then(|| DEFAULT_SOUND.to_string()));

        Self { priority, sound }
    }
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn notification(&self) -> &PayloadNotification {
        &self.notification
    }

    pub fn data(&self) -> &PayloadData {
        &self.data
    }

    /// The request body with every unset field pruned.
    pub fn body(&self) -> serde_json::Result<Value> {
        let value = serde_json::to_value(self.wire())?;
        Ok(prune(value).unwrap_or_else(|| Value::Object(Map::new())))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body()?)
    }

    fn wire(&self) -> FcmRequest {
        let delivery = Delivery::resolve(&self.options, &self.notification);
        let notification = &self.notification;
        let options = &self.options;

        let mut message = FcmMessage {
            notification: FcmNotification {
                title: notification.title.clone(),
                body: notification.body.clone(),
            },
            data: (!self.data.is_empty()).then(|| self.data.as_map().clone()),
            android: AndroidConfig {
                collapse_key: options.collapse_key().map(str::to_string),
                priority: delivery.priority.map(|p| p.android().to_string()),
                ttl: options.ttl_duration(),
                restricted_package_name: options.restricted_package_name().map(str::to_string),
                notification: AndroidNotification {
                    channel_id: notification.android_channel_id.clone(),
                    icon: notification.icon.clone(),
                    sound: delivery.sound.clone(),
                    tag: notification.tag.clone(),
                    color: notification.color.clone(),
                    click_action: notification.click_action.clone(),
                    body_loc_key: notification.body_loc_key.clone(),
                    body_loc_args: notification.body_loc_args.clone(),
                    title_loc_key: notification.title_loc_key.clone(),
                    title_loc_args: notification.title_loc_args.clone(),
                },
            },
            apns: ApnsConfig {
                payload: ApnsPayload {
                    aps: Aps {
                        badge: notification.badge,
                        sound: delivery.sound,
                        content_available: options.content_available().then_some(1),
                        mutable_content: options.mutable_content().then_some(1),
                        alert: ApsAlert {
                            loc_key: notification.body_loc_key.clone(),
                            loc_args: notification.body_loc_args.clone(),
                            title_loc_key: notification.title_loc_key.clone(),
                            title_loc_args: notification.title_loc_args.clone(),
                        },
                    },
                },
                headers: ApnsHeaders {
                    apns_priority: delivery.priority.map(|p| p.apns().to_string()),
                },
            },
            ..FcmMessage::default()
        };

        match &self.target {
            Target::Token(token) => message.token = Some(token.clone()),
            Target::Tokens(tokens) => message.tokens = Some(tokens.clone()),
            Target::Topic(topic) => message.topic = Some(topic.clone()),
            Target::Condition(condition) => message.condition = Some(condition.clone()),
        }

        FcmRequest {
            validate_only: options.dry_run().then_some(true),
            message,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    to: Option<Recipient>,
    topics: Option<Topics>,
    options: Option<Options>,
    notification: Option<PayloadNotification>,
    data: Option<PayloadData>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to(mut self, to: impl Into<Recipient>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn topics(mut self, topics: Topics) -> Self {
        self.topics = Some(topics);
        self
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    pub fn notification(mut self, notification: PayloadNotification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn data(mut self, data: PayloadData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> Result<Request, FcmError> {
        let target = resolve_target(self.to.as_ref(), self.topics.as_ref())?;

        Ok(Request {
            target,
            options: self.options.unwrap_or_default(),
            notification: self.notification.unwrap_or_default(),
            data: self.data.unwrap_or_default(),
        })
    }
}
