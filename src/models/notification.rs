use serde::Deserialize;

/// Display fields of a notification. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayloadNotification {
    pub title: Option<String>,
    pub body: Option<String>,
    pub android_channel_id: Option<String>,
    pub icon: Option<String>,
    pub sound: Option<String>,
    pub badge: Option<u32>,
    pub tag: Option<String>,
    pub color: Option<String>,
    pub click_action: Option<String>,
    pub body_loc_key: Option<String>,
    pub body_loc_args: Option<Vec<String>>,
    pub title_loc_key: Option<String>,
    pub title_loc_args: Option<Vec<String>>,
}

impl PayloadNotification {
    pub fn builder() -> PayloadNotificationBuilder {
        PayloadNotificationBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &PayloadNotification::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PayloadNotificationBuilder {
    notification: PayloadNotification,
}

impl PayloadNotificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.notification.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.notification.body = Some(body.into());
        self
    }

    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.notification.android_channel_id = Some(channel_id.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.notification.icon = Some(icon.into());
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.notification.sound = Some(sound.into());
        self
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.notification.badge = Some(badge);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.notification.tag = Some(tag.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.notification.color = Some(color.into());
        self
    }

    pub fn with_click_action(mut self, click_action: impl Into<String>) -> Self {
        self.notification.click_action = Some(click_action.into());
        self
    }

    pub fn with_body_loc_key(mut self, key: impl Into<String>) -> Self {
        self.notification.body_loc_key = Some(key.into());
        self
    }

    pub fn with_body_loc_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notification.body_loc_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_title_loc_key(mut self, key: impl Into<String>) -> Self {
        self.notification.title_loc_key = Some(key.into());
        self
    }

    pub fn with_title_loc_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notification.title_loc_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> PayloadNotification {
        self.notification
    }
}
