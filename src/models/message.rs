use serde::Deserialize;

use crate::{
    errors::FcmError,
    models::{
        data::PayloadData,
        notification::PayloadNotification,
        options::Options,
        request::Request,
        target::Recipient,
        topics::{Topics, TopicsBuilder},
    },
};

/// A request described as JSON, as read by the `fcm_send` binary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageSpec {
    pub to: Option<Recipient>,
    pub topics: Option<TopicsSpec>,
    pub options: Option<Options>,
    pub notification: Option<PayloadNotification>,
    pub data: Option<PayloadData>,
}

/// `"news"`, `{"any": ["a", "b"]}` or `{"all": ["a", "b"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TopicsSpec {
    Single(String),
    Any { any: Vec<String> },
    All { all: Vec<String> },
}

impl TopicsSpec {
    pub fn into_topics(self) -> Result<Topics, FcmError> {
        match self {
            TopicsSpec::Single(name) => Topics::single(name),
            TopicsSpec::Any { any } => chain(any, |builder, name| builder.or_topic(name)),
            TopicsSpec::All { all } => chain(all, |builder, name| builder.and_topic(name)),
        }
    }
}

fn chain(
    names: Vec<String>,
    join: fn(TopicsBuilder, String) -> TopicsBuilder,
) -> Result<Topics, FcmError> {
    let mut names = names.into_iter();
    let Some(first) = names.next() else {
        return Err(FcmError::NoTopicProvided);
    };

    names
        .fold(TopicsBuilder::new().topic(first), join)
        .build()
}

impl MessageSpec {
    pub fn into_request(self) -> Result<Request, FcmError> {
        let mut builder = Request::builder();

        if let Some(to) = self.to {
            builder = builder.to(to);
        }
        if let Some(topics) = self.topics {
            builder = builder.topics(topics.into_topics()?);
        }
        if let Some(options) = self.options {
            builder = builder.options(options);
        }
        if let Some(notification) = self.notification {
            builder = builder.notification(notification);
        }
        if let Some(data) = self.data {
            builder = builder.data(data);
        }

        builder.build()
    }
}
