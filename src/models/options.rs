use serde::Deserialize;

use crate::{errors::FcmError, models::priority::Priority};

/// Longest time FCM keeps an undelivered message: four weeks.
pub const MAX_TIME_TO_LIVE_SECONDS: u64 = 2_419_200;

/// Delivery options for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "OptionsBuilder")]
pub struct Options {
    priority: Option<Priority>,
    time_to_live: Option<u64>,
    collapse_key: Option<String>,
    restricted_package_name: Option<String>,
    content_available: bool,
    mutable_content: bool,
    dry_run: bool,
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Seconds, never above [`MAX_TIME_TO_LIVE_SECONDS`].
    pub fn time_to_live(&self) -> Option<u64> {
        self.time_to_live
    }

    pub fn collapse_key(&self) -> Option<&str> {
        self.collapse_key.as_deref()
    }

    pub fn restricted_package_name(&self) -> Option<&str> {
        self.restricted_package_name.as_deref()
    }

    pub fn content_available(&self) -> bool {
        self.content_available
    }

    pub fn mutable_content(&self) -> bool {
        self.mutable_content
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn is_empty(&self) -> bool {
        self == &Options::default()
    }

    /// `android.ttl` as a protobuf duration.
    pub fn ttl_duration(&self) -> Option<String> {
        self.time_to_live.map(|seconds| format!("{}s", seconds))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionsBuilder {
    priority: Option<Priority>,
    time_to_live: Option<u64>,
    collapse_key: Option<String>,
    restricted_package_name: Option<String>,
    content_available: bool,
    mutable_content: bool,
    dry_run: bool,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_time_to_live(mut self, seconds: u64) -> Self {
        self.time_to_live = Some(seconds);
        self
    }

    pub fn with_collapse_key(mut self, collapse_key: impl Into<String>) -> Self {
        self.collapse_key = Some(collapse_key.into());
        self
    }

    pub fn with_restricted_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.restricted_package_name = Some(package_name.into());
        self
    }

    pub fn with_content_available(mut self, content_available: bool) -> Self {
        self.content_available = content_available;
        self
    }

    pub fn with_mutable_content(mut self, mutable_content: bool) -> Self {
        self.mutable_content = mutable_content;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn build(self) -> Result<Options, FcmError> {
        if let Some(ttl) = self.time_to_live {
            if ttl > MAX_TIME_TO_LIVE_SECONDS {
                return Err(FcmError::InvalidTimeToLive(ttl));
            }
        }

        Ok(Options {
            priority: self.priority,
            time_to_live: self.time_to_live,
            collapse_key: self.collapse_key,
            restricted_package_name: self.restricted_package_name,
            content_available: self.content_available,
            mutable_content: self.mutable_content,
            dry_run: self.dry_run,
        })
    }
}

impl TryFrom<OptionsBuilder> for Options {
    type Error = FcmError;

    fn try_from(builder: OptionsBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
