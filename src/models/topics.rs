use crate::errors::FcmError;

/// FCM rejects conditions that reference more topics than this.
pub const MAX_CONDITION_TOPICS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    And,
    Or,
}

impl Operator {
    fn as_str(&self) -> &'static str {
        match self {
            Operator::And => " && ",
            Operator::Or => " || ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Topic(String),
    Group(Vec<Clause>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Clause {
    operator: Option<Operator>,
    term: Term,
}

/// What a topic descriptor resolves to on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicTarget {
    /// Bare topic name for `message.topic`.
    Topic(String),
    /// Boolean expression for `message.condition`.
    Condition(String),
}

/// A validated topic descriptor: one topic, or several combined with `&&` / `||`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topics {
    clauses: Vec<Clause>,
}

impl Topics {
    pub fn builder() -> TopicsBuilder {
        TopicsBuilder::default()
    }

    pub fn single(name: impl Into<String>) -> Result<Self, FcmError> {
        TopicsBuilder::new().topic(name).build()
    }

    pub fn has_only_one_topic(&self) -> bool {
        matches!(self.clauses.as_slice(), [Clause { term: Term::Topic(_), .. }])
    }

    pub fn topic_count(&self) -> usize {
        count_topics(&self.clauses)
    }

    pub fn target(&self) -> TopicTarget {
        match self.clauses.as_slice() {
            [Clause { term: Term::Topic(name), .. }] => TopicTarget::Topic(name.clone()),
            clauses => TopicTarget::Condition(render(clauses)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TopicsBuilder {
    clauses: Vec<Clause>,
    error: Option<FcmError>,
}

impl TopicsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(self, name: impl Into<String>) -> Self {
        self.push(None, Term::Topic(name.into()))
    }

    pub fn and_topic(self, name: impl Into<String>) -> Self {
        self.push(Some(Operator::And), Term::Topic(name.into()))
    }

    pub fn or_topic(self, name: impl Into<String>) -> Self {
        self.push(Some(Operator::Or), Term::Topic(name.into()))
    }

    /// Opens a parenthesised group as the first term.
    pub fn group<F>(self, build: F) -> Self
    where
        F: FnOnce(TopicsBuilder) -> TopicsBuilder,
    {
        self.nest(None, build)
    }

    pub fn and_group<F>(self, build: F) -> Self
    where
        F: FnOnce(TopicsBuilder) -> TopicsBuilder,
    {
        self.nest(Some(Operator::And), build)
    }

    pub fn or_group<F>(self, build: F) -> Self
    where
        F: FnOnce(TopicsBuilder) -> TopicsBuilder,
    {
        self.nest(Some(Operator::Or), build)
    }

    pub fn build(self) -> Result<Topics, FcmError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        if self.clauses.is_empty() {
            return Err(FcmError::NoTopicProvided);
        }

        validate(&self.clauses)?;

        let mut clauses = self.clauses;
        while let [Clause { term: Term::Group(inner), .. }] = clauses.as_mut_slice() {
            let mut inner = std::mem::take(inner);
            inner[0].operator = None;
            clauses = inner;
        }

        let count = count_topics(&clauses);
        if count > MAX_CONDITION_TOPICS {
            return Err(FcmError::TooManyTopics(count));
        }

        Ok(Topics { clauses })
    }

    fn push(mut self, operator: Option<Operator>, term: Term) -> Self {
        self.clauses.push(Clause { operator, term });
        self
    }

    fn nest<F>(mut self, operator: Option<Operator>, build: F) -> Self
    where
        F: FnOnce(TopicsBuilder) -> TopicsBuilder,
    {
        let nested = build(TopicsBuilder::new());

        if let Some(error) = nested.error {
            self.error.get_or_insert(error);
            return self;
        }

        if nested.clauses.is_empty() {
            self.error.get_or_insert(FcmError::EmptyTopicGroup);
            return self;
        }

        self.push(operator, Term::Group(nested.clauses))
    }
}

fn validate(clauses: &[Clause]) -> Result<(), FcmError> {
    for (index, clause) in clauses.iter().enumerate() {
        match (index, clause.operator) {
            (0, Some(_)) => return Err(FcmError::MisplacedOperator),
            (i, None) if i > 0 => return Err(FcmError::MissingOperator),
            _ => {}
        }

        match &clause.term {
            Term::Topic(name) => validate_topic_name(name)?,
            Term::Group(inner) => validate(inner)?,
        }
    }

    Ok(())
}

fn validate_topic_name(name: &str) -> Result<(), FcmError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '%'));

    if valid {
        Ok(())
    } else {
        Err(FcmError::InvalidTopicName(name.to_string()))
    }
}

fn count_topics(clauses: &[Clause]) -> usize {
    clauses
        .iter()
        .map(|clause| match &clause.term {
            Term::Topic(_) => 1,
            Term::Group(inner) => count_topics(inner),
        })
        .sum()
}

fn render(clauses: &[Clause]) -> String {
    let mut condition = String::new();

    for clause in clauses {
        if let Some(operator) = clause.operator {
            condition.push_str(operator.as_str());
        }

        match &clause.term {
            Term::Topic(name) => {
                condition.push('\'');
                condition.push_str(name);
                condition.push_str("' in topics");
            }
            Term::Group(inner) => {
                condition.push('(');
                condition.push_str(&render(inner));
                condition.push(')');
            }
        }
    }

    condition
}
