//! Event use-case service.
//!
//! # Responsibility
//! - Accept the raw form payload (`title`, `time_range`) and drive the
//!   parse/validate/bind/persist flow for create and update.
//! - Hand the presentation layer formatted strings for redisplay.
//!
//! # Invariants
//! - `now` is read once per submission and flows through every check.
//! - A failed submission persists nothing; the first failure is surfaced
//!   with its user-facing message.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use log::info;

use crate::model::event::{Event, EventId};
use crate::range::field::FieldError;
use crate::range::form::TimeRangedForm;
use crate::range::{format, RangeConfig, TimeRange};
use crate::repo::event_repo::{EventListQuery, EventRepository, RepoError};

/// Raw submission payload, exactly as the presentation layer collects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormData {
    pub title: String,
    /// Combined `"<start> - <end>"` string from the single text input.
    pub time_range: String,
}

/// Service error for event use-cases.
#[derive(Debug)]
pub enum EventServiceError {
    /// User-facing failure on the `time_range` field.
    Field(FieldError),
    /// Target event does not exist.
    EventNotFound(EventId),
    /// Persistence-layer failure, including record validation.
    Repo(RepoError),
}

impl Display for EventServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EventServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::EventNotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<FieldError> for EventServiceError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<RepoError> for EventServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case wrapper binding the range form to an event repository.
pub struct EventService<R: EventRepository> {
    repo: R,
    config: RangeConfig,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a service with the default range configuration.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, RangeConfig::default())
    }

    pub fn with_config(repo: R, config: RangeConfig) -> Self {
        Self { repo, config }
    }

    /// Creates an event from one submission.
    ///
    /// # Contract
    /// - The range string is cleaned against `now`; the cleaned pair is
    ///   written to `time_start`/`time_end` before the insert.
    /// - Returns the created stable event ID.
    pub fn create_event(
        &self,
        data: &EventFormData,
        now: DateTime<Utc>,
    ) -> Result<EventId, EventServiceError> {
        let form = TimeRangedForm::for_new(self.config.clone());
        let range = form.clean(&data.time_range, now)?;

        let event = Event::new(data.title.clone(), range.start, range.end);
        let id = self.repo.create_event(&event)?;

        info!(
            "event=event_create module=service status=ok event_id={id} start_ms={} end_ms={}",
            range.start.timestamp_millis(),
            range.end.timestamp_millis()
        );

        Ok(id)
    }

    /// Re-binds an existing event from one submission and persists it.
    pub fn update_event(
        &self,
        id: EventId,
        data: &EventFormData,
        now: DateTime<Utc>,
    ) -> Result<(), EventServiceError> {
        let mut event = self
            .repo
            .get_event(id)?
            .ok_or(EventServiceError::EventNotFound(id))?;

        let form = TimeRangedForm::for_instance(&event, self.config.clone());
        form.bind(&mut event, &data.time_range, now)?;
        event.title = data.title.clone();

        self.repo.update_event(&event)?;

        info!(
            "event=event_update module=service status=ok event_id={id} start_ms={} end_ms={}",
            event.time_start.timestamp_millis(),
            event.time_end.timestamp_millis()
        );

        Ok(())
    }

    pub fn get_event(&self, id: EventId) -> Result<Option<Event>, EventServiceError> {
        Ok(self.repo.get_event(id)?)
    }

    pub fn list_events(&self, query: &EventListQuery) -> Result<Vec<Event>, EventServiceError> {
        Ok(self.repo.list_events(query)?)
    }

    /// Initial value for an empty create form: the next-full-hour pair.
    pub fn render_new_form(&self, now: DateTime<Utc>) -> String {
        TimeRangedForm::for_new(self.config.clone()).render_value(None, now)
    }

    /// Initial value for an edit form, built from the record's two
    /// timestamp attributes.
    pub fn render_edit_form(&self, event: &Event, now: DateTime<Utc>) -> String {
        TimeRangedForm::for_instance(event, self.config.clone()).render_value(None, now)
    }

    /// Read-only `&ndash;` display string for listings.
    pub fn display_range(&self, event: &Event) -> String {
        format::display_range_str(
            &TimeRange::new(event.time_start, event.time_end),
            &self.config,
        )
    }
}
