use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{AggregateId, AggregateRoot, Clock, DomainResult, SystemClock, validation};

/// Category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub AggregateId);

impl CategoryId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Shortest accepted `name`, in characters.
pub const NAME_MIN_LENGTH: usize = 3;
/// Longest accepted `name`, in characters.
pub const NAME_MAX_LENGTH: usize = 255;
/// Longest accepted `description`, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Aggregate root: Category (a catalog grouping).
///
/// Owns its fields and re-validates after every state-changing operation.
/// All mutation goes through [`Category::activate`], [`Category::deactivate`]
/// and [`Category::update`]; fields are read-only outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category, stamping `created_at` from the wall clock.
    ///
    /// `description` is required: `None` fails validation. Shorthand for
    /// [`Category::create`] with `is_active = true` and [`SystemClock`].
    pub fn new(name: impl Into<String>, description: Option<String>) -> DomainResult<Self> {
        Self::create(name, description, true, &SystemClock)
    }

    /// Create a category.
    ///
    /// Assigns a fresh identifier, captures `clock.now()` into `created_at`,
    /// and runs full validation. On failure no instance is observable.
    pub fn create(
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_fields(&name, description.as_deref())?;

        Ok(Self {
            id: CategoryId::new(AggregateId::new()),
            name,
            // Validated as present above; the fallback is unreachable.
            description: description.unwrap_or_default(),
            is_active,
            created_at: clock.now(),
        })
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Set the category active, then re-validate.
    ///
    /// Validation only ever touches `name`/`description`, so this cannot fail
    /// unless the entity was already invalid. The redundant re-check keeps a
    /// single validation choke-point for every mutation.
    pub fn activate(&mut self) -> DomainResult<()> {
        self.is_active = true;
        self.validate()
    }

    /// Set the category inactive, then re-validate.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.is_active = false;
        self.validate()
    }

    /// Replace `name`, and `description` when `Some`, then re-validate.
    ///
    /// Mutation happens before validation and there is no rollback: a failed
    /// update leaves the new field values in place, so callers must treat the
    /// entity as indeterminate after an `Err` and discard or repair it.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> DomainResult<()> {
        self.name = name.into();
        if let Some(description) = description {
            self.description = description;
        }
        self.validate()
    }

    /// Pure invariant check; fails fast on the first violated rule.
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, Some(&self.description))
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The five field rules, in fixed order.
///
/// The description max-length rule runs before its not-null rule: an absent
/// description passes the length bound (absence is not a length violation)
/// and is then rejected by `not_null`. Absence is only representable at the
/// construction/update boundary; a constructed entity always passes rule 5.
fn validate_fields(name: &str, description: Option<&str>) -> DomainResult<()> {
    validation::not_null_or_empty(Some(name), "Name")?;
    validation::min_length(Some(name), "Name", NAME_MIN_LENGTH)?;
    validation::max_length(Some(name), "Name", NAME_MAX_LENGTH)?;
    validation::max_length(description, "Description", DESCRIPTION_MAX_LENGTH)?;
    validation::not_null(description, "Description")?;
    Ok(())
}
