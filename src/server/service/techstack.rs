//! Technology taxonomy service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::techstack::TechStackRepository,
    error::{
        validation::{ErrorCode, FieldError, ValidationError},
        Error,
    },
    model::techstack::{TechKind, TechTerm, TERM_NAME_MAX_LENGTH},
    util::validate::{validate_max_length, validate_required},
};

/// Message for a term name already used within its kind.
pub const TERM_EXISTS_TEXT: &str = "Already exists.";

/// Service for the technology, framework and specialization taxonomies.
pub struct TechStackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TechStackService<'a> {
    /// Creates a new instance of TechStackService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a term to the taxonomy of the given kind.
    ///
    /// # Returns
    /// - `Ok(TechTerm)` - Term created
    /// - `Err(Error::ValidationError)` - Blank, too long or already existing name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_term(&self, kind: TechKind, name: &str) -> Result<TechTerm, Error> {
        validate_required("name", name).map_err(ValidationError::from)?;
        validate_max_length("name", name, TERM_NAME_MAX_LENGTH).map_err(ValidationError::from)?;

        let txn = self.db.begin().await?;
        let techstack_repo = TechStackRepository::new(&txn);

        if techstack_repo.find_by_name(kind, name).await?.is_some() {
            return Err(ValidationError::from(FieldError::new(
                "name",
                ErrorCode::Unique,
                TERM_EXISTS_TEXT,
            ))
            .into());
        }

        let term = techstack_repo.create(kind, name.to_string()).await?;
        txn.commit().await?;

        tracing::debug!("Created {} {} with ID {}", kind, term, term.id);

        Ok(term)
    }

    /// Lists every term of a kind, ordered by name.
    pub async fn list_terms(&self, kind: TechKind) -> Result<Vec<TechTerm>, Error> {
        Ok(TechStackRepository::new(self.db).list(kind).await?)
    }

    /// Finds a term of `kind` by exact name.
    pub async fn find_by_name(&self, kind: TechKind, name: &str) -> Result<Option<TechTerm>, Error> {
        Ok(TechStackRepository::new(self.db)
            .find_by_name(kind, name)
            .await?)
    }
}
