use serde::{Deserialize, Serialize};

use crate::database::models::{
    About, AboutInput, BlogPost, BlogPostInput, Contact, ContactInput, FieldErrors, MissingFields,
    Project, ProjectInput,
};
use crate::database::{Database, DatabaseError};

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Invalid import document: {0:?}")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for TransferError {
    fn from(err: sqlx::Error) -> Self {
        TransferError::Database(DatabaseError::Sqlx(err))
    }
}

/// The whole portfolio in one document, as produced by export and consumed by import.
///
/// An absent `about`/`contact` record exports as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub about: AboutInput,
    #[serde(default)]
    pub contact: ContactInput,
    #[serde(default)]
    pub projects: Vec<ProjectInput>,
    #[serde(default)]
    pub blog: Vec<BlogPostInput>,
}

impl PortfolioDocument {
    /// Check every list entry up front so a bad document never opens a transaction.
    pub fn validate(&self) -> Result<(), TransferError> {
        let mut errors = FieldErrors::new();

        for (index, project) in self.projects.iter().enumerate() {
            if let Err(fields) = project.validate() {
                for (field, problem) in fields {
                    errors.insert(format!("projects[{}].{}", index, field), problem);
                }
            }
        }
        for (index, post) in self.blog.iter().enumerate() {
            if let Err(fields) = post.validate() {
                for (field, problem) in fields {
                    errors.insert(format!("blog[{}].{}", index, field), problem);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TransferError::Validation(errors))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub blog: usize,
    pub projects: usize,
}

/// Reads or replaces the entire content store.
#[derive(Clone)]
pub struct TransferService {
    db: Database,
}

impl TransferService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn export(&self) -> Result<PortfolioDocument, TransferError> {
        // One transaction so the four reads see the same snapshot
        let mut tx = self.db.pool().begin().await?;

        let about = About::get(&mut *tx).await?;
        let contact = Contact::get(&mut *tx).await?;
        let projects = Project::list(&mut *tx).await?;
        let blog = BlogPost::list(&mut *tx).await?;

        tx.commit().await?;

        Ok(PortfolioDocument {
            about: about.map(AboutInput::from).unwrap_or_default(),
            contact: contact.map(ContactInput::from).unwrap_or_default(),
            projects: projects.into_iter().map(ProjectInput::from).collect(),
            blog: blog.into_iter().map(BlogPostInput::from).collect(),
        })
    }

    /// Replace all content with `document`.
    ///
    /// Singletons are overwritten (missing fields become empty), blog posts and
    /// projects are deleted and re-inserted. Nothing is written unless everything is.
    /// Racing another writer for the SQLite write lock can fail with
    /// SQLITE_BUSY; the store is then left as it was.
    pub async fn import(&self, document: &PortfolioDocument) -> Result<ImportSummary, TransferError> {
        document.validate()?;

        let mut tx = self.db.pool().begin().await?;

        About::upsert(&mut *tx, &document.about, MissingFields::Clear).await?;
        Contact::upsert(&mut *tx, &document.contact, MissingFields::Clear).await?;

        let removed_projects = Project::delete_all(&mut *tx).await?;
        let removed_posts = BlogPost::delete_all(&mut *tx).await?;

        for project in &document.projects {
            Project::create(&mut *tx, project).await?;
        }
        for post in &document.blog {
            BlogPost::create(&mut *tx, post).await?;
        }

        tx.commit().await?;

        let summary = ImportSummary {
            blog: document.blog.len(),
            projects: document.projects.len(),
        };
        tracing::info!(
            removed_projects,
            removed_posts,
            projects = summary.projects,
            blog = summary.blog,
            "Portfolio import committed"
        );
        Ok(summary)
    }
}

impl From<About> for AboutInput {
    fn from(about: About) -> Self {
        Self {
            name: Some(about.name),
            title: Some(about.title),
            bio: Some(about.bio),
            image_url: Some(about.image_url),
        }
    }
}

impl From<Contact> for ContactInput {
    fn from(contact: Contact) -> Self {
        Self {
            email: Some(contact.email),
            linkedin: Some(contact.linkedin),
            github: Some(contact.github),
            message: Some(contact.message),
        }
    }
}

impl From<Project> for ProjectInput {
    fn from(project: Project) -> Self {
        Self {
            id: Some(project.id),
            title: Some(project.title),
            description: Some(project.description),
            link: Some(project.link),
        }
    }
}

impl From<BlogPost> for BlogPostInput {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Some(post.id),
            title: Some(post.title),
            content: Some(post.content),
        }
    }
}
