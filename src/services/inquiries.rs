//! Inquiry lifecycle service
//!
//! Inquiries move Unconfirmed -> Pending -> Accepted | Rejected. Accepting
//! creates a Project seeded from the inquiry and notifies the requester.
//! The side effects run sequentially without compensation: when project
//! creation succeeds but the notification fails, the inquiry stays Accepted
//! and the project stays created; the email failure is only logged.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::InquiryStatus,
    models::inquiry::{CreateInquiry, DecideInquiry, Inquiry, InquiryDecision, UpdateInquiry},
    models::project::{CreateProject, Project},
    repository::Repository,
    services::{email::EmailService, projects::ProjectsService},
};

#[derive(Clone)]
pub struct InquiriesService {
    repository: Repository,
    projects: ProjectsService,
    email: EmailService,
}

impl InquiriesService {
    pub fn new(repository: Repository, projects: ProjectsService, email: EmailService) -> Self {
        Self {
            repository,
            projects,
            email,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Inquiry>> {
        self.repository.inquiries.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Inquiry>> {
        self.repository.inquiries.get_by_id(id).await
    }

    /// Create an inquiry in the Unconfirmed state with a fresh opaque token
    pub async fn create(&self, data: &CreateInquiry) -> AppResult<Inquiry> {
        let token = Uuid::new_v4().to_string();
        self.repository.inquiries.create(&token, data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateInquiry) -> AppResult<Option<Inquiry>> {
        self.repository.inquiries.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<Option<Inquiry>> {
        self.repository.inquiries.delete(id).await
    }

    /// Redeem a confirmation token: Unconfirmed -> Pending
    pub async fn confirm(&self, token: &str) -> AppResult<Inquiry> {
        let inquiry = self
            .repository
            .inquiries
            .get_by_token(token)
            .await?
            .ok_or(AppError::InvalidToken)?;

        match inquiry.status {
            InquiryStatus::Unconfirmed => {}
            other => {
                return Err(AppError::InvalidTransition(format!(
                    "Inquiry {} is already {}",
                    inquiry.id, other
                )))
            }
        }

        self.repository
            .inquiries
            .set_status(inquiry.id, InquiryStatus::Pending)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", inquiry.id)))
    }

    /// Apply an admin decision to a pending inquiry.
    ///
    /// Accepting returns the created project alongside the inquiry.
    pub async fn decide(
        &self,
        id: i32,
        data: &DecideInquiry,
    ) -> AppResult<(Inquiry, Option<Project>)> {
        let inquiry = self
            .repository
            .inquiries
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", id)))?;

        if !inquiry.status.can_decide() {
            return Err(AppError::InvalidTransition(format!(
                "Inquiry {} is {} and cannot be decided",
                id, inquiry.status
            )));
        }

        match data.decision {
            InquiryDecision::Accepted => self.accept(inquiry).await,
            InquiryDecision::Rejected => {
                let reason = data.reason.as_deref().unwrap_or("No reason given");
                self.reject(inquiry, reason).await
            }
        }
    }

    async fn accept(&self, inquiry: Inquiry) -> AppResult<(Inquiry, Option<Project>)> {
        let inquiry = self
            .repository
            .inquiries
            .set_status(inquiry.id, InquiryStatus::Accepted)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", inquiry.id)))?;

        let seed = CreateProject {
            name: inquiry.name.clone(),
            description: inquiry.description.clone(),
            lead_contact: inquiry.lead_contact.clone(),
            courses: inquiry.courses.0.clone(),
            timelapse: inquiry.timelapse.as_ref().map(|t| t.0),
            status: None,
            devices: inquiry.devices.0.clone(),
            notes: inquiry.notes.clone(),
            images: Vec::new(),
        };
        let project = self.projects.create(&seed).await?;

        tracing::info!(
            "Inquiry {} accepted, created project {} ({})",
            inquiry.id,
            project.id,
            project.slug
        );

        if let Err(e) = self
            .email
            .send_inquiry_accepted(&inquiry.requester_email, &project.name, &project.path())
            .await
        {
            // No rollback: the accepted inquiry and the project stand
            tracing::error!(
                "Acceptance notification for inquiry {} failed: {}",
                inquiry.id,
                e
            );
        }

        Ok((inquiry, Some(project)))
    }

    async fn reject(&self, inquiry: Inquiry, reason: &str) -> AppResult<(Inquiry, Option<Project>)> {
        let inquiry = self
            .repository
            .inquiries
            .set_status(inquiry.id, InquiryStatus::Rejected)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", inquiry.id)))?;

        tracing::info!("Inquiry {} rejected: {}", inquiry.id, reason);

        if let Err(e) = self
            .email
            .send_inquiry_rejected(&inquiry.requester_email, &inquiry.name, reason)
            .await
        {
            tracing::error!(
                "Rejection notification for inquiry {} failed: {}",
                inquiry.id,
                e
            );
        }

        Ok((inquiry, None))
    }
}
