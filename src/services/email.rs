//! Email service for inquiry confirmations and admin notifications

use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send a plain test email to verify the SMTP configuration
    pub async fn send_test(&self, to: &str) -> AppResult<()> {
        let subject = "LabTrack test email";
        let body = "This is a test email from the LabTrack server.\n\
                    If you can read this, the SMTP configuration works.\n";
        self.send_email(to, subject, body).await
    }

    /// Ask a requester to confirm their inquiry via token link
    pub async fn send_inquiry_confirmation(&self, to: &str, token: &str) -> AppResult<()> {
        let subject = "Please confirm your project inquiry";
        let body = format!(
            r#"
Thank you for your project inquiry.

Please confirm it by opening the following link:

{base}/confirm?token={token}

Your inquiry will not be reviewed until it is confirmed.
"#,
            base = self.config.public_base_url,
            token = token
        );
        self.send_email(to, subject, &body).await
    }

    /// Notify an administrator that a confirmed inquiry awaits a decision
    pub async fn send_new_inquiry_opening(
        &self,
        to: &str,
        inquiry_name: &str,
        requester_name: &str,
    ) -> AppResult<()> {
        let subject = "New project inquiry awaiting review";
        let body = format!(
            r#"
A new project inquiry has been confirmed and awaits your decision.

Project: {inquiry_name}
Requester: {requester_name}
"#,
        );
        self.send_email(to, subject, &body).await
    }

    /// Tell a requester their inquiry was accepted and where the project lives
    pub async fn send_inquiry_accepted(
        &self,
        to: &str,
        project_name: &str,
        project_path: &str,
    ) -> AppResult<()> {
        let subject = "Your project inquiry was accepted";
        let body = format!(
            r#"
Good news: your project inquiry "{project_name}" was accepted.

The project page is available at:

{base}{project_path}
"#,
            base = self.config.public_base_url,
        );
        self.send_email(to, subject, &body).await
    }

    /// Tell a requester their inquiry was rejected, with the admin's reason
    pub async fn send_inquiry_rejected(
        &self,
        to: &str,
        inquiry_name: &str,
        reason: &str,
    ) -> AppResult<()> {
        let subject = "Your project inquiry was rejected";
        let body = format!(
            r#"
Unfortunately your project inquiry "{inquiry_name}" was rejected.

Reason given: {reason}
"#,
        );
        self.send_email(to, subject, &body).await
    }

    /// Generic email sending function
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let from_name = self.config.smtp_from_name.as_deref().unwrap_or("LabTrack");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Email(format!("Invalid from address: {}", e)))?;

        let to_mailbox =
            Mailbox::from_str(to).map_err(|e| AppError::Email(format!("Invalid to address: {}", e)))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(format!(
                                r#"<html><body><pre>{}</pre></body></html>"#,
                                body.replace('\n', "<br>")
                            )),
                    ),
            )
            .map_err(|e| AppError::Email(format!("Failed to build email: {}", e)))?;

        let mailer_builder = if self.config.smtp_use_tls {
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Email(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port);

        let mailer_builder = if let (Some(username), Some(password)) =
            (&self.config.smtp_username, &self.config.smtp_password)
        {
            mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer_builder
        };

        let mailer = mailer_builder.build();

        mailer
            .send(&email)
            .map_err(|e| AppError::Email(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
