//! Business logic services

pub mod bulk;
pub mod devices;
pub mod email;
pub mod history;
pub mod images;
pub mod inquiries;
pub mod manufacturers;
pub mod projects;
pub mod slug;
pub mod tags;
pub mod users;

use crate::{
    config::{EmailConfig, UploadsConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub devices: devices::DevicesService,
    pub manufacturers: manufacturers::ManufacturersService,
    pub tags: tags::TagsService,
    pub projects: projects::ProjectsService,
    pub inquiries: inquiries::InquiriesService,
    pub history: history::HistoryService,
    pub users: users::UsersService,
    pub email: email::EmailService,
    pub images: images::ImagesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        email_config: EmailConfig,
        uploads_config: &UploadsConfig,
    ) -> Self {
        let email = email::EmailService::new(email_config);
        let projects = projects::ProjectsService::new(repository.clone());
        Self {
            devices: devices::DevicesService::new(repository.clone()),
            manufacturers: manufacturers::ManufacturersService::new(repository.clone()),
            tags: tags::TagsService::new(repository.clone()),
            inquiries: inquiries::InquiriesService::new(
                repository.clone(),
                projects.clone(),
                email.clone(),
            ),
            history: history::HistoryService::new(repository.clone()),
            users: users::UsersService::new(repository),
            projects,
            email,
            images: images::ImagesService::new(&uploads_config.root_dir),
        }
    }
}
