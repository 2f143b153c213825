//! Repository layer for database operations

pub mod devices;
pub mod histories;
pub mod inquiries;
pub mod manufacturers;
pub mod projects;
pub mod tags;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub devices: devices::DevicesRepository,
    pub manufacturers: manufacturers::ManufacturersRepository,
    pub tags: tags::TagsRepository,
    pub projects: projects::ProjectsRepository,
    pub inquiries: inquiries::InquiriesRepository,
    pub histories: histories::HistoriesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            devices: devices::DevicesRepository::new(pool.clone()),
            manufacturers: manufacturers::ManufacturersRepository::new(pool.clone()),
            tags: tags::TagsRepository::new(pool.clone()),
            projects: projects::ProjectsRepository::new(pool.clone()),
            inquiries: inquiries::InquiriesRepository::new(pool.clone()),
            histories: histories::HistoriesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
