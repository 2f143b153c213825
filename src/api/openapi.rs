//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{devices, health, histories, images, inquiries, mailer, manufacturers, projects, tags, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabTrack API",
        version = "1.0.0",
        description = "Laboratory Equipment Inventory and Project Tracker REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Devices
        devices::list_devices,
        devices::get_device,
        devices::create_device,
        devices::update_device,
        devices::delete_device,
        // Manufacturers
        manufacturers::list_manufacturers,
        manufacturers::get_manufacturer,
        manufacturers::create_manufacturer,
        manufacturers::update_manufacturer,
        manufacturers::bulk_update_manufacturers,
        manufacturers::delete_manufacturer,
        manufacturers::delete_all_manufacturers,
        // Tags
        tags::list_tags,
        tags::get_tag,
        tags::create_tag,
        tags::update_tag,
        tags::bulk_update_tags,
        tags::delete_tag,
        tags::delete_all_tags,
        // Projects
        projects::list_projects,
        projects::get_project,
        projects::create_project,
        projects::update_project,
        projects::delete_project,
        projects::delete_all_projects,
        // Users
        users::list_users,
        users::list_filtered_users,
        users::list_users_by_role,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::delete_all_users,
        users::check_password,
        // Inquiries
        inquiries::list_inquiries,
        inquiries::get_inquiry,
        inquiries::create_inquiry,
        inquiries::update_inquiry,
        inquiries::delete_inquiry,
        inquiries::confirm_inquiry,
        inquiries::decide_inquiry,
        // Histories
        histories::list_histories,
        histories::get_history,
        histories::append_history,
        histories::update_history,
        histories::delete_history,
        histories::delete_all_histories,
        // Images
        images::upload_images,
        // Mailer
        mailer::send_test_email,
        mailer::send_inquiry_confirmation_email,
        mailer::send_new_project_inquiry_opening_email,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::DeviceStatus,
            crate::models::enums::ProjectStatus,
            crate::models::enums::InquiryStatus,
            crate::models::enums::UserRole,
            crate::models::enums::HistoryChange,
            // Devices
            crate::models::device::Device,
            crate::models::device::CreateDevice,
            crate::models::device::UpdateDevice,
            crate::models::device::DevicesResponse,
            crate::models::device::DeviceResponse,
            // Manufacturers
            crate::models::manufacturer::Manufacturer,
            crate::models::manufacturer::CreateManufacturer,
            crate::models::manufacturer::UpdateManufacturer,
            crate::models::manufacturer::BulkManufacturerUpdate,
            crate::models::manufacturer::ManufacturersResponse,
            crate::models::manufacturer::ManufacturerResponse,
            // Tags
            crate::models::tag::Tag,
            crate::models::tag::CreateTag,
            crate::models::tag::UpdateTag,
            crate::models::tag::BulkTagUpdate,
            crate::models::tag::TagsResponse,
            crate::models::tag::TagResponse,
            // Projects
            crate::models::project::Project,
            crate::models::project::Timelapse,
            crate::models::project::DeviceReservation,
            crate::models::project::CreateProject,
            crate::models::project::UpdateProject,
            crate::models::project::ProjectsResponse,
            crate::models::project::ProjectResponse,
            // Users
            crate::models::user::User,
            crate::models::user::UserFiltered,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::CheckPassword,
            crate::models::user::UsersResponse,
            crate::models::user::UserResponse,
            crate::models::user::FilteredUsersResponse,
            crate::models::user::CheckPasswordResponse,
            // Inquiries
            crate::models::inquiry::Inquiry,
            crate::models::inquiry::CreateInquiry,
            crate::models::inquiry::UpdateInquiry,
            crate::models::inquiry::ConfirmInquiry,
            crate::models::inquiry::InquiryDecision,
            crate::models::inquiry::DecideInquiry,
            crate::models::inquiry::InquiriesResponse,
            crate::models::inquiry::InquiryResponse,
            crate::models::inquiry::DecisionResponse,
            // Histories
            crate::models::history::History,
            crate::models::history::HistoryEntry,
            crate::models::history::NewHistoryEntry,
            crate::models::history::AppendHistory,
            crate::models::history::UpdateHistory,
            crate::models::history::ProjectRef,
            crate::models::history::ResolvedHistoryEntry,
            crate::models::history::ResolvedHistory,
            crate::models::history::HistoriesResponse,
            crate::models::history::HistoryResponse,
            crate::models::history::HistoryDocumentResponse,
            // Images
            images::UploadResponse,
            // Mailer
            mailer::TestEmailRequest,
            mailer::InquiryConfirmationEmailRequest,
            mailer::InquiryOpeningEmailRequest,
            mailer::MailerResponse,
            // Shared
            crate::api::DeleteAllResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "devices", description = "Equipment inventory"),
        (name = "manufacturers", description = "Manufacturer management"),
        (name = "tags", description = "Tag management"),
        (name = "projects", description = "Project management"),
        (name = "users", description = "Administrator accounts"),
        (name = "inquiries", description = "Project inquiries and lifecycle"),
        (name = "histories", description = "Per-device change history"),
        (name = "images", description = "Image uploads"),
        (name = "mailer", description = "Outbound email")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
