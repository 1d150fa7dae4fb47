mod analytics;
mod contact;
mod fallback;
mod health_check;
mod helpers;
mod home;
mod resume;

pub use analytics::record_event;
pub use contact::submit_contact;
pub use fallback::not_found;
pub use health_check::health_check;
pub use helpers::ApiResponse;
pub use home::home;
pub use resume::download_resume;
