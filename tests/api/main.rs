mod health_check;
mod not_found;
mod rate_limit;
mod resume;
mod security;
mod static_site;
