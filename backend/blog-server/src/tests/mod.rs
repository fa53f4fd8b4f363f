mod api;
mod app_state;
