mod app_component;
mod components;
mod support;
mod task_manager;
