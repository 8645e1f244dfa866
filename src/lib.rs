pub mod config;
pub mod export;
pub mod i18n;
pub mod security;
pub mod validation;
pub mod waitlist;
pub mod web;
