//! ultheme
//!
//! Theming engine for Universal Login screens: turns a screen's branding
//! payload (tenant settings, default theme, organization overrides) into a
//! flat set of `--ul-theme-*` CSS custom properties and applies the minimal
//! set of changes to a style target.

pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod theme;
pub mod validator;
