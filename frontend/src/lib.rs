pub mod components;
pub mod l10n;
pub mod pages;
pub mod services;
pub mod theme;
