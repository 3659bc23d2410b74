pub(crate) mod help;
pub(crate) mod hud;
pub(crate) mod toolbar;
