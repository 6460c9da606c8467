pub mod check;
pub mod configure;
pub mod icons;
pub mod projects;
pub mod work;
