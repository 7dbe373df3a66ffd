pub mod latlon;
pub mod svy21;
