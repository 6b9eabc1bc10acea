pub mod composite;
pub mod grain;
pub mod strip;
pub mod tone;
