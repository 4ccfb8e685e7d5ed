pub mod candidate;
pub mod experience;
pub mod params;
pub mod performance;
pub mod skills;
pub mod traits;
