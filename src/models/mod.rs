pub mod profile;

pub use profile::{UserProfile, UserProfileCreate, UserProfileUpdate};
