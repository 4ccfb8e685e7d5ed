use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPosition {
    pub title: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub start_date: NaiveDate,
    /// Set only when the role has ended (job-hopper histories).
    pub end_date: Option<NaiveDate>,
    pub is_current_role: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub team_size: Option<u32>,
    pub direct_reports: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousPosition {
    pub title: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub achievements: Vec<String>,
    pub team_size: Option<u32>,
    pub technologies_used: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub graduation_year: i32,
    pub gpa: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year_obtained: i32,
}

/// Career history. `previous_positions` is ordered most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalExperience {
    pub total_years_experience: u32,
    pub current_position: CurrentPosition,
    pub previous_positions: Vec<PreviousPosition>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
}
