use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::portal::domain::{
    Project, ProjectRequest, ProjectRequestStatus, ProjectStatus,
};

pub(super) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn request(id: &str, status: ProjectRequestStatus, created_at: DateTime<Utc>) -> ProjectRequest {
    ProjectRequest {
        id: id.to_string(),
        status,
        created_at,
        contact_email: "owner@bartoncreekdental.com".to_string(),
        project_name: Some(format!("Website rebuild {id}")),
    }
}

pub(super) fn project(id: &str, status: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {id}"),
        status: ProjectStatus::from(status),
    }
}
