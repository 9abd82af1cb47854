use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::models::{ApplicationRecord, ApplicationStatus, NewApplication, RecordId, SummaryCounts};

/// In-memory application tracker. Records are kept newest-first.
#[derive(Debug, Default)]
pub struct Pipeline {
    records: Vec<ApplicationRecord>,
    next_id: u64,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four applications the dashboard starts with.
    pub fn with_sample_data() -> Self {
        let samples = [
            ("Microsoft", "Cloud Engineer", "Redmond, WA", (2023, 12, 20), ApplicationStatus::Offered),
            ("Amazon", "Full Stack Developer", "Seattle, WA", (2024, 1, 5), ApplicationStatus::Rejected),
            ("Meta", "Software Engineer", "Menlo Park, CA", (2024, 1, 10), ApplicationStatus::Applied),
            (
                "Google",
                "Senior Frontend Developer",
                "Mountain View, CA",
                (2024, 1, 15),
                ApplicationStatus::Interviewing,
            ),
        ];

        let mut pipeline = Self::new();
        for (company, position, location, (y, m, d), status) in samples {
            let mut input = NewApplication::new(company, position).location(location);
            input.applied_date = NaiveDate::from_ymd_opt(y, m, d);
            if let Ok(record) = pipeline.add_record(input) {
                pipeline.set_status(record.id, status);
            }
        }
        pipeline
    }

    /// Validate and prepend a new record in `Applied` status.
    pub fn add_record(&mut self, input: NewApplication) -> Result<ApplicationRecord, ValidationError> {
        let company = input.company.trim();
        let position = input.position.trim();

        if company.is_empty() {
            debug!("Refused application without company");
            return Err(ValidationError::MissingCompany);
        }
        if position.is_empty() {
            debug!("Refused application without position");
            return Err(ValidationError::MissingPosition);
        }

        self.next_id += 1;
        let record = ApplicationRecord {
            id: RecordId(self.next_id),
            company: company.to_string(),
            position: position.to_string(),
            location: input.location.trim().to_string(),
            applied_date: input.applied_date.unwrap_or_else(|| Local::now().date_naive()),
            status: ApplicationStatus::Applied,
        };

        info!(id = %record.id, company = %record.company, position = %record.position, "Added application");
        self.records.insert(0, record.clone());
        Ok(record)
    }

    /// Replace the status of one record. Returns false if `id` is unknown.
    pub fn set_status(&mut self, id: RecordId, status: ApplicationStatus) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                if record.status != status {
                    info!(id = %id, from = %record.status, to = %status, "Status changed");
                }
                record.status = status;
                true
            }
            None => {
                debug!(id = %id, "Status change for unknown application ignored");
                false
            }
        }
    }

    pub fn list_by(&self, status: Option<ApplicationStatus>) -> Vec<&ApplicationRecord> {
        self.records
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .collect()
    }

    pub fn summary_counts(&self) -> SummaryCounts {
        let count = |status| self.records.iter().filter(|r| r.status == status).count();
        SummaryCounts {
            total: self.records.len(),
            interviewing: count(ApplicationStatus::Interviewing),
            rejected: count(ApplicationStatus::Rejected),
            offered: count(ApplicationStatus::Offered),
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&ApplicationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline_with(statuses: &[ApplicationStatus]) -> Pipeline {
        let mut pipeline = Pipeline::new();
        for (i, status) in statuses.iter().enumerate() {
            let record = pipeline
                .add_record(NewApplication::new(format!("Company {}", i), "Engineer"))
                .unwrap();
            pipeline.set_status(record.id, *status);
        }
        pipeline
    }

    #[test]
    fn add_record_starts_applied_and_bumps_total() {
        let mut pipeline = Pipeline::new();
        let before = pipeline.summary_counts().total;

        let record = pipeline
            .add_record(NewApplication::new("Stripe", "Backend Engineer").location("Remote"))
            .unwrap();

        assert_eq!(record.status, ApplicationStatus::Applied);
        assert_eq!(pipeline.summary_counts().total, before + 1);
        assert_eq!(pipeline.get(record.id), Some(&record));
    }

    #[test]
    fn add_record_defaults_date_to_today() {
        let mut pipeline = Pipeline::new();
        let record = pipeline.add_record(NewApplication::new("Acme", "Dev")).unwrap();
        assert_eq!(record.applied_date, Local::now().date_naive());
    }

    #[test]
    fn add_record_keeps_explicit_date() {
        let mut pipeline = Pipeline::new();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let record = pipeline
            .add_record(NewApplication::new("Acme", "Dev").applied_on(date))
            .unwrap();
        assert_eq!(record.applied_date, date);
    }

    #[test]
    fn add_record_rejects_missing_company_or_position() {
        let mut pipeline = Pipeline::with_sample_data();
        let snapshot = pipeline.records().to_vec();

        assert_eq!(
            pipeline.add_record(NewApplication::new("", "X")),
            Err(ValidationError::MissingCompany)
        );
        assert_eq!(
            pipeline.add_record(NewApplication::new("X", "")),
            Err(ValidationError::MissingPosition)
        );
        assert_eq!(
            pipeline.add_record(NewApplication::new("   ", "X")),
            Err(ValidationError::MissingCompany)
        );

        assert_eq!(pipeline.records(), snapshot.as_slice());
    }

    #[test]
    fn new_records_are_prepended() {
        let mut pipeline = Pipeline::new();
        let first = pipeline.add_record(NewApplication::new("A", "One")).unwrap();
        let second = pipeline.add_record(NewApplication::new("B", "Two")).unwrap();

        let ids: Vec<RecordId> = pipeline.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn ids_are_unique() {
        let mut pipeline = Pipeline::new();
        let mut ids = Vec::new();
        for i in 0..20 {
            ids.push(pipeline.add_record(NewApplication::new(format!("C{}", i), "P")).unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn set_status_touches_only_target_record() {
        let mut pipeline = Pipeline::with_sample_data();
        let before = pipeline.records().to_vec();
        let target = before[1].id;

        assert!(pipeline.set_status(target, ApplicationStatus::Offered));

        for (old, new) in before.iter().zip(pipeline.records()) {
            if old.id == target {
                assert_eq!(new.status, ApplicationStatus::Offered);
                assert_eq!(
                    ApplicationRecord { status: old.status, ..new.clone() },
                    *old
                );
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn set_status_unknown_id_is_noop() {
        let mut pipeline = Pipeline::with_sample_data();
        let before = pipeline.records().to_vec();
        assert!(!pipeline.set_status(RecordId(999), ApplicationStatus::Rejected));
        assert_eq!(pipeline.records(), before.as_slice());
    }

    #[test]
    fn list_by_filters_and_preserves_order() {
        let pipeline = pipeline_with(&[
            ApplicationStatus::Applied,
            ApplicationStatus::Rejected,
            ApplicationStatus::Applied,
        ]);

        assert_eq!(pipeline.list_by(None).len(), 3);

        let applied = pipeline.list_by(Some(ApplicationStatus::Applied));
        let companies: Vec<&str> = applied.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(companies, vec!["Company 2", "Company 0"]);

        assert!(pipeline.list_by(Some(ApplicationStatus::Offered)).is_empty());
    }

    #[test]
    fn summary_counts_match_statuses() {
        let pipeline = pipeline_with(&[
            ApplicationStatus::Interviewing,
            ApplicationStatus::Applied,
            ApplicationStatus::Rejected,
            ApplicationStatus::Offered,
        ]);

        assert_eq!(
            pipeline.summary_counts(),
            SummaryCounts { total: 4, interviewing: 1, rejected: 1, offered: 1 }
        );
    }

    #[test]
    fn summary_counts_follow_status_changes() {
        let mut pipeline = pipeline_with(&[ApplicationStatus::Applied, ApplicationStatus::Applied]);
        let id = pipeline.records()[0].id;

        pipeline.set_status(id, ApplicationStatus::Interviewing);
        let counts = pipeline.summary_counts();
        assert_eq!(counts.total, pipeline.len());
        assert_eq!(counts.interviewing, 1);

        for status in ApplicationStatus::ALL {
            let expected = pipeline.records().iter().filter(|r| r.status == status).count();
            assert_eq!(pipeline.list_by(Some(status)).len(), expected);
        }
    }

    #[test]
    fn sample_data_matches_dashboard_seed() {
        let pipeline = Pipeline::with_sample_data();
        let companies: Vec<&str> = pipeline.records().iter().map(|r| r.company.as_str()).collect();
        assert_eq!(companies, vec!["Google", "Meta", "Amazon", "Microsoft"]);
        assert_eq!(pipeline.records()[0].status, ApplicationStatus::Interviewing);
        assert_eq!(
            pipeline.summary_counts(),
            SummaryCounts { total: 4, interviewing: 1, rejected: 1, offered: 1 }
        );
    }
}
