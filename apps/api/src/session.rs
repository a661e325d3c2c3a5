//! Bounded session cache of companies viewed during a browsing session.
//!
//! Keyed by company name, insertion-ordered, capped: at capacity the oldest
//! entry is evicted. Re-inserting an existing company refreshes its data
//! without changing its position. The cache is in-memory only and owned by
//! the app state, never persisted.

use std::collections::HashMap;

use crate::models::job::JobData;

pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
pub struct ViewedCompanies {
    capacity: usize,
    /// Insertion order; parallel to `entries`.
    order: Vec<String>,
    entries: HashMap<String, JobData>,
}

impl Default for ViewedCompanies {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ViewedCompanies {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, job: JobData) {
        // A zero-capacity cache stores nothing.
        if self.capacity == 0 {
            return;
        }
        let company = job.company.clone();
        if self.entries.insert(company.clone(), job).is_none() {
            if self.order.len() == self.capacity {
                let oldest = self.order.remove(0);
                self.entries.remove(&oldest);
            }
            self.order.push(company);
        }
    }

    pub fn merge(&mut self, jobs: impl IntoIterator<Item = JobData>) {
        for job in jobs {
            self.insert(job);
        }
    }

    pub fn get(&self, company: &str) -> Option<&JobData> {
        self.entries.get(company)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot in insertion order, oldest first.
    pub fn snapshot(&self) -> Vec<JobData> {
        self.order
            .iter()
            .filter_map(|company| self.entries.get(company).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(company: &str) -> JobData {
        JobData {
            company: company.to_string(),
            title: "Engineer".to_string(),
            main_info: String::new(),
            description: "desc".to_string(),
            url: String::new(),
            job_url: String::new(),
            image_url: None,
            location: "Remote".to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = ViewedCompanies::new(10);
        cache.insert(job("Acme"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("Acme").unwrap().title, "Engineer");
        assert!(cache.get("Other").is_none());
    }

    #[test]
    fn test_reinsert_refreshes_without_growing() {
        let mut cache = ViewedCompanies::new(10);
        cache.insert(job("Acme"));
        let mut updated = job("Acme");
        updated.title = "Staff Engineer".to_string();
        cache.insert(updated);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("Acme").unwrap().title, "Staff Engineer");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut cache = ViewedCompanies::new(3);
        for name in ["A", "B", "C", "D"] {
            cache.insert(job(name));
        }
        assert_eq!(cache.len(), 3);
        assert!(cache.get("A").is_none(), "oldest entry must be evicted");
        assert!(cache.get("D").is_some());
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let mut cache = ViewedCompanies::new(10);
        for name in ["B", "A", "C"] {
            cache.insert(job(name));
        }
        let companies: Vec<_> = cache.snapshot().into_iter().map(|j| j.company).collect();
        assert_eq!(companies, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut cache = ViewedCompanies::new(0);
        cache.insert(job("Acme"));
        assert!(cache.is_empty());
        assert!(cache.get("Acme").is_none());
    }

    #[test]
    fn test_merge_inserts_all() {
        let mut cache = ViewedCompanies::new(10);
        cache.merge(vec![job("A"), job("B")]);
        assert_eq!(cache.len(), 2);
    }
}
