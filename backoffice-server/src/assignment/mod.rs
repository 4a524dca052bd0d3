//! Lead-to-employee assignment workflow
//!
//! The one stateful process in the back office: validate the request, look
//! up the lead and the employee concurrently, persist the assignment
//! snapshot onto the lead row, then fire a best-effort customer
//! notification whose outcome never affects the result of the call.

mod pg;

pub use pg::PgRecords;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::{AppError, ErrorCode};
use shared::models::{EmployeeContact, Lead};
use thiserror::Error;

use crate::notify::{EmployeeDetailsNotice, Notifier};

/// Persistence-layer failure; the message passes through to the caller.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError(e.to_string())
    }
}

/// Lead persistence seam
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn find_lead(&self, id: &str) -> Result<Option<Lead>, StoreError>;

    /// Single-row write of the assignment snapshot. Returns the updated
    /// row, or `None` when the lead no longer exists.
    async fn record_assignment(
        &self,
        lead_id: &str,
        fields: &AssignmentFields,
    ) -> Result<Option<Lead>, StoreError>;
}

/// Employee lookup seam (the assignment flow never writes employees)
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn find_contact(&self, id: &str) -> Result<Option<EmployeeContact>, StoreError>;
}

/// Transient assignment request; never persisted.
/// Name and email are overrides — when absent or empty, the employee
/// record's own values are used.
#[derive(Debug, Clone, Default)]
pub struct AssignmentRequest {
    pub lead_id: String,
    pub employee_id: String,
    pub employee_name: Option<String>,
    pub employee_email: Option<String>,
}

/// The snapshot written onto the lead row. Point-in-time copies, not live
/// references: a later employee edit does not touch assigned leads.
#[derive(Debug, Clone)]
pub struct AssignmentFields {
    pub employee_id: String,
    pub employee_name: String,
    pub employee_email: String,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("leadId and employeeId are required")]
    MissingIds,
    #[error("Lead not found")]
    LeadNotFound,
    #[error("Employee not found")]
    EmployeeNotFound,
    /// Store failure on a read or the authoritative write; message
    /// surfaced verbatim, no retry.
    #[error("{0}")]
    Store(String),
}

impl From<AssignError> for AppError {
    fn from(e: AssignError) -> Self {
        let code = match &e {
            AssignError::MissingIds => ErrorCode::ValidationFailed,
            AssignError::LeadNotFound => ErrorCode::LeadNotFound,
            AssignError::EmployeeNotFound => ErrorCode::EmployeeNotFound,
            AssignError::Store(_) => ErrorCode::DatabaseError,
        };
        AppError::with_message(code, e.to_string())
    }
}

/// Assignment workflow service.
///
/// Stores and the notifier are injected at construction
/// ([`AppState::new`](crate::state::AppState::new)); tests swap in
/// in-memory implementations.
#[derive(Clone)]
pub struct AssignmentService {
    leads: Arc<dyn LeadStore>,
    employees: Arc<dyn EmployeeDirectory>,
    notifier: Arc<dyn Notifier>,
}

impl AssignmentService {
    pub fn new(
        leads: Arc<dyn LeadStore>,
        employees: Arc<dyn EmployeeDirectory>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            leads,
            employees,
            notifier,
        }
    }

    /// Assign a lead to an employee and return the updated lead row.
    ///
    /// Valid from both the unassigned and the assigned state:
    /// re-assignment overwrites the previous snapshot and `assigned_at`.
    /// Two racing calls on the same lead resolve last-writer-wins with no
    /// error to either caller.
    pub async fn assign(&self, req: AssignmentRequest) -> Result<Lead, AssignError> {
        if req.lead_id.is_empty() || req.employee_id.is_empty() {
            return Err(AssignError::MissingIds);
        }

        // Two independent point reads, issued concurrently.
        let (lead, employee) = tokio::try_join!(
            self.leads.find_lead(&req.lead_id),
            self.employees.find_contact(&req.employee_id),
        )
        .map_err(|e| AssignError::Store(e.to_string()))?;

        let lead = lead.ok_or(AssignError::LeadNotFound)?;
        let employee = employee.ok_or(AssignError::EmployeeNotFound)?;

        let fields = AssignmentFields {
            employee_id: req.employee_id,
            employee_name: effective(req.employee_name, &employee.name),
            employee_email: effective(req.employee_email, &employee.email),
            assigned_at: shared::util::now(),
        };

        let updated = self
            .leads
            .record_assignment(&lead.id, &fields)
            .await
            .map_err(|e| AssignError::Store(e.to_string()))?
            .ok_or_else(|| AssignError::Store("assignment update affected no rows".into()))?;

        // The assignment is committed at this point; the customer email is
        // best-effort and its outcome is discarded after logging.
        self.notify_customer(&lead, &employee).await;

        Ok(updated)
    }

    /// Best-effort notify: failures are logged and swallowed by contract.
    ///
    /// The payload carries the employee record's own contact details, not
    /// the snapshot overrides, and the lead as read before the update.
    async fn notify_customer(&self, lead: &Lead, employee: &EmployeeContact) {
        let notice = EmployeeDetailsNotice {
            customer_email: lead.email.clone(),
            customer_name: lead.name.clone(),
            destination: lead.destination.clone(),
            employee_name: employee.name.clone(),
            employee_phone: employee.phone.clone(),
            employee_email: employee.email.clone(),
        };
        if let Err(e) = self.notifier.send_employee_details(&notice).await {
            tracing::warn!(
                customer = %notice.customer_email,
                destination = %notice.destination,
                error = %e,
                "Failed to send employee details email"
            );
        }
    }
}

/// Override wins when present and non-empty, else the employee record value.
fn effective(override_value: Option<String>, fallback: &str) -> String {
    match override_value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::notify::{CredentialsNotice, NotifyError};

    /// In-memory store holding at most one lead and any number of employees.
    struct MemRecords {
        lead: Mutex<Option<Lead>>,
        employees: Vec<(String, EmployeeContact)>,
        fail_write: Option<String>,
        read_calls: AtomicUsize,
        update_calls: AtomicUsize,
    }

    impl MemRecords {
        fn new(lead: Option<Lead>, employees: Vec<(String, EmployeeContact)>) -> Self {
            Self {
                lead: Mutex::new(lead),
                employees,
                fail_write: None,
                read_calls: AtomicUsize::new(0),
                update_calls: AtomicUsize::new(0),
            }
        }

        fn failing_writes(mut self, message: &str) -> Self {
            self.fail_write = Some(message.to_string());
            self
        }

        fn stored_lead(&self) -> Option<Lead> {
            self.lead.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LeadStore for MemRecords {
        async fn find_lead(&self, id: &str) -> Result<Option<Lead>, StoreError> {
            self.read_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.lead.lock().unwrap().clone().filter(|l| l.id == id))
        }

        async fn record_assignment(
            &self,
            lead_id: &str,
            fields: &AssignmentFields,
        ) -> Result<Option<Lead>, StoreError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(msg) = &self.fail_write {
                return Err(StoreError(msg.clone()));
            }
            let mut guard = self.lead.lock().unwrap();
            match guard.as_mut().filter(|l| l.id == lead_id) {
                Some(lead) => {
                    lead.assigned_employee_id = Some(fields.employee_id.clone());
                    lead.assigned_employee_name = Some(fields.employee_name.clone());
                    lead.assigned_employee_email = Some(fields.employee_email.clone());
                    lead.assigned_at = Some(fields.assigned_at);
                    Ok(Some(lead.clone()))
                }
                None => Ok(None),
            }
        }
    }

    #[async_trait]
    impl EmployeeDirectory for MemRecords {
        async fn find_contact(&self, id: &str) -> Result<Option<EmployeeContact>, StoreError> {
            self.read_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .employees
                .iter()
                .find(|(eid, _)| eid == id)
                .map(|(_, c)| c.clone()))
        }
    }

    /// Records every notice; optionally fails each send.
    struct RecordingNotifier {
        sent: Mutex<Vec<EmployeeDetailsNotice>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new(fail: bool) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail,
            }
        }

        fn sent(&self) -> Vec<EmployeeDetailsNotice> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_employee_details(
            &self,
            notice: &EmployeeDetailsNotice,
        ) -> Result<String, NotifyError> {
            self.sent.lock().unwrap().push(notice.clone());
            if self.fail {
                Err(NotifyError::Rejected {
                    status: 500,
                    body: "smtp down".into(),
                })
            } else {
                Ok("msg-1".into())
            }
        }

        async fn send_credentials(&self, _notice: &CredentialsNotice) -> Result<String, NotifyError> {
            Ok("msg-2".into())
        }
    }

    fn lead_asha() -> Lead {
        Lead {
            id: "L1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: None,
            destination: "Kashmir".into(),
            travel_date: None,
            travelers: 2,
            notes: None,
            status: "New".into(),
            created_at: shared::util::now(),
            assigned_employee_id: None,
            assigned_employee_name: None,
            assigned_employee_email: None,
            assigned_at: None,
        }
    }

    fn rahul() -> (String, EmployeeContact) {
        (
            "E1".into(),
            EmployeeContact {
                name: "Rahul".into(),
                phone: "9999999999".into(),
                email: "rahul@agency.com".into(),
            },
        )
    }

    fn service(
        records: Arc<MemRecords>,
        notifier: Arc<RecordingNotifier>,
    ) -> AssignmentService {
        AssignmentService::new(records.clone(), records, notifier)
    }

    fn request(lead_id: &str, employee_id: &str) -> AssignmentRequest {
        AssignmentRequest {
            lead_id: lead_id.into(),
            employee_id: employee_id.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn missing_ids_fail_validation_without_store_access() {
        let records = Arc::new(MemRecords::new(Some(lead_asha()), vec![rahul()]));
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records.clone(), notifier.clone());

        for (lead_id, employee_id) in [("", "E1"), ("L1", ""), ("", "")] {
            let err = svc.assign(request(lead_id, employee_id)).await.unwrap_err();
            assert!(matches!(err, AssignError::MissingIds));
            assert_eq!(err.to_string(), "leadId and employeeId are required");
        }

        assert_eq!(records.read_calls.load(Ordering::SeqCst), 0);
        assert_eq!(records.update_calls.load(Ordering::SeqCst), 0);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn unknown_lead_is_not_found() {
        let records = Arc::new(MemRecords::new(None, vec![rahul()]));
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records.clone(), notifier.clone());

        let err = svc.assign(request("L1", "E1")).await.unwrap_err();
        assert!(matches!(err, AssignError::LeadNotFound));
        assert!(err.to_string().contains("Lead not found"));
        assert_eq!(records.update_calls.load(Ordering::SeqCst), 0);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn unknown_employee_is_not_found() {
        let records = Arc::new(MemRecords::new(Some(lead_asha()), vec![]));
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records.clone(), notifier.clone());

        let err = svc.assign(request("L1", "E1")).await.unwrap_err();
        assert!(matches!(err, AssignError::EmployeeNotFound));
        assert_eq!(records.update_calls.load(Ordering::SeqCst), 0);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn assign_writes_snapshot_and_notifies() {
        let records = Arc::new(MemRecords::new(Some(lead_asha()), vec![rahul()]));
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records.clone(), notifier.clone());

        let lead = svc.assign(request("L1", "E1")).await.unwrap();

        assert_eq!(lead.assigned_employee_id.as_deref(), Some("E1"));
        assert_eq!(lead.assigned_employee_name.as_deref(), Some("Rahul"));
        assert_eq!(
            lead.assigned_employee_email.as_deref(),
            Some("rahul@agency.com")
        );
        assert!(lead.assigned_at.is_some());
        assert_eq!(records.update_calls.load(Ordering::SeqCst), 1);

        let sent = notifier.sent();
        assert_eq!(
            sent,
            vec![EmployeeDetailsNotice {
                customer_email: "asha@example.com".into(),
                customer_name: "Asha".into(),
                destination: "Kashmir".into(),
                employee_name: "Rahul".into(),
                employee_phone: "9999999999".into(),
                employee_email: "rahul@agency.com".into(),
            }]
        );
    }

    #[tokio::test]
    async fn overrides_take_precedence_in_snapshot_only() {
        let records = Arc::new(MemRecords::new(Some(lead_asha()), vec![rahul()]));
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records.clone(), notifier.clone());

        let lead = svc
            .assign(AssignmentRequest {
                lead_id: "L1".into(),
                employee_id: "E1".into(),
                employee_name: Some("Rahul S.".into()),
                employee_email: Some("rahul.s@agency.com".into()),
            })
            .await
            .unwrap();

        assert_eq!(lead.assigned_employee_name.as_deref(), Some("Rahul S."));
        assert_eq!(
            lead.assigned_employee_email.as_deref(),
            Some("rahul.s@agency.com")
        );

        // The notification still carries the employee record's own details.
        let sent = notifier.sent();
        assert_eq!(sent[0].employee_name, "Rahul");
        assert_eq!(sent[0].employee_email, "rahul@agency.com");
    }

    #[tokio::test]
    async fn empty_overrides_fall_back_to_employee_record() {
        let records = Arc::new(MemRecords::new(Some(lead_asha()), vec![rahul()]));
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records, notifier);

        let lead = svc
            .assign(AssignmentRequest {
                lead_id: "L1".into(),
                employee_id: "E1".into(),
                employee_name: Some(String::new()),
                employee_email: None,
            })
            .await
            .unwrap();

        assert_eq!(lead.assigned_employee_name.as_deref(), Some("Rahul"));
        assert_eq!(
            lead.assigned_employee_email.as_deref(),
            Some("rahul@agency.com")
        );
    }

    #[tokio::test]
    async fn reassignment_overwrites_previous_snapshot() {
        let priya = (
            "E2".to_string(),
            EmployeeContact {
                name: "Priya".into(),
                phone: "8888888888".into(),
                email: "priya@agency.com".into(),
            },
        );
        let records = Arc::new(MemRecords::new(Some(lead_asha()), vec![rahul(), priya]));
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records.clone(), notifier);

        let first = svc.assign(request("L1", "E1")).await.unwrap();
        let second = svc.assign(request("L1", "E2")).await.unwrap();

        assert_eq!(second.assigned_employee_id.as_deref(), Some("E2"));
        assert_eq!(second.assigned_employee_name.as_deref(), Some("Priya"));
        assert!(second.assigned_at.unwrap() >= first.assigned_at.unwrap());
        assert_eq!(
            records.stored_lead().unwrap().assigned_employee_id.as_deref(),
            Some("E2")
        );
    }

    #[tokio::test]
    async fn notifier_failure_does_not_fail_assignment() {
        let records = Arc::new(MemRecords::new(Some(lead_asha()), vec![rahul()]));
        let notifier = Arc::new(RecordingNotifier::new(true));
        let svc = service(records.clone(), notifier.clone());

        let lead = svc.assign(request("L1", "E1")).await.unwrap();

        assert_eq!(lead.assigned_employee_id.as_deref(), Some("E1"));
        assert_eq!(
            records.stored_lead().unwrap().assigned_employee_id.as_deref(),
            Some("E1")
        );
        // The attempt was made, and its failure was swallowed.
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn store_write_failure_propagates_verbatim() {
        let records = Arc::new(
            MemRecords::new(Some(lead_asha()), vec![rahul()]).failing_writes("connection reset"),
        );
        let notifier = Arc::new(RecordingNotifier::new(false));
        let svc = service(records.clone(), notifier.clone());

        let err = svc.assign(request("L1", "E1")).await.unwrap_err();
        assert!(matches!(err, AssignError::Store(_)));
        assert_eq!(err.to_string(), "connection reset");
        // Lead untouched, no notification attempt.
        assert!(records.stored_lead().unwrap().assigned_employee_id.is_none());
        assert!(notifier.sent().is_empty());
    }
}
